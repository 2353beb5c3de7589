//! Positional recombination of parallel sequences.
//!
//! [zip] pairs each element of the folded sequence with the element at the same index of
//! another sequence. As soon as the other sequence has no element at the current index the
//! reducer is exhausted, and every later step leaves the accumulator untouched. [zip_all] does
//! the same against any number of sequences, and [unzip] turns rows back into columns.

use crate::{fold::Reducer, Error};
use tracing::trace;

/// Pairs elements positionally. See [zip] and [zip_with].
pub struct Zip<'b, U, F> {
    other: &'b [U],
    combine: F,
    exhausted: bool,
}

fn pair<T: Clone, U: Clone>(a: &T, b: &U) -> (T, U) {
    (a.clone(), b.clone())
}

/// Pairs each element with the element at the same index of `other`.
pub fn zip<T: Clone, U: Clone>(other: &[U]) -> Zip<'_, U, fn(&T, &U) -> (T, U)> {
    zip_with(other, pair::<T, U>)
}

/// Combines each element with the element at the same index of `other`.
pub fn zip_with<'b, T, U, R, F>(other: &'b [U], combine: F) -> Zip<'b, U, F>
where
    F: Fn(&T, &U) -> R,
{
    Zip {
        other,
        combine,
        exhausted: false,
    }
}

impl<T, U, R, F> Reducer<T, Vec<R>> for Zip<'_, U, F>
where
    F: Fn(&T, &U) -> R,
{
    fn step(
        &mut self,
        mut acc: Vec<R>,
        item: &T,
        index: usize,
        _items: &[T],
    ) -> Result<Vec<R>, Error> {
        if self.exhausted {
            return Ok(acc);
        }
        match self.other.get(index) {
            Some(other) => acc.push((self.combine)(item, other)),
            None => {
                trace!(index, "zip exhausted");
                self.exhausted = true;
            }
        }
        Ok(acc)
    }
}

/// When [zip_all] stops producing rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ZipAllStop {
    /// Stop once the fold index reaches the number of zipped-with sequences.
    #[default]
    SequenceCount,
    /// Stop once the fold index reaches the length of the shortest zipped-with sequence.
    ShortestSequence,
}

/// Configuration for [zip_all_with_config].
#[derive(Clone, Copy, Debug, Default)]
pub struct Config {
    /// The stopping rule.
    pub stop: ZipAllStop,
}

/// Zips against several sequences. See [zip_all].
pub struct ZipAll<'b, T> {
    others: Vec<&'b [T]>,
    limit: usize,
    exhausted: bool,
}

/// Builds rows of the folded element followed by the elements at the same index of `others`.
///
/// Rows stop once the fold index reaches the number of sequences in `others`.
pub fn zip_all<T>(others: Vec<&[T]>) -> ZipAll<'_, T> {
    zip_all_with_config(others, Config::default())
}

/// Like [zip_all], with the stopping rule taken from `cfg`.
///
/// Rows also stop as soon as any sequence in `others` runs out of elements.
pub fn zip_all_with_config<T>(others: Vec<&[T]>, cfg: Config) -> ZipAll<'_, T> {
    let limit = match cfg.stop {
        ZipAllStop::SequenceCount => others.len(),
        ZipAllStop::ShortestSequence => others.iter().map(|other| other.len()).min().unwrap_or(0),
    };
    ZipAll {
        others,
        limit,
        exhausted: false,
    }
}

impl<T: Clone> Reducer<T, Vec<Vec<T>>> for ZipAll<'_, T> {
    fn step(
        &mut self,
        mut acc: Vec<Vec<T>>,
        item: &T,
        index: usize,
        _items: &[T],
    ) -> Result<Vec<Vec<T>>, Error> {
        if self.exhausted {
            return Ok(acc);
        }
        let row: Option<Vec<T>> = if index < self.limit {
            core::iter::once(Some(item.clone()))
                .chain(self.others.iter().map(|other| other.get(index).cloned()))
                .collect()
        } else {
            None
        };
        match row {
            Some(row) => acc.push(row),
            None => {
                trace!(index, limit = self.limit, "zip all exhausted");
                self.exhausted = true;
            }
        }
        Ok(acc)
    }
}

/// Splits rows into columns. See [unzip].
#[derive(Default)]
pub struct Unzip {
    width: Option<usize>,
}

/// Collects element `j` of every row into column `j`.
///
/// The number of columns is the length of the shortest row, computed once from the whole input
/// on the first step. Seed the fold with an empty `Vec`.
pub fn unzip() -> Unzip {
    Unzip::default()
}

impl<T, R> Reducer<R, Vec<Vec<T>>> for Unzip
where
    T: Clone,
    R: AsRef<[T]>,
{
    fn step(
        &mut self,
        mut acc: Vec<Vec<T>>,
        row: &R,
        _index: usize,
        rows: &[R],
    ) -> Result<Vec<Vec<T>>, Error> {
        let width = *self
            .width
            .get_or_insert_with(|| rows.iter().map(|r| r.as_ref().len()).min().unwrap_or(0));
        if acc.len() < width {
            acc.resize_with(width, Vec::new);
        }
        for (column, value) in acc.iter_mut().zip(row.as_ref()).take(width) {
            column.push(value.clone());
        }
        Ok(acc)
    }
}
