//! Flattening and arithmetic folds.

use crate::{
    fold::{is_last, Reducer},
    Error,
};

/// Concatenates nested sequences. See [flat].
pub struct Flat;

/// Concatenates every nested sequence, in order. Seed the fold with an empty `Vec`.
pub fn flat() -> Flat {
    Flat
}

impl<T, R> Reducer<R, Vec<T>> for Flat
where
    T: Clone,
    R: AsRef<[T]>,
{
    fn step(&mut self, mut acc: Vec<T>, item: &R, _: usize, _: &[R]) -> Result<Vec<T>, Error> {
        acc.extend_from_slice(item.as_ref());
        Ok(acc)
    }
}

/// A number that can be added without panicking.
pub trait Summable: Copy {
    /// Returns `self + other`, or `None` if the result does not fit.
    fn checked_sum(self, other: Self) -> Option<Self>;
}

macro_rules! impl_summable_int {
    ($($t:ty),+) => {
        $(
            impl Summable for $t {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    self.checked_add(other)
                }
            }
        )+
    };
}

impl_summable_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Summable for f32 {
    fn checked_sum(self, other: Self) -> Option<Self> {
        Some(self + other)
    }
}

impl Summable for f64 {
    fn checked_sum(self, other: Self) -> Option<Self> {
        Some(self + other)
    }
}

/// Adds every element to the accumulator. See [sum].
pub struct Sum;

/// Sums the sequence, starting from the seed.
///
/// Fails with [Error::Overflow] at the first integer element that does not fit. Floats never
/// fail and follow IEEE 754 (overflowing to infinity).
pub fn sum() -> Sum {
    Sum
}

impl<N: Summable> Reducer<N, N> for Sum {
    fn step(&mut self, acc: N, item: &N, index: usize, _: &[N]) -> Result<N, Error> {
        acc.checked_sum(*item).ok_or(Error::Overflow(index))
    }
}

/// Picks an extremum of the whole sequence. See [min] and [max].
pub struct Extremum<N> {
    pick: fn(N, N) -> N,
}

fn smaller<N: PartialOrd>(a: N, b: N) -> N {
    if b < a {
        b
    } else {
        a
    }
}

fn larger<N: PartialOrd>(a: N, b: N) -> N {
    if b > a {
        b
    } else {
        a
    }
}

/// Finds the smallest element. The seed (usually `None`) is returned untouched until the last
/// element, where the minimum of the whole sequence replaces it.
pub fn min<N: PartialOrd + Copy>() -> Extremum<N> {
    Extremum {
        pick: smaller::<N>,
    }
}

/// Finds the largest element. See [min].
pub fn max<N: PartialOrd + Copy>() -> Extremum<N> {
    Extremum {
        pick: larger::<N>,
    }
}

impl<N: Copy> Reducer<N, Option<N>> for Extremum<N> {
    fn step(
        &mut self,
        acc: Option<N>,
        _: &N,
        index: usize,
        items: &[N],
    ) -> Result<Option<N>, Error> {
        if !is_last(items, index) {
            return Ok(acc);
        }
        Ok(items.iter().copied().reduce(self.pick))
    }
}
