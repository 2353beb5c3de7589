//! Left folds that expose the position of each element.
//!
//! A [Reducer] is a step function invoked once per element with the running accumulator, the
//! element, its index, and the whole input. A [Filter] is the predicate counterpart. Both are
//! driven over slices by the [Fold] extension trait.
//!
//! Reducers and filters may carry state between steps (a zip that has run out of partners, a
//! take-while that has seen its first rejection). Every factory call returns a fresh value, so a
//! reducer must not be shared between two folds.

use crate::{
    map::{Accumulator, MethodMap},
    object::Object,
    Error,
};

/// A fold step.
pub trait Reducer<T, A> {
    /// Folds `item` (found at `index` of `items`) into `acc`.
    fn step(&mut self, acc: A, item: &T, index: usize, items: &[T]) -> Result<A, Error>;
}

/// A filter predicate.
pub trait Filter<T> {
    /// Returns `true` if `item` (found at `index` of `items`) should be kept.
    fn test(&mut self, item: &T, index: usize, items: &[T]) -> bool;
}

/// Drives [Reducer]s and [Filter]s over a sequence.
pub trait Fold<T> {
    /// Folds every element into `seed`, stopping at the first error.
    ///
    /// Folding an empty sequence returns `seed` untouched: reducers that finalize their
    /// accumulator on the last element never get the chance to.
    fn fold_with<A, R>(&self, seed: A, reducer: R) -> Result<A, Error>
    where
        R: Reducer<T, A>;

    /// Returns the elements accepted by `filter`, in order.
    fn filter_with<F>(&self, filter: F) -> Vec<&T>
    where
        F: Filter<T>;
}

impl<T> Fold<T> for [T] {
    fn fold_with<A, R>(&self, seed: A, mut reducer: R) -> Result<A, Error>
    where
        R: Reducer<T, A>,
    {
        let mut acc = seed;
        for (index, item) in self.iter().enumerate() {
            acc = reducer.step(acc, item, index, self)?;
        }
        Ok(acc)
    }

    fn filter_with<F>(&self, mut filter: F) -> Vec<&T>
    where
        F: Filter<T>,
    {
        self.iter()
            .enumerate()
            .filter(|(index, item)| filter.test(item, *index, self))
            .map(|(_, item)| item)
            .collect()
    }
}

/// Returns `true` if `index` is the last position of `items`.
pub(crate) fn is_last<T>(items: &[T], index: usize) -> bool {
    index + 1 == items.len()
}

/// An accumulator that changes form once the last element has been folded.
pub(crate) trait Finalize: Sized {
    fn finalize(self) -> Self;

    /// Finalizes the accumulator if `index` is the last position of `items`.
    fn finalize_if_last<T>(self, index: usize, items: &[T]) -> Self {
        if is_last(items, index) {
            return self.finalize();
        }
        self
    }
}

impl<V> Finalize for Accumulator<V> {
    fn finalize(self) -> Self {
        MethodMap::finalize(self)
    }
}

impl<V> Finalize for Object<V> {
    fn finalize(self) -> Self {
        Object::finalize(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Count;

    impl<T> Reducer<T, usize> for Count {
        fn step(&mut self, acc: usize, _: &T, _: usize, _: &[T]) -> Result<usize, Error> {
            Ok(acc + 1)
        }
    }

    struct Positions(Vec<usize>);

    impl<T> Reducer<T, ()> for &mut Positions {
        fn step(&mut self, _: (), _: &T, index: usize, items: &[T]) -> Result<(), Error> {
            assert_eq!(items.len(), 3);
            self.0.push(index);
            Ok(())
        }
    }

    struct FailAt(usize);

    impl<T> Reducer<T, usize> for FailAt {
        fn step(&mut self, acc: usize, _: &T, index: usize, _: &[T]) -> Result<usize, Error> {
            if index == self.0 {
                return Err(Error::InvalidArgument("boom".into()));
            }
            Ok(acc + 1)
        }
    }

    struct Even;

    impl Filter<u8> for Even {
        fn test(&mut self, item: &u8, _: usize, _: &[u8]) -> bool {
            item % 2 == 0
        }
    }

    #[test]
    fn test_fold_passes_positions() {
        let mut positions = Positions(Vec::new());
        ["a", "b", "c"].fold_with((), &mut positions).unwrap();
        assert_eq!(positions.0, vec![0, 1, 2]);
        assert_eq!([1, 2, 3].fold_with(0, Count), Ok(3));
    }

    #[test]
    fn test_fold_stops_at_error() {
        let result = [1, 2, 3].fold_with(0, FailAt(1));
        assert_eq!(result, Err(Error::InvalidArgument("boom".into())));
    }

    #[test]
    fn test_empty_fold_returns_seed() {
        let empty: [u8; 0] = [];
        assert_eq!(empty.fold_with(7, Count), Ok(7));
    }

    #[test]
    fn test_filter_with() {
        let items = vec![1u8, 2, 3, 4];
        assert_eq!(items.filter_with(Even), vec![&2, &4]);
    }

    #[test]
    fn test_is_last() {
        assert!(is_last(&[1, 2, 3], 2));
        assert!(!is_last(&[1, 2, 3], 1));
    }
}
