//! Filter predicates driven by [crate::fold::Fold::filter_with].
//!
//! Like reducers, filters see each element together with its index and the whole input, and
//! may keep state between calls. Build a fresh filter for every pass.

use crate::{
    fold::Filter,
    value::{type_name, Record},
    Error,
};
use serde_json::Value;
use std::{collections::HashSet, hash::Hash};

/// Keeps the first occurrence of each distinct element. See [unique].
pub struct Unique;

/// Keeps an element only if no earlier element is equal to it.
pub fn unique() -> Unique {
    Unique
}

impl<T: PartialEq> Filter<T> for Unique {
    fn test(&mut self, item: &T, index: usize, items: &[T]) -> bool {
        !items[..index].contains(item)
    }
}

/// Keeps the first element for each projected value. See [unique_by].
pub struct UniqueBy<'a, T, K> {
    project: Box<dyn Fn(&T) -> K + 'a>,
    seen: HashSet<K>,
}

/// Keeps the first element for each value of `project(element)`.
pub fn unique_by<'a, T, K, F>(project: F) -> UniqueBy<'a, T, K>
where
    K: Hash + Eq,
    F: Fn(&T) -> K + 'a,
{
    UniqueBy {
        project: Box::new(project),
        seen: HashSet::new(),
    }
}

/// Keeps the first element for each value of property `name`.
///
/// Values are told apart by their JSON text, so `1` and `"1"` are distinct. Elements missing
/// the property share a single slot.
pub fn unique_by_property<'a, T: Record>(
    name: impl Into<String>,
) -> UniqueBy<'a, T, Option<String>> {
    let name = name.into();
    unique_by(move |item: &T| item.field(&name).map(Value::to_string))
}

impl<'a, T: Record> UniqueBy<'a, T, Option<String>> {
    /// Resolves a dynamic projection. Only a string (a property name) is accepted.
    pub fn from_value(projection: &Value) -> Result<Self, Error> {
        match projection {
            Value::String(name) => Ok(unique_by_property(name.as_str())),
            other => Err(Error::InvalidArgument(format!(
                "unique projection must be a getter or a property name, actual: {}",
                type_name(other)
            ))),
        }
    }
}

impl<T, K: Hash + Eq> Filter<T> for UniqueBy<'_, T, K> {
    fn test(&mut self, item: &T, _: usize, _: &[T]) -> bool {
        self.seen.insert((self.project)(item))
    }
}

/// Passes elements until the predicate first fails. See [take_while].
pub struct TakeWhile<F> {
    predicate: F,
    done: bool,
}

/// Keeps elements while `predicate` holds. After the first rejection every later element is
/// rejected too.
pub fn take_while<T, F>(predicate: F) -> TakeWhile<F>
where
    F: FnMut(&T) -> bool,
{
    TakeWhile {
        predicate,
        done: false,
    }
}

impl<T, F> Filter<T> for TakeWhile<F>
where
    F: FnMut(&T) -> bool,
{
    fn test(&mut self, item: &T, _: usize, _: &[T]) -> bool {
        if !self.done && !(self.predicate)(item) {
            self.done = true;
        }
        !self.done
    }
}

/// Drops elements until the predicate first fails. See [skip_while].
pub struct SkipWhile<F> {
    predicate: F,
    passing: bool,
}

/// Drops elements while `predicate` holds. From the first element it rejects onwards, every
/// element is kept.
pub fn skip_while<T, F>(predicate: F) -> SkipWhile<F>
where
    F: FnMut(&T) -> bool,
{
    SkipWhile {
        predicate,
        passing: false,
    }
}

impl<T, F> Filter<T> for SkipWhile<F>
where
    F: FnMut(&T) -> bool,
{
    fn test(&mut self, item: &T, _: usize, _: &[T]) -> bool {
        if !self.passing && !(self.predicate)(item) {
            self.passing = true;
        }
        self.passing
    }
}
