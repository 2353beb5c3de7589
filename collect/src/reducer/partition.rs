//! Split a sequence in two.
//!
//! The matcher is resolved when the reducer is built: a predicate, a property name whose value
//! is tested for truthiness, or a partial object whose fields must all be strictly equal to the
//! element's. Invalid dynamic matchers fail before any element is folded.

use crate::{
    fold::Reducer,
    value::{is_truthy, strict_equal, type_name, Record},
    Error,
};
use serde_json::Value;

/// Matched and unmatched elements, in input order.
pub type Partitions<T> = (Vec<T>, Vec<T>);

/// Returns a fresh, empty seed for [partition_by] and friends.
pub fn partitions<T>() -> Partitions<T> {
    (Vec::new(), Vec::new())
}

/// Classifies elements into matched and unmatched. See [partition_by].
pub struct PartitionBy<'a, T> {
    matches: Box<dyn Fn(&T) -> bool + 'a>,
}

/// Partitions by `predicate`.
pub fn partition_by<'a, T, F>(predicate: F) -> PartitionBy<'a, T>
where
    F: Fn(&T) -> bool + 'a,
{
    PartitionBy {
        matches: Box::new(predicate),
    }
}

/// Partitions by the truthiness of property `name`. Missing properties are falsy.
pub fn partition_by_key<'a, T: Record>(name: impl Into<String>) -> PartitionBy<'a, T> {
    let name = name.into();
    partition_by(move |item: &T| item.field(&name).is_some_and(is_truthy))
}

/// Partitions by a partial object: an element matches if every field of `pattern` is present
/// on it with a strictly equal value.
///
/// Fails with [Error::InvalidArgument] if `pattern` is not an object.
pub fn partition_by_match<'a, T: Record>(pattern: &Value) -> Result<PartitionBy<'a, T>, Error> {
    let Value::Object(pattern) = pattern else {
        return Err(invalid_matcher(pattern));
    };
    let pattern = pattern.clone();
    Ok(partition_by(move |item: &T| {
        pattern.iter().all(|(key, expected)| {
            item.field(key)
                .is_some_and(|actual| strict_equal(actual, expected))
        })
    }))
}

fn invalid_matcher(value: &Value) -> Error {
    Error::InvalidArgument(format!(
        "partition matcher must be a predicate, a property name or a partial object, actual: {}",
        type_name(value)
    ))
}

impl<'a, T: Record> PartitionBy<'a, T> {
    /// Resolves a dynamic matcher: a string selects [partition_by_key], an object selects
    /// [partition_by_match]. Anything else fails with [Error::InvalidArgument].
    pub fn from_value(matcher: &Value) -> Result<Self, Error> {
        match matcher {
            Value::String(name) => Ok(partition_by_key(name.as_str())),
            Value::Object(_) => partition_by_match(matcher),
            other => Err(invalid_matcher(other)),
        }
    }
}

impl<T: Clone> Reducer<T, Partitions<T>> for PartitionBy<'_, T> {
    fn step(
        &mut self,
        (mut matched, mut unmatched): Partitions<T>,
        item: &T,
        _index: usize,
        _items: &[T],
    ) -> Result<Partitions<T>, Error> {
        if (self.matches)(item) {
            matched.push(item.clone());
        } else {
            unmatched.push(item.clone());
        }
        Ok((matched, unmatched))
    }
}
