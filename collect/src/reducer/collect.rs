//! Collect a sequence into a keyed container.
//!
//! [group_by] appends every element to the list stored under its key, [to_map] stores one
//! value per key and rejects duplicates, and [to_object] does the same into a plain [Object],
//! optionally merging duplicates instead of rejecting them.
//!
//! Accumulators are finalized once, when the last element has been folded: an
//! [crate::map::ImmutableBuilder] becomes an [crate::map::ImmutableMap] and an
//! [Object::immutable] is frozen. Folding an empty sequence returns the seed unfinalized.

use crate::{
    fold::{Finalize, Reducer},
    key::KeySource,
    map::Accumulator,
    object::Object,
    Error,
};
use tracing::debug;

/// Groups elements by key. See [group_by] and [group_by_with].
pub struct GroupBy<'a, T, F> {
    key: KeySource<'a, T>,
    transform: F,
}

/// Groups elements by the key resolved from `key`, keeping the elements themselves.
///
/// Seed the fold with [crate::map::new_map] or [crate::map::new_immutable_map].
pub fn group_by<T: Clone>(key: KeySource<'_, T>) -> GroupBy<'_, T, fn(&T) -> T> {
    GroupBy {
        key,
        transform: T::clone,
    }
}

/// Groups elements by the key resolved from `key`, keeping `transform(element)`.
pub fn group_by_with<'a, T, V, F>(key: KeySource<'a, T>, transform: F) -> GroupBy<'a, T, F>
where
    F: Fn(&T) -> V,
{
    GroupBy { key, transform }
}

impl<T, V, F> Reducer<T, Accumulator<Vec<V>>> for GroupBy<'_, T, F>
where
    F: Fn(&T) -> V,
{
    fn step(
        &mut self,
        mut acc: Accumulator<Vec<V>>,
        item: &T,
        index: usize,
        items: &[T],
    ) -> Result<Accumulator<Vec<V>>, Error> {
        let key = self.key.resolve(item)?;
        let value = (self.transform)(item);
        if let Some(group) = acc.get_mut(&key) {
            group.push(value);
        } else {
            acc.put(key, vec![value])?;
        }
        Ok(acc.finalize_if_last(index, items))
    }
}

/// Collects one value per key. See [to_map] and [to_map_with].
pub struct ToMap<'a, T, F> {
    key: KeySource<'a, T>,
    value: F,
}

/// Collects every element under the key resolved from `key`.
///
/// Fails with [Error::DuplicateKey] if two elements resolve to the same key.
pub fn to_map<T: Clone>(key: KeySource<'_, T>) -> ToMap<'_, T, fn(&T) -> T> {
    ToMap {
        key,
        value: T::clone,
    }
}

/// Collects `value(element)` under the key resolved from `key`.
///
/// Fails with [Error::DuplicateKey] if two elements resolve to the same key.
pub fn to_map_with<'a, T, V, F>(key: KeySource<'a, T>, value: F) -> ToMap<'a, T, F>
where
    F: Fn(&T) -> V,
{
    ToMap { key, value }
}

impl<T, V, F> Reducer<T, Accumulator<V>> for ToMap<'_, T, F>
where
    F: Fn(&T) -> V,
{
    fn step(
        &mut self,
        mut acc: Accumulator<V>,
        item: &T,
        index: usize,
        items: &[T],
    ) -> Result<Accumulator<V>, Error> {
        let key = self.key.resolve(item)?;
        if acc.contains_key(&key) {
            debug!(key = %key, "duplicate key while collecting to map");
            return Err(Error::DuplicateKey(key));
        }
        acc.put(key, (self.value)(item))?;
        Ok(acc.finalize_if_last(index, items))
    }
}

type Merge<'a, V> = Box<dyn Fn(&V, V) -> V + 'a>;

/// Collects one value per key into a plain [Object]. See [to_object], [to_object_with] and
/// [to_object_merged].
pub struct ToObject<'a, T, V, F> {
    key: KeySource<'a, T>,
    value: F,
    merge: Option<Merge<'a, V>>,
}

/// Collects every element into an [Object] under the key resolved from `key`.
///
/// Seed the fold with [Object::new] or [Object::immutable]. Fails with [Error::DuplicateKey] if
/// two elements resolve to the same key.
pub fn to_object<T: Clone>(key: KeySource<'_, T>) -> ToObject<'_, T, T, fn(&T) -> T> {
    ToObject {
        key,
        value: T::clone,
        merge: None,
    }
}

/// Collects `value(element)` into an [Object] under the key resolved from `key`.
///
/// Fails with [Error::DuplicateKey] if two elements resolve to the same key.
pub fn to_object_with<'a, T, V, F>(key: KeySource<'a, T>, value: F) -> ToObject<'a, T, V, F>
where
    F: Fn(&T) -> V,
{
    ToObject {
        key,
        value,
        merge: None,
    }
}

/// Collects `value(element)` into an [Object] under the key resolved from `key`, combining
/// duplicates with `merge(existing, incoming)`.
pub fn to_object_merged<'a, T, V, F, M>(
    key: KeySource<'a, T>,
    value: F,
    merge: M,
) -> ToObject<'a, T, V, F>
where
    F: Fn(&T) -> V,
    M: Fn(&V, V) -> V + 'a,
{
    ToObject {
        key,
        value,
        merge: Some(Box::new(merge)),
    }
}

impl<T, V, F> Reducer<T, Object<V>> for ToObject<'_, T, V, F>
where
    F: Fn(&T) -> V,
{
    fn step(
        &mut self,
        mut acc: Object<V>,
        item: &T,
        index: usize,
        items: &[T],
    ) -> Result<Object<V>, Error> {
        let key = self.key.resolve(item)?;
        let incoming = (self.value)(item);
        let value = match (acc.get(&key), &self.merge) {
            (None, _) => incoming,
            (Some(existing), Some(merge)) => merge(existing, incoming),
            (Some(_), None) => {
                debug!(key = %key, "duplicate key while collecting to object");
                return Err(Error::DuplicateKey(key));
            }
        };
        acc.insert(key, value)?;
        Ok(acc.finalize_if_last(index, items))
    }
}
