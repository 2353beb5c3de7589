//! Insertion-ordered, string-keyed containers.
//!
//! [MethodMap] is the contract shared by every container a collecting reducer can fold into:
//!
//! * [OrderedMap]: mutable, created empty or seeded from an [Object].
//! * [ImmutableMap]: read-only, every [MethodMap::put] fails with [Error::ImmutableWrite].
//! * [ImmutableBuilder]: write-only until built, every read-collection method fails with
//!   [Error::NotSupported].
//!
//! Keys always come back in the order they were first inserted. Overwriting a key keeps its
//! position. Read methods return snapshots, so changing a returned collection never changes
//! the container.

use crate::{object::Object, Error};
use core::fmt;

mod immutable;
mod ordered;

pub use immutable::{ImmutableBuilder, ImmutableMap};
pub use ordered::OrderedMap;

/// A single key-value slot of a container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry<V> {
    pub key: String,
    pub value: V,
}

/// A string-keyed container that preserves first-insertion order.
pub trait MethodMap<V> {
    /// Sets `key` to `value`, returning the previous value.
    fn put(&mut self, key: String, value: V) -> Result<Option<V>, Error>;

    /// Returns the value stored under `key`.
    fn get(&self, key: &str) -> Option<&V>;

    /// Returns a mutable reference to the value stored under `key`.
    ///
    /// Containers that reject writes return `None`.
    fn get_mut(&mut self, key: &str) -> Option<&mut V>;

    /// Returns `true` if `key` is present.
    fn contains_key(&self, key: &str) -> bool;

    /// Returns `true` if any stored value equals `value`.
    fn contains_value(&self, value: &V) -> Result<bool, Error>
    where
        V: PartialEq;

    /// Returns the keys in first-insertion order.
    fn keys(&self) -> Result<Vec<String>, Error>;

    /// Returns the values in first-insertion order of their keys.
    fn values(&self) -> Result<Vec<V>, Error>
    where
        V: Clone;

    /// Returns the entries in first-insertion order.
    fn entries(&self) -> Result<Vec<Entry<V>>, Error>
    where
        V: Clone;

    /// Returns the number of keys.
    fn size(&self) -> Result<usize, Error>;

    /// Returns a fresh copy of the contents as a plain [Object].
    fn to_object(&self) -> Result<Object<V>, Error>
    where
        V: Clone;

    /// Converts the container into its final form once a fold has seen its last element.
    fn finalize(self: Box<Self>) -> Accumulator<V>;
}

impl<V> fmt::Debug for dyn MethodMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodMap")
            .field("keys", &self.keys())
            .finish()
    }
}

/// The accumulator type folded by [crate::reducer::collect::group_by] and
/// [crate::reducer::collect::to_map].
pub type Accumulator<V> = Box<dyn MethodMap<V>>;

/// Returns an empty, mutable accumulator.
pub fn new_map<V: 'static>() -> Accumulator<V> {
    Box::new(OrderedMap::new())
}

/// Returns a mutable accumulator seeded with a copy of `seed`.
pub fn new_map_from<V: Clone + 'static>(seed: &Object<V>) -> Accumulator<V> {
    Box::new(OrderedMap::from_object(seed))
}

/// Returns an accumulator that becomes an [ImmutableMap] once a fold finalizes it.
pub fn new_immutable_map<V: 'static>() -> Accumulator<V> {
    Box::new(ImmutableBuilder::new())
}
