use super::{Accumulator, Entry, MethodMap, OrderedMap};
use crate::{object::Object, Error};
use indexmap::IndexMap;
use tracing::debug;

/// A read-only, insertion-ordered, string-keyed map.
///
/// Every write fails with [Error::ImmutableWrite], and [ImmutableMap::to_object] returns a
/// frozen copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImmutableMap<V> {
    storage: IndexMap<String, V>,
}

impl<V> ImmutableMap<V> {
    /// Returns a builder that accumulates writes until [ImmutableBuilder::build_map].
    pub fn builder() -> ImmutableBuilder<V> {
        ImmutableBuilder::new()
    }

    /// Creates a map holding the fields of `object`.
    pub fn new(object: Object<V>) -> Self {
        Self {
            storage: object.into_iter().collect(),
        }
    }

    /// Always fails: an [ImmutableMap] cannot be updated.
    pub fn put(&mut self, key: impl Into<String>, _value: V) -> Result<Option<V>, Error> {
        Err(Error::ImmutableWrite(key.into()))
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.storage.get(key)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.storage.contains_key(key)
    }

    /// Returns `true` if any stored value equals `value`.
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.storage.values().any(|v| v == value)
    }

    /// Returns the keys in first-insertion order.
    pub fn keys(&self) -> Vec<String> {
        self.storage.keys().cloned().collect()
    }

    /// Returns the values in first-insertion order of their keys.
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.storage.values().cloned().collect()
    }

    /// Returns the entries in first-insertion order.
    pub fn entries(&self) -> Vec<Entry<V>>
    where
        V: Clone,
    {
        self.storage
            .iter()
            .map(|(key, value)| Entry {
                key: key.clone(),
                value: value.clone(),
            })
            .collect()
    }

    /// Returns the number of keys.
    pub fn size(&self) -> usize {
        self.storage.len()
    }

    /// Returns a frozen copy of the contents.
    pub fn to_object(&self) -> Object<V>
    where
        V: Clone,
    {
        Object::from_fields(self.storage.clone()).freeze()
    }

    /// Returns an iterator over the entries in first-insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, V> {
        self.storage.iter()
    }
}

impl<V: 'static> MethodMap<V> for ImmutableMap<V> {
    fn put(&mut self, key: String, value: V) -> Result<Option<V>, Error> {
        ImmutableMap::put(self, key, value)
    }

    fn get(&self, key: &str) -> Option<&V> {
        ImmutableMap::get(self, key)
    }

    fn get_mut(&mut self, _key: &str) -> Option<&mut V> {
        None
    }

    fn contains_key(&self, key: &str) -> bool {
        ImmutableMap::contains_key(self, key)
    }

    fn contains_value(&self, value: &V) -> Result<bool, Error>
    where
        V: PartialEq,
    {
        Ok(ImmutableMap::contains_value(self, value))
    }

    fn keys(&self) -> Result<Vec<String>, Error> {
        Ok(ImmutableMap::keys(self))
    }

    fn values(&self) -> Result<Vec<V>, Error>
    where
        V: Clone,
    {
        Ok(ImmutableMap::values(self))
    }

    fn entries(&self) -> Result<Vec<Entry<V>>, Error>
    where
        V: Clone,
    {
        Ok(ImmutableMap::entries(self))
    }

    fn size(&self) -> Result<usize, Error> {
        Ok(ImmutableMap::size(self))
    }

    fn to_object(&self) -> Result<Object<V>, Error>
    where
        V: Clone,
    {
        Ok(ImmutableMap::to_object(self))
    }

    fn finalize(self: Box<Self>) -> Accumulator<V> {
        self
    }
}

impl<V> From<OrderedMap<V>> for ImmutableMap<V> {
    /// Locks `map`, keeping its insertion order.
    fn from(map: OrderedMap<V>) -> Self {
        Self {
            storage: map.into_storage(),
        }
    }
}

/// Accumulates writes for an [ImmutableMap].
///
/// Only [ImmutableBuilder::put], [ImmutableBuilder::get] and key lookups are available while
/// building. The read-collection methods of [MethodMap] fail with [Error::NotSupported] until
/// the builder is turned into an [ImmutableMap] or a frozen [Object].
#[derive(Clone, Debug)]
pub struct ImmutableBuilder<V> {
    map: OrderedMap<V>,
}

impl<V> ImmutableBuilder<V> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self {
            map: OrderedMap::new(),
        }
    }

    /// Sets `key` to `value`, returning the previous value.
    pub fn put(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        self.map.put(key, value)
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.map.get(key)
    }

    /// Returns `true` if `key` has been written.
    pub fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Materializes the accumulated writes as an [ImmutableMap].
    pub fn build_map(self) -> ImmutableMap<V> {
        debug!(size = self.map.size(), "building immutable map");
        ImmutableMap::from(self.map)
    }

    /// Materializes the accumulated writes as a frozen [Object].
    pub fn build_object(self) -> Object<V> {
        Object::from_fields(self.map.into_storage()).freeze()
    }
}

impl<V> Default for ImmutableBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: 'static> MethodMap<V> for ImmutableBuilder<V> {
    fn put(&mut self, key: String, value: V) -> Result<Option<V>, Error> {
        Ok(ImmutableBuilder::put(self, key, value))
    }

    fn get(&self, key: &str) -> Option<&V> {
        ImmutableBuilder::get(self, key)
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.map.get_mut(key)
    }

    fn contains_key(&self, key: &str) -> bool {
        ImmutableBuilder::contains_key(self, key)
    }

    fn contains_value(&self, _value: &V) -> Result<bool, Error>
    where
        V: PartialEq,
    {
        Err(Error::NotSupported("contains_value"))
    }

    fn keys(&self) -> Result<Vec<String>, Error> {
        Err(Error::NotSupported("keys"))
    }

    fn values(&self) -> Result<Vec<V>, Error>
    where
        V: Clone,
    {
        Err(Error::NotSupported("values"))
    }

    fn entries(&self) -> Result<Vec<Entry<V>>, Error>
    where
        V: Clone,
    {
        Err(Error::NotSupported("entries"))
    }

    fn size(&self) -> Result<usize, Error> {
        Err(Error::NotSupported("size"))
    }

    fn to_object(&self) -> Result<Object<V>, Error>
    where
        V: Clone,
    {
        Err(Error::NotSupported("to_object"))
    }

    fn finalize(self: Box<Self>) -> Accumulator<V> {
        Box::new(self.build_map())
    }
}
