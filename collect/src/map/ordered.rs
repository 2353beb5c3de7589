use super::{Accumulator, Entry, MethodMap};
use crate::{object::Object, Error};
use indexmap::IndexMap;

/// A mutable, insertion-ordered, string-keyed map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderedMap<V> {
    storage: IndexMap<String, V>,
}

impl<V> OrderedMap<V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self {
            storage: IndexMap::new(),
        }
    }

    /// Creates a map holding a shallow copy of `seed`.
    pub fn from_object(seed: &Object<V>) -> Self
    where
        V: Clone,
    {
        Self {
            storage: seed.fields().clone(),
        }
    }

    /// Sets `key` to `value`, returning the previous value. The key keeps its position.
    pub fn put(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        self.storage.insert(key.into(), value)
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.storage.get(key)
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.storage.get_mut(key)
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

    /// Returns `true` if the map holds no keys.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns a fresh copy of the contents.
    pub fn to_object(&self) -> Object<V>
    where
        V: Clone,
    {
        Object::from_fields(self.storage.clone())
    }

    /// Returns an iterator over the entries in first-insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, V> {
        self.storage.iter()
    }

    pub(super) fn into_storage(self) -> IndexMap<String, V> {
        self.storage
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            storage: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<V: 'static> MethodMap<V> for OrderedMap<V> {
    fn put(&mut self, key: String, value: V) -> Result<Option<V>, Error> {
        Ok(OrderedMap::put(self, key, value))
    }

    fn get(&self, key: &str) -> Option<&V> {
        OrderedMap::get(self, key)
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        OrderedMap::get_mut(self, key)
    }

    fn contains_key(&self, key: &str) -> bool {
        OrderedMap::contains_key(self, key)
    }

    fn contains_value(&self, value: &V) -> Result<bool, Error>
    where
        V: PartialEq,
    {
        Ok(OrderedMap::contains_value(self, value))
    }

    fn keys(&self) -> Result<Vec<String>, Error> {
        Ok(OrderedMap::keys(self))
    }

    fn values(&self) -> Result<Vec<V>, Error>
    where
        V: Clone,
    {
        Ok(OrderedMap::values(self))
    }

    fn entries(&self) -> Result<Vec<Entry<V>>, Error>
    where
        V: Clone,
    {
        Ok(OrderedMap::entries(self))
    }

    fn size(&self) -> Result<usize, Error> {
        Ok(OrderedMap::size(self))
    }

    fn to_object(&self) -> Result<Object<V>, Error>
    where
        V: Clone,
    {
        Ok(OrderedMap::to_object(self))
    }

    fn finalize(self: Box<Self>) -> Accumulator<V> {
        self
    }
}
