//! Plain string-keyed objects with optional freeze semantics.
//!
//! An [Object] is the target of [crate::reducer::collect::to_object] and
//! [crate::reducer::merge::to_merged_object], and the snapshot type returned by
//! [crate::map::MethodMap::to_object]. Fields keep the order in which their keys were first
//! inserted.
//!
//! An object created with [Object::immutable] carries a marker that is not one of its fields.
//! Reducers freeze marked objects once they fold the last element of their input. A frozen
//! object rejects every write and delete with [Error::ImmutableWrite].

use crate::Error;
use core::fmt;
use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::debug;

/// An insertion-ordered, string-keyed object.
#[derive(Clone)]
pub struct Object<V> {
    fields: IndexMap<String, V>,
    immutable: bool,
    frozen: bool,
}

impl<V> Object<V> {
    /// Creates an empty, mutable object.
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
            immutable: false,
            frozen: false,
        }
    }

    /// Creates an empty object that is frozen when a reducer finalizes it.
    pub fn immutable() -> Self {
        Self {
            immutable: true,
            ..Self::new()
        }
    }

    /// Returns `true` if the object carries the immutable marker.
    pub fn is_immutable(&self) -> bool {
        self.immutable
    }

    /// Returns `true` if the object rejects writes.
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Freezes the object.
    pub fn freeze(mut self) -> Self {
        self.frozen = true;
        self
    }

    /// Freezes the object if it carries the immutable marker.
    pub fn finalize(self) -> Self {
        if self.immutable && !self.frozen {
            debug!(size = self.fields.len(), "freezing immutable object");
            return self.freeze();
        }
        self
    }

    /// Sets `key` to `value`, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Result<Option<V>, Error> {
        let key = key.into();
        if self.frozen {
            return Err(Error::ImmutableWrite(key));
        }
        Ok(self.fields.insert(key, value))
    }

    /// Deletes `key`, returning its value. Remaining fields keep their order.
    pub fn remove(&mut self, key: &str) -> Result<Option<V>, Error> {
        if self.frozen {
            return Err(Error::ImmutableWrite(key.to_string()));
        }
        Ok(self.fields.shift_remove(key))
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.fields.get(key)
    }

    /// Returns a mutable reference to the value stored under `key`.
    ///
    /// Frozen objects never hand out mutable references.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        if self.frozen {
            return None;
        }
        self.fields.get_mut(key)
    }

    /// Returns `true` if `key` is a field of the object.
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the object has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns an iterator over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Returns the values in insertion order.
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.fields.values().cloned().collect()
    }

    /// Returns an iterator over the fields in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, V> {
        self.fields.iter()
    }

    pub(crate) fn from_fields(fields: IndexMap<String, V>) -> Self {
        Self {
            fields,
            immutable: false,
            frozen: false,
        }
    }

    pub(crate) fn fields(&self) -> &IndexMap<String, V> {
        &self.fields
    }
}

impl<V> Default for Object<V> {
    fn default() -> Self {
        Self::new()
    }
}

// Objects compare by their fields only (in any order).
impl<V: PartialEq> PartialEq for Object<V> {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
    }
}

impl<V: Eq> Eq for Object<V> {}

impl<V: fmt::Debug> fmt::Debug for Object<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.fields.iter()).finish()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for Object<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_fields(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl<V, const N: usize> From<[(&str, V); N]> for Object<V> {
    fn from(fields: [(&str, V); N]) -> Self {
        fields.into_iter().collect()
    }
}

impl From<Map<String, Value>> for Object<Value> {
    fn from(fields: Map<String, Value>) -> Self {
        fields.into_iter().collect()
    }
}

impl From<Object<Value>> for Value {
    fn from(object: Object<Value>) -> Self {
        Value::Object(object.fields.into_iter().collect())
    }
}

impl<V> IntoIterator for Object<V> {
    type Item = (String, V);
    type IntoIter = indexmap::map::IntoIter<String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a Object<V> {
    type Item = (&'a String, &'a V);
    type IntoIter = indexmap::map::Iter<'a, String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insertion_order() {
        let mut object = Object::new();
        object.insert("mike", 1).unwrap();
        object.insert("john", 2).unwrap();
        assert_eq!(object.insert("mike", 3).unwrap(), Some(1));

        assert_eq!(object.keys().collect::<Vec<_>>(), vec!["mike", "john"]);
        assert_eq!(object.values(), vec![3, 2]);
    }

    #[test]
    fn test_frozen_rejects_writes() {
        let mut object = Object::from([("a", "a")]).freeze();
        assert_eq!(
            object.insert("a", "b"),
            Err(Error::ImmutableWrite("a".into()))
        );
        assert_eq!(
            object.insert("c", "c"),
            Err(Error::ImmutableWrite("c".into()))
        );
        assert_eq!(object.remove("a"), Err(Error::ImmutableWrite("a".into())));
        assert!(object.get_mut("a").is_none());
        assert_eq!(object.get("a"), Some(&"a"));
    }

    #[test]
    fn test_finalize_only_freezes_marked() {
        let plain: Object<u8> = Object::new().finalize();
        assert!(!plain.is_frozen());

        let marked: Object<u8> = Object::immutable();
        assert!(marked.is_immutable());
        assert!(!marked.is_frozen());
        assert!(marked.finalize().is_frozen());
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut object = Object::from([("a", 1), ("b", 2), ("c", 3)]);
        assert_eq!(object.remove("b").unwrap(), Some(2));
        assert_eq!(object.keys().collect::<Vec<_>>(), vec!["a", "c"]);
    }

    #[test]
    fn test_json_conversion() {
        let json = json!({ "e": 1, "d": 2 });
        let object: Object<Value> = json.as_object().cloned().unwrap().into();
        assert_eq!(object.keys().collect::<Vec<_>>(), vec!["e", "d"]);
        assert_eq!(Value::from(object), json);
    }

    #[test]
    fn test_equality_ignores_marker() {
        let mut marked = Object::immutable();
        marked.insert("a", 1).unwrap();
        let plain = Object::from([("a", 1)]);
        assert_eq!(marked.finalize(), plain);
    }
}
