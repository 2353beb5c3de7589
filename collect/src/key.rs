//! Resolution of grouping and collecting keys.
//!
//! A key is described either by a callback or by the name of a property to read off each
//! element. Both forms are turned into a single resolver when the [KeySource] is built, so
//! reducers never branch on the form while folding. Whatever the source yields must resolve to a
//! string, otherwise the fold fails with [Error::KeyType].

use crate::{
    value::{type_name, Record},
    Error,
};
use serde_json::Value;

/// A value that may be used as a key.
pub trait IntoKey {
    /// Converts the value into a string key, failing if it is not a string.
    fn into_key(self) -> Result<String, Error>;
}

impl IntoKey for String {
    fn into_key(self) -> Result<String, Error> {
        Ok(self)
    }
}

impl IntoKey for &str {
    fn into_key(self) -> Result<String, Error> {
        Ok(self.to_string())
    }
}

impl IntoKey for &String {
    fn into_key(self) -> Result<String, Error> {
        Ok(self.clone())
    }
}

impl IntoKey for Value {
    fn into_key(self) -> Result<String, Error> {
        match self {
            Value::String(key) => Ok(key),
            other => Err(Error::KeyType {
                kind: type_name(&other),
                value: other.to_string(),
            }),
        }
    }
}

impl IntoKey for &Value {
    fn into_key(self) -> Result<String, Error> {
        match self {
            Value::String(key) => Ok(key.clone()),
            other => Err(Error::KeyType {
                value: other.to_string(),
                kind: type_name(other),
            }),
        }
    }
}

impl<K: IntoKey> IntoKey for Option<K> {
    fn into_key(self) -> Result<String, Error> {
        match self {
            Some(key) => key.into_key(),
            None => Err(Error::KeyType {
                value: "undefined".to_string(),
                kind: "undefined",
            }),
        }
    }
}

macro_rules! impl_non_string_key {
    ($kind:literal => $($t:ty),+) => {
        $(
            impl IntoKey for $t {
                fn into_key(self) -> Result<String, Error> {
                    Err(Error::KeyType {
                        value: self.to_string(),
                        kind: $kind,
                    })
                }
            }
        )+
    };
}

impl_non_string_key!("number" => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
impl_non_string_key!("boolean" => bool);
impl_non_string_key!("char" => char);

/// Derives a string key from each element of a fold.
pub struct KeySource<'a, T> {
    resolve: Box<dyn Fn(&T) -> Result<String, Error> + 'a>,
}

impl<'a, T> KeySource<'a, T> {
    /// Resolves keys with a callback.
    pub fn getter<K, F>(getter: F) -> Self
    where
        K: IntoKey,
        F: Fn(&T) -> K + 'a,
    {
        Self {
            resolve: Box::new(move |item| getter(item).into_key()),
        }
    }

    /// Resolves keys by reading the property `name` off each element.
    ///
    /// A missing property resolves to `undefined` and fails like any other non-string key.
    pub fn property(name: impl Into<String>) -> Self
    where
        T: Record,
    {
        let name = name.into();
        Self {
            resolve: Box::new(move |item| item.field(&name).into_key()),
        }
    }

    /// Resolves the key of `item`.
    pub fn resolve(&self, item: &T) -> Result<String, Error> {
        (self.resolve)(item)
    }
}
