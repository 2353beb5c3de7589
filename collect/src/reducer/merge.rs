//! Fold a sequence of objects into one.
//!
//! [to_merged_object] copies every field of every source object into the accumulator, in order.
//! A [Mergeable] strategy decides, per key, whether the accumulator may be overwritten. It never
//! computes a combined value: the incoming value always replaces the current one.

use crate::{fold::Reducer, object::Object, Error};
use serde_json::Value;
use tracing::debug;

/// A value that may stand for "nothing here" even when its key is set.
pub trait Absent {
    /// Returns `true` if the value counts as unset.
    fn is_absent(&self) -> bool;
}

impl Absent for Value {
    fn is_absent(&self) -> bool {
        self.is_null()
    }
}

impl<T> Absent for Option<T> {
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

macro_rules! impl_never_absent {
    ($($t:ty),+) => {
        $(
            impl Absent for $t {
                fn is_absent(&self) -> bool {
                    false
                }
            }
        )+
    };
}

impl_never_absent!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String,
    &str
);

fn is_unset<V: Absent>(current: Option<&V>) -> bool {
    current.map_or(true, Absent::is_absent)
}

/// Decides whether a key of the aggregate may be overwritten.
pub trait Mergeable<V> {
    /// Returns `true` if `incoming` may replace `current` (absent if the key is not yet set).
    fn is_mergeable(&self, current: Option<&V>, incoming: &V, key: &str) -> bool;
}

/// Built-in merge strategies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MergeStrategy {
    /// Incoming values always replace existing ones.
    #[default]
    Override,
    /// Every key may only be set once. A key holding an absent value (such as `null`) counts
    /// as unset.
    Unique,
    /// A key may be set again, but only to a value equal to the current one. A key holding an
    /// absent value (such as `null`) counts as unset.
    Checked,
}

pub const OVERRIDE: MergeStrategy = MergeStrategy::Override;
pub const UNIQUE: MergeStrategy = MergeStrategy::Unique;
pub const CHECKED: MergeStrategy = MergeStrategy::Checked;

impl<V: PartialEq + Absent> Mergeable<V> for MergeStrategy {
    fn is_mergeable(&self, current: Option<&V>, incoming: &V, _key: &str) -> bool {
        match self {
            Self::Override => true,
            Self::Unique => is_unset(current),
            Self::Checked => is_unset(current) || current == Some(incoming),
        }
    }
}

/// A custom strategy backed by a predicate. See [merge_when].
pub struct MergeWhen<F>(F);

/// Builds a strategy from `predicate(current, incoming, key)`.
pub fn merge_when<V, F>(predicate: F) -> MergeWhen<F>
where
    F: Fn(Option<&V>, &V, &str) -> bool,
{
    MergeWhen(predicate)
}

impl<V, F> Mergeable<V> for MergeWhen<F>
where
    F: Fn(Option<&V>, &V, &str) -> bool,
{
    fn is_mergeable(&self, current: Option<&V>, incoming: &V, key: &str) -> bool {
        (self.0)(current, incoming, key)
    }
}

/// Merges objects into the accumulator. See [to_merged_object].
pub struct ToMergedObject<M> {
    strategy: M,
}

/// Merges every source object into the accumulator under `strategy`.
///
/// Fails with [Error::MergeConflict] on the first key the strategy refuses to overwrite.
pub fn to_merged_object<M>(strategy: M) -> ToMergedObject<M> {
    ToMergedObject { strategy }
}

impl<V, M> Reducer<Object<V>, Object<V>> for ToMergedObject<M>
where
    V: Clone,
    M: Mergeable<V>,
{
    fn step(
        &mut self,
        mut acc: Object<V>,
        item: &Object<V>,
        _index: usize,
        _items: &[Object<V>],
    ) -> Result<Object<V>, Error> {
        for (key, incoming) in item {
            if !self.strategy.is_mergeable(acc.get(key), incoming, key) {
                debug!(key = %key, "refusing to merge");
                return Err(Error::MergeConflict(key.clone()));
            }
            acc.insert(key.clone(), incoming.clone())?;
        }
        Ok(acc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fold::Fold;
    use serde_json::{json, Value};

    fn objects(values: &[Value]) -> Vec<Object<Value>> {
        values
            .iter()
            .map(|v| v.as_object().cloned().unwrap().into())
            .collect()
    }

    #[test]
    fn test_override() {
        let merged = objects(&[json!({ "e": 1 }), json!({ "d": 2 }), json!({ "c": 3 })])
            .fold_with(Object::new(), to_merged_object(OVERRIDE))
            .unwrap();
        assert_eq!(Value::from(merged), json!({ "e": 1, "d": 2, "c": 3 }));

        let merged = objects(&[json!({ "e": 1 }), json!({ "e": 2 })])
            .fold_with(Object::new(), to_merged_object(MergeStrategy::default()))
            .unwrap();
        assert_eq!(Value::from(merged), json!({ "e": 2 }));
    }

    #[test]
    fn test_unique() {
        let merged = objects(&[json!({ "e": 1 }), json!({ "d": 2 })])
            .fold_with(Object::new(), to_merged_object(UNIQUE))
            .unwrap();
        assert_eq!(merged.len(), 2);

        let err = objects(&[json!({ "e": 1 }), json!({ "d": 2 }), json!({ "e": 1 })])
            .fold_with(Object::new(), to_merged_object(UNIQUE))
            .unwrap_err();
        assert_eq!(err, Error::MergeConflict("e".into()));
    }

    #[test]
    fn test_checked() {
        let merged = objects(&[json!({ "e": 1 }), json!({ "d": 2 }), json!({ "e": 1 })])
            .fold_with(Object::new(), to_merged_object(CHECKED))
            .unwrap();
        assert_eq!(Value::from(merged), json!({ "e": 1, "d": 2 }));

        let err = objects(&[json!({ "e": 1 }), json!({ "d": 2 }), json!({ "e": 3 })])
            .fold_with(Object::new(), to_merged_object(CHECKED))
            .unwrap_err();
        assert_eq!(err, Error::MergeConflict("e".into()));
    }

    #[test]
    fn test_null_counts_as_unset() {
        for strategy in [UNIQUE, CHECKED] {
            let merged = objects(&[json!({ "e": null }), json!({ "e": 1 })])
                .fold_with(Object::new(), to_merged_object(strategy))
                .unwrap();
            assert_eq!(Value::from(merged), json!({ "e": 1 }));

            // A real value is still protected
            let err = objects(&[json!({ "e": null }), json!({ "e": 1 }), json!({ "e": 2 })])
                .fold_with(Object::new(), to_merged_object(strategy))
                .unwrap_err();
            assert_eq!(err, Error::MergeConflict("e".into()));
        }
    }

    #[test]
    fn test_absent_options() {
        let sources = vec![Object::from([("a", None)]), Object::from([("a", Some(1))])];
        let merged = sources
            .fold_with(Object::new(), to_merged_object(UNIQUE))
            .unwrap();
        assert_eq!(merged.get("a"), Some(&Some(1)));
    }

    #[test]
    fn test_checked_deep_values() {
        let merged = objects(&[
            json!({ "a": { "b": [1, 2] } }),
            json!({ "a": { "b": [1, 2] } }),
        ])
        .fold_with(Object::new(), to_merged_object(CHECKED))
        .unwrap();
        assert_eq!(Value::from(merged), json!({ "a": { "b": [1, 2] } }));
    }

    #[test]
    fn test_custom_strategy() {
        let only_grow = merge_when(|current: Option<&i32>, incoming: &i32, _: &str| {
            current.map_or(true, |current| incoming > current)
        });
        let sources = vec![
            Object::from([("a", 1)]),
            Object::from([("a", 2), ("b", 1)]),
        ];
        let merged = sources
            .fold_with(Object::new(), to_merged_object(only_grow))
            .unwrap();
        assert_eq!(merged, Object::from([("a", 2), ("b", 1)]));

        let sources = vec![Object::from([("a", 2)]), Object::from([("a", 1)])];
        let only_grow = merge_when(|current: Option<&i32>, incoming: &i32, _: &str| {
            current.map_or(true, |current| incoming > current)
        });
        assert_eq!(
            sources.fold_with(Object::new(), to_merged_object(only_grow)),
            Err(Error::MergeConflict("a".into()))
        );
    }

    #[test]
    fn test_frozen_accumulator() {
        let sources = vec![Object::from([("a", 1)])];
        let err = sources
            .fold_with(Object::new().freeze(), to_merged_object(OVERRIDE))
            .unwrap_err();
        assert_eq!(err, Error::ImmutableWrite("a".into()));
    }
}
