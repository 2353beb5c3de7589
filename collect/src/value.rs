//! Dynamic records addressed by property name.
//!
//! Reducers, partitions, and comparators accept either a callback or a literal property name.
//! The property-name forms work on any element implementing [Record], which exposes its fields
//! as [serde_json::Value]s. Implementations are provided for JSON values, JSON maps, and
//! [Object]s of JSON values.

use crate::object::Object;
use core::cmp::Ordering;
use serde_json::{Map, Value};

/// An element whose fields can be looked up by name.
pub trait Record {
    /// Returns the value stored under `name`, if any.
    fn field(&self, name: &str) -> Option<&Value>;
}

impl Record for Value {
    fn field(&self, name: &str) -> Option<&Value> {
        self.as_object().and_then(|fields| fields.get(name))
    }
}

impl Record for Map<String, Value> {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl Record for Object<Value> {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

/// Returns the runtime type name of `value`, as reported in key errors.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Returns `true` if `value` counts as "set" when used as a branch condition.
///
/// `null`, `false`, zero, `NaN`, and the empty string are falsy. Arrays and objects are always
/// truthy, even when empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn kind_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

/// Orders any two values.
///
/// Values of different kinds order by kind: `null`, booleans, numbers, strings, arrays, then
/// objects. Within a kind, numbers compare numerically, strings lexicographically, booleans with
/// `false < true`, and arrays and objects element by element (objects in field order, key
/// before value) with the shorter prefix first.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Number(a), Value::Number(b)) => {
            let a = a.as_f64().unwrap_or(f64::NAN);
            let b = b.as_f64().unwrap_or(f64::NAN);
            a.total_cmp(&b)
        }
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Array(a), Value::Array(b)) => a
            .iter()
            .zip(b)
            .map(|(a, b)| compare_values(a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| a.len().cmp(&b.len())),
        (Value::Object(a), Value::Object(b)) => a
            .iter()
            .zip(b)
            .map(|((ka, va), (kb, vb))| ka.cmp(kb).then_with(|| compare_values(va, vb)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| a.len().cmp(&b.len())),
        _ => kind_rank(a).cmp(&kind_rank(b)),
    }
}

/// Compares two values without descending into composites.
///
/// Scalars are equal when they hold the same value. Arrays and objects are only equal to
/// themselves (the same allocation), never to a structurally identical copy.
pub fn strict_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Array(_), _) | (Value::Object(_), _) => core::ptr::eq(a, b),
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => x == y,
        },
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_lookup() {
        let value = json!({ "name": "Mike", "age": 3 });
        assert_eq!(value.field("name"), Some(&json!("Mike")));
        assert_eq!(value.field("missing"), None);

        // Non-objects have no fields
        assert_eq!(json!([1, 2]).field("0"), None);
        assert_eq!(json!("name").field("name"), None);
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!("a")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn test_compare_values() {
        assert_eq!(compare_values(&json!(1), &json!(2.5)), Ordering::Less);
        assert_eq!(compare_values(&json!(-0.5), &json!(-3)), Ordering::Greater);
        assert_eq!(compare_values(&json!(2), &json!(2.0)), Ordering::Equal);
        assert_eq!(compare_values(&json!("b"), &json!("a")), Ordering::Greater);
        assert_eq!(compare_values(&json!(false), &json!(true)), Ordering::Less);
        assert_eq!(compare_values(&json!([1, 2]), &json!([1, 3])), Ordering::Less);
        assert_eq!(compare_values(&json!([1]), &json!([1, 0])), Ordering::Less);
        assert_eq!(compare_values(&json!({ "a": 1 }), &json!({ "a": 1 })), Ordering::Equal);
        assert_eq!(compare_values(&json!({ "a": 2 }), &json!({ "b": 1 })), Ordering::Less);
    }

    #[test]
    fn test_compare_values_across_kinds() {
        let ascending = [
            json!(null),
            json!(true),
            json!(-5),
            json!(1_000_000),
            json!(""),
            json!("1"),
            json!([]),
            json!({}),
        ];
        for (i, a) in ascending.iter().enumerate() {
            for (j, b) in ascending.iter().enumerate() {
                assert_eq!(compare_values(a, b), i.cmp(&j), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_strict_equal() {
        assert!(strict_equal(&json!(1), &json!(1.0)));
        assert!(strict_equal(&json!("a"), &json!("a")));
        assert!(!strict_equal(&json!("a"), &json!("b")));

        // Composites only match themselves
        let nested = json!({ "a": 1 });
        assert!(strict_equal(&nested, &nested));
        assert!(!strict_equal(&nested, &json!({ "a": 1 })));
    }

    #[test]
    fn test_type_name() {
        assert_eq!(type_name(&json!(null)), "null");
        assert_eq!(type_name(&json!(1)), "number");
        assert_eq!(type_name(&json!({})), "object");
    }
}
