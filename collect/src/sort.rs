//! Comparators for [slice::sort_by].
//!
//! [ascending_by] and [descending_by] chain projections: the first projection on which two
//! elements differ decides their order, and elements equal on every projection keep their
//! relative order (the sort is stable). [by], [by_key] and [ordered_by] rank elements against an
//! explicit priority list instead, placing values missing from the list after every listed one.

use crate::value::{compare_values, Record};
use core::cmp::Ordering;
use serde_json::Value;

static NULL: Value = Value::Null;

fn field_or_null<'v, T: Record>(item: &'v T, name: &str) -> &'v Value {
    item.field(name).unwrap_or(&NULL)
}

/// Maps an element to a comparable value.
pub struct Projection<'a, T> {
    compare: Box<dyn Fn(&T, &T) -> Ordering + 'a>,
}

/// Orders two values that may be incomparable.
///
/// A value that is not comparable to itself (such as `f64::NAN`) sorts after every value that
/// is. Any other incomparable pair ties.
fn compare_partial<R: PartialOrd>(a: &R, b: &R) -> Ordering {
    if let Some(ordering) = a.partial_cmp(b) {
        return ordering;
    }
    let ordered = |value: &R| value.partial_cmp(value).is_some();
    ordered(b).cmp(&ordered(a))
}

impl<'a, T> Projection<'a, T> {
    /// Projects with a callback.
    ///
    /// Values are expected to be totally ordered, apart from values unordered even against
    /// themselves (such as `f64::NAN`), which sort last.
    pub fn getter<R, F>(getter: F) -> Self
    where
        R: PartialOrd,
        F: Fn(&T) -> R + 'a,
    {
        Self {
            compare: Box::new(move |a, b| compare_partial(&getter(a), &getter(b))),
        }
    }

    /// Projects onto the property `name`, ordering values with [compare_values]. A missing
    /// property reads as `null`, so it sorts first in ascending order.
    pub fn property(name: impl Into<String>) -> Self
    where
        T: Record,
    {
        let name = name.into();
        Self {
            compare: Box::new(move |a, b| {
                compare_values(field_or_null(a, &name), field_or_null(b, &name))
            }),
        }
    }

    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.compare)(a, b)
    }
}

impl<'a, T: Record> From<&str> for Projection<'a, T> {
    fn from(name: &str) -> Self {
        Self::property(name)
    }
}

fn chain<'a, T: 'a>(
    projections: Vec<Projection<'a, T>>,
    direction: fn(Ordering) -> Ordering,
) -> impl Fn(&T, &T) -> Ordering + 'a {
    move |a, b| {
        projections
            .iter()
            .map(|projection| projection.compare(a, b))
            .find(|ordering| ordering.is_ne())
            .map_or(Ordering::Equal, direction)
    }
}

/// Sorts by `projections` in ascending order. No projections means no reordering.
pub fn ascending_by<'a, T: 'a>(
    projections: Vec<Projection<'a, T>>,
) -> impl Fn(&T, &T) -> Ordering + 'a {
    chain(projections, core::convert::identity)
}

/// Sorts by `projections` in descending order. No projections means no reordering.
pub fn descending_by<'a, T: 'a>(
    projections: Vec<Projection<'a, T>>,
) -> impl Fn(&T, &T) -> Ordering + 'a {
    chain(projections, Ordering::reverse)
}

/// Ranks elements by the position of a projected value within an explicit order.
pub struct SortingCondition<'a, T> {
    rank: Box<dyn Fn(&T) -> usize + 'a>,
}

impl<'a, T> SortingCondition<'a, T> {
    /// Ranks each element by the position of `to_value(element)` in `order`. Values missing
    /// from `order` rank after every listed value.
    pub fn new<R, F>(to_value: F, order: Vec<R>) -> Self
    where
        R: PartialEq + 'a,
        F: Fn(&T) -> R + 'a,
    {
        Self {
            rank: Box::new(move |item| {
                let value = to_value(item);
                order
                    .iter()
                    .position(|candidate| *candidate == value)
                    .unwrap_or(order.len())
            }),
        }
    }
}

/// Sorts by `conditions` in priority order: the first condition on which two elements rank
/// differently decides.
pub fn by<'a, T: 'a>(
    conditions: Vec<SortingCondition<'a, T>>,
) -> impl Fn(&T, &T) -> Ordering + 'a {
    move |a, b| {
        conditions
            .iter()
            .map(|condition| (condition.rank)(a).cmp(&(condition.rank)(b)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

/// Sorts by the rank of property `key` within `order`.
pub fn by_key<'a, T, I>(key: &str, order: I) -> impl Fn(&T, &T) -> Ordering + 'a
where
    T: Record + 'a,
    I: IntoIterator,
    I::Item: Into<Value>,
{
    let key = key.to_string();
    let order = order.into_iter().map(Into::into).collect();
    by(vec![SortingCondition::new(
        move |item: &T| field_or_null(item, &key).clone(),
        order,
    )])
}

/// Sorts elements by their own rank within `order`.
pub fn ordered_by<'a, T: PartialEq + 'a>(order: Vec<T>) -> impl Fn(&T, &T) -> Ordering + 'a {
    let rank = move |item: &T| {
        order
            .iter()
            .position(|candidate| candidate == item)
            .unwrap_or(order.len())
    };
    move |a, b| rank(a).cmp(&rank(b))
}
