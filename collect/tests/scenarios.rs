mod common;

use declarative_collect::{
    key::KeySource,
    map::new_map,
    object::Object,
    reducer::{flat, group_by, partition_by, partitions, to_merged_object, OVERRIDE},
    Fold, MethodMap,
};
use serde_json::{json, Value};

#[test]
fn test_group_by_identity() {
    common::init_tracing();
    let groups = ["a", "a", "b"]
        .fold_with(new_map(), group_by(KeySource::getter(|s: &&str| *s)))
        .unwrap();
    assert_eq!(groups.keys().unwrap(), vec!["a", "b"]);
    assert_eq!(groups.values().unwrap(), vec![vec!["a", "a"], vec!["b"]]);
}

#[test]
fn test_group_by_name() {
    common::init_tracing();
    let people = [
        json!({ "name": "Mike" }),
        json!({ "name": "John" }),
        json!({ "name": "John" }),
    ];
    let groups = people
        .fold_with(new_map(), group_by(KeySource::property("name")))
        .unwrap();
    assert_eq!(groups.keys().unwrap(), vec!["Mike", "John"]);
    assert_eq!(
        groups.values().unwrap(),
        vec![
            vec![json!({ "name": "Mike" })],
            vec![json!({ "name": "John" }), json!({ "name": "John" })],
        ]
    );
}

#[test]
fn test_flatten() {
    let nested = [[1, 2], [2, 3], [3, 4]];
    let flattened: Vec<i32> = nested.fold_with(Vec::new(), flat()).unwrap();
    assert_eq!(flattened.len(), 6);
    assert_eq!(flattened, vec![1, 2, 2, 3, 3, 4]);
}

#[test]
fn test_merge_override() {
    let sources: Vec<Object<Value>> = [json!({ "e": 1 }), json!({ "d": 2 }), json!({ "c": 3 })]
        .into_iter()
        .filter_map(|v| v.as_object().cloned())
        .map(Object::from)
        .collect();
    let merged = sources
        .fold_with(Object::new(), to_merged_object(OVERRIDE))
        .unwrap();
    assert_eq!(merged.keys().collect::<Vec<_>>(), vec!["e", "d", "c"]);
    assert_eq!(Value::from(merged), json!({ "e": 1, "d": 2, "c": 3 }));
}

#[test]
fn test_partition_even() {
    let is_even = |n: &i32| n % 2 == 0;
    let partitioned = [1, 2, 3, 4, 5, 6]
        .fold_with(partitions(), partition_by(is_even))
        .unwrap();
    assert_eq!(partitioned, (vec![2, 4, 6], vec![1, 3, 5]));
}
