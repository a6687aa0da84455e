//! Tests for recursive validators.

use shibboleth::{
    array, is_valid, maybe, number, object, recursion, string, validate, Value,
};
use serde_json::json;

fn tree() -> shibboleth::Validator {
    recursion("Tree", |tree| {
        object([("value", number()), ("children", array(tree.clone()))])
    })
}

#[test]
fn test_recursion_back_patches_the_name() {
    assert_eq!(tree().name(), "Tree");
}

#[test]
fn test_recursive_validator_accepts_nested_values() {
    let value = Value::from(json!({
        "value": 1,
        "children": [
            {"value": 2, "children": []},
            {"value": 3, "children": [{"value": 4, "children": []}]},
        ],
    }));
    let validated = validate(&value, &tree()).unwrap_success();
    assert!(std::ptr::eq(validated, &value));
}

#[test]
fn test_recursive_validator_locates_nested_faults() {
    let value = Value::from(json!({
        "value": 1,
        "children": [{"value": "x", "children": []}],
    }));
    let errors = validate(&value, &tree()).unwrap_failure();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.first().description,
        "Invalid value \"x\" supplied to : Tree/children: Array<Tree>/0: Tree/value: number"
    );
}

#[test]
fn test_recursive_references_use_the_recursion_name_in_child_names() {
    let tree = tree();
    let value = Value::from(json!({"value": 1, "children": "x"}));
    let errors = validate(&value, &tree).unwrap_failure();
    assert_eq!(
        errors.first().description,
        "Invalid value \"x\" supplied to : Tree/children: Array<Tree>"
    );
}

#[test]
fn test_deeply_nested_recursion_terminates() {
    fn nested(depth: usize) -> serde_json::Value {
        if depth == 0 {
            json!({"value": 0, "children": []})
        } else {
            json!({"value": depth, "children": [nested(depth - 1)]})
        }
    }

    assert!(is_valid(&Value::from(nested(200)), &tree()));
}

#[test]
fn test_linked_list_via_maybe() {
    let list = recursion("List", |list| {
        object([("head", number()), ("tail", maybe(list.clone()))])
    });

    let value = Value::from(json!({"head": 1, "tail": {"head": 2, "tail": null}}));
    assert!(is_valid(&value, &list));

    let bad = Value::from(json!({"head": 1, "tail": {"head": "x", "tail": null}}));
    let errors = validate(&bad, &list).unwrap_failure();
    assert_eq!(
        errors.first().description,
        "Invalid value \"x\" supplied to : List/tail: ?List/head: number"
    );
}

#[test]
fn test_recursive_validator_shared_across_parents() {
    let tree = tree();
    let forest = object([("name", string()), ("roots", array(tree.clone()))]);

    let value = Value::from(json!({
        "name": "f",
        "roots": [{"value": 1, "children": []}],
    }));
    assert!(is_valid(&value, &forest));
    // The original handle still works on its own.
    assert!(is_valid(&Value::from(json!({"value": 1, "children": []})), &tree));
}
