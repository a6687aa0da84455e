//! Validators are shared freely across threads.

use std::sync::Arc;
use std::thread;

use shibboleth::{array, number, object, recursion, string, validate, Value};
use serde_json::json;

#[test]
fn test_concurrent_validation_with_a_shared_validator() {
    let schema = Arc::new(object([
        ("name", string()),
        ("scores", array(number())),
    ]));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let schema = Arc::clone(&schema);
            thread::spawn(move || {
                let value = Value::from(json!({"name": format!("user-{i}"), "scores": [i]}));
                validate(&value, &schema).is_success()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn test_concurrent_validation_of_a_recursive_validator() {
    let tree = Arc::new(recursion("Tree", |tree| {
        object([("value", number()), ("children", array(tree.clone()))])
    }));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let tree = Arc::clone(&tree);
            thread::spawn(move || {
                let good = Value::from(json!({
                    "value": i,
                    "children": [{"value": i, "children": []}],
                }));
                let bad = Value::from(json!({"value": "x", "children": []}));
                validate(&good, &tree).is_success() && validate(&bad, &tree).is_failure()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn test_validator_handles_move_between_threads() {
    let schema = number();
    let handle = thread::spawn(move || validate(&Value::from(1), &schema).is_success());
    assert!(handle.join().unwrap());
}
