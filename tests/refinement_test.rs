//! Tests for refinement, literal and nominal validators.

use shibboleth::{
    array, class_of, instance_of, is_valid, literal, number, refinement, refinement_named, string,
    validate, Class, Function, Value,
};
use serde_json::json;

#[test]
fn test_refinement_default_name() {
    let positive = refinement(number(), |v| matches!(v, Value::Number(n) if *n > 0.0));
    assert_eq!(positive.name(), "(number | <function1>)");
}

#[test]
fn test_refinement_named_predicate() {
    let positive = refinement_named(number(), "positive", |v| {
        matches!(v, Value::Number(n) if *n > 0.0)
    });
    assert_eq!(positive.name(), "(number | positive)");
}

#[test]
fn test_refinement_runs_the_base_first() {
    let positive = refinement(number(), |v| matches!(v, Value::Number(n) if *n > 0.0));

    // The base rejection carries the refinement's context.
    let errors = validate(&Value::from("x"), &positive).unwrap_failure();
    assert_eq!(
        errors.first().description,
        "Invalid value \"x\" supplied to : (number | <function1>)"
    );
}

#[test]
fn test_refinement_predicate_failure_is_a_single_error() {
    let positive = refinement(number(), |v| matches!(v, Value::Number(n) if *n > 0.0));
    let errors = validate(&Value::from(-3), &positive).unwrap_failure();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.first().value, Value::from(-3));
    assert_eq!(
        errors.first().description,
        "Invalid value -3 supplied to : (number | <function1>)"
    );
}

#[test]
fn test_refinement_accepts_and_returns_the_input_reference() {
    let positive = refinement(number(), |v| matches!(v, Value::Number(n) if *n > 0.0));
    let value = Value::from(3);
    let validated = validate(&value, &positive).unwrap_success();
    assert!(std::ptr::eq(validated, &value));
}

#[test]
fn test_refinements_chain() {
    let positive = refinement(number(), |v| matches!(v, Value::Number(n) if *n > 0.0));
    let small_positive = refinement(positive, |v| matches!(v, Value::Number(n) if *n < 10.0));
    assert_eq!(small_positive.name(), "((number | <function1>) | <function1>)");

    assert!(is_valid(&Value::from(5), &small_positive));
    assert!(!is_valid(&Value::from(-5), &small_positive));
    assert!(!is_valid(&Value::from(50), &small_positive));
}

#[test]
fn test_literal_accepts_only_the_exact_value() {
    assert!(is_valid(&Value::from("on"), &literal("on")));
    assert!(!is_valid(&Value::from("off"), &literal("on")));

    assert!(is_valid(&Value::from(2), &literal(2)));
    assert!(is_valid(&Value::from(true), &literal(true)));
    assert!(!is_valid(&Value::from(false), &literal(true)));
}

#[test]
fn test_literal_names_are_json_renderings() {
    assert_eq!(literal("on").name(), "\"on\"");
    assert_eq!(literal(2).name(), "2");
    assert_eq!(literal(true).name(), "true");
}

#[test]
#[should_panic(expected = "literal requires a string, number or boolean")]
fn test_literal_rejects_container_values() {
    literal(Value::from(json!([1])));
}

#[test]
fn test_instance_of_accepts_instances_of_the_class() {
    let animal = Class::new("Animal");
    let dog = Class::extends("Dog", &animal);

    let validator = instance_of(&animal);
    assert_eq!(validator.name(), "Animal");

    assert!(is_valid(&animal.instance(), &validator));
    assert!(is_valid(&dog.instance(), &validator));
    assert!(!is_valid(&animal.instance(), &instance_of(&dog)));
    assert!(!is_valid(&Class::new("Animal").instance(), &validator));
    assert!(!is_valid(&Value::from(animal), &validator));
}

#[test]
fn test_class_of_accepts_the_class_and_its_subclasses() {
    let a = Class::new("A");
    let b = Class::extends("B", &a);
    let c = Class::new("C");

    let validator = class_of(&a);
    assert!(is_valid(&Value::from(a.clone()), &validator));
    assert!(is_valid(&Value::from(b), &validator));
    assert!(!is_valid(&Value::from(c.clone()), &validator));
    assert!(!is_valid(&a.instance(), &validator));
}

#[test]
fn test_class_of_rejection_names_the_offending_class() {
    let a = Class::new("A");
    let c = Class::new("C");

    let errors = validate(&Value::from(c), &class_of(&a)).unwrap_failure();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.first().description,
        "Invalid value C supplied to : Class<A>"
    );
}

#[test]
fn test_class_of_requires_a_callable() {
    let a = Class::new("A");
    let errors = validate(&Value::from(json!({})), &class_of(&a)).unwrap_failure();
    assert_eq!(
        errors.first().description,
        "Invalid value {} supplied to : Class<A>"
    );
}

#[test]
fn test_anonymous_functions_render_with_arity() {
    let errors = validate(&Value::from(Function::anonymous(2)), &string()).unwrap_failure();
    assert_eq!(
        errors.first().description,
        "Invalid value <function2> supplied to : string"
    );
}

#[test]
fn test_refinement_inside_a_composite() {
    let non_empty = refinement(string(), |v| v.as_str().is_some_and(|s| !s.is_empty()));
    let names = array(non_empty);

    let errors = validate(&Value::from(json!(["ok", ""])), &names).unwrap_failure();
    assert_eq!(
        errors.first().description,
        "Invalid value \"\" supplied to \
         : Array<(string | <function1>)>/1: (string | <function1>)"
    );
}
