//! Tests for the top-level API surface.

use shibboleth::{
    is_valid, number, object, string, unwrap_validate, validate, validate_with_context, Context,
    Tag, Value,
};
use serde_json::json;

#[test]
fn test_validate_seeds_the_root_context() {
    let errors = validate(&Value::from(1), &string()).unwrap_failure();
    assert_eq!(errors.first().context.to_string(), ": string");
}

#[test]
fn test_validate_with_context_uses_the_caller_context() {
    let context = Context::root(&string()).push("payload", "string");
    let errors =
        validate_with_context(&Value::from(1), &context, &string()).unwrap_failure();
    assert_eq!(
        errors.first().description,
        "Invalid value 1 supplied to : string/payload: string"
    );
}

#[test]
fn test_is_valid() {
    assert!(is_valid(&Value::from(1), &number()));
    assert!(!is_valid(&Value::from("1"), &number()));
}

#[test]
fn test_unwrap_validate_returns_the_reference() {
    let value = Value::from(json!({"a": 1}));
    let schema = object([("a", number())]);
    assert!(std::ptr::eq(unwrap_validate(&value, &schema), &value));
}

#[test]
#[should_panic(expected = "[runtime-validation failure]")]
fn test_unwrap_validate_panics_on_rejection() {
    unwrap_validate(&Value::from("x"), &number());
}

#[test]
#[should_panic(expected = "Invalid value \"x\" supplied to : number")]
fn test_unwrap_validate_panic_message_carries_descriptions() {
    unwrap_validate(&Value::from("x"), &number());
}

#[test]
fn test_tags_form_a_closed_discriminant_set() {
    use shibboleth::{
        any, array, class_of, exact, intersection, keys, literal, mapping, maybe, recursion,
        refinement, shape, tuple, union, Class,
    };

    let point = object([("x", number())]);
    let cases = vec![
        (number(), Tag::Irreducible),
        (literal(1), Tag::Literal),
        (shibboleth::instance_of(&Class::new("C")), Tag::InstanceOf),
        (refinement(number(), |_| true), Tag::Refinement),
        (class_of(&Class::new("C")), Tag::Refinement),
        (array(number()), Tag::Array),
        (union([number(), string()]), Tag::Union),
        (tuple([number()]), Tag::Tuple),
        (intersection([number(), any()]), Tag::Intersection),
        (maybe(number()), Tag::Maybe),
        (mapping(string(), number()), Tag::Mapping),
        (point.clone(), Tag::Object),
        (keys(&point), Tag::Keys),
        (exact([("x", number())]), Tag::Exact),
        (shape(&point), Tag::Shape),
        (recursion("R", |r| object([("next", maybe(r.clone()))])), Tag::Object),
    ];
    for (validator, tag) in cases {
        assert_eq!(validator.tag(), tag, "{}", validator.name());
    }
}

#[test]
fn test_named_returns_a_fresh_validator() {
    let base = number();
    let renamed = base.named("Port");
    assert_eq!(base.name(), "number");
    assert_eq!(renamed.name(), "Port");
    assert_eq!(renamed.tag(), Tag::Irreducible);

    let errors = validate(&Value::from("x"), &renamed).unwrap_failure();
    assert_eq!(
        errors.first().description,
        "Invalid value \"x\" supplied to : Port"
    );
}

#[test]
fn test_validators_share_children() {
    let id = number().named("Id");
    let a = object([("id", id.clone())]);
    let b = object([("id", id)]);

    let value = Value::from(json!({"id": 7}));
    assert!(is_valid(&value, &a));
    assert!(is_valid(&value, &b));
}
