//! Literal validators: exact primitive values.

use crate::context::Context;
use crate::result::{assert, Validation};
use crate::value::Value;

use super::{reject, Kind, Validator};

/// Accepts only the given primitive value.
///
/// The value must be a string, number or boolean; anything else is a
/// programmer failure. The default name is the value's JSON rendering.
///
/// # Example
///
/// ```rust
/// use shibboleth::{is_valid, literal, Value};
///
/// let active = literal("active");
/// assert_eq!(active.name(), "\"active\"");
/// assert!(is_valid(&Value::from("active"), &active));
/// assert!(!is_valid(&Value::from("idle"), &active));
/// ```
pub fn literal(value: impl Into<Value>) -> Validator {
    let value = value.into();
    assert(
        matches!(
            value,
            Value::String(_) | Value::Number(_) | Value::Bool(_)
        ),
        || format!("literal requires a string, number or boolean, got {value}"),
    );
    Validator::new(value.to_string(), Kind::Literal { expected: value })
}

pub(super) fn validate_literal<'a>(
    expected: &Value,
    value: &'a Value,
    context: &Context,
) -> Validation<&'a Value> {
    if value == expected {
        Validation::success(value)
    } else {
        reject(value, context)
    }
}
