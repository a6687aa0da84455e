//! Sequence validators: homogeneous arrays and positional tuples.

use crate::context::Context;
use crate::error::ValidationErrors;
use crate::result::Validation;
use crate::value::{Value, NIL};

use super::{joined_names, reject, Kind, Validator};

/// Validates every element of a sequence against `element`.
///
/// All element errors are collected; there is no short-circuit. The default
/// name is `Array<T>`.
///
/// # Example
///
/// ```rust
/// use shibboleth::{array, number, validate, Value};
/// use serde_json::json;
///
/// let numbers = array(number());
/// assert_eq!(numbers.name(), "Array<number>");
///
/// let bad = Value::from(json!([1, "x", "y"]));
/// let errors = validate(&bad, &numbers).unwrap_failure();
/// assert_eq!(errors.len(), 2);
/// ```
pub fn array(element: Validator) -> Validator {
    let name = format!("Array<{}>", element.name());
    Validator::new(name, Kind::Array { element })
}

/// Validates a sequence position by position.
///
/// Excess elements are not errors; a missing position reads as nil and the
/// member validator at that position decides. The default name is
/// `[A, B, …]`.
pub fn tuple<I>(members: I) -> Validator
where
    I: IntoIterator<Item = Validator>,
{
    let members: Vec<Validator> = members.into_iter().collect();
    let name = format!("[{}]", joined_names(&members, ", "));
    Validator::new(name, Kind::Tuple { members })
}

pub(super) fn validate_array<'a>(
    element: &Validator,
    value: &'a Value,
    context: &Context,
) -> Validation<&'a Value> {
    let Some(items) = value.as_array() else {
        return reject(value, context);
    };

    let mut errors = Vec::new();
    for (index, item) in items.iter().enumerate() {
        let item_context = context.push(index.to_string(), element.name());
        if let Validation::Failure(item_errors) = element.validate(item, &item_context) {
            errors.extend(item_errors);
        }
    }

    if errors.is_empty() {
        Validation::success(value)
    } else {
        Validation::Failure(ValidationErrors::from_vec(errors))
    }
}

pub(super) fn validate_tuple<'a>(
    members: &[Validator],
    value: &'a Value,
    context: &Context,
) -> Validation<&'a Value> {
    let Some(items) = value.as_array() else {
        return reject(value, context);
    };

    let mut errors = Vec::new();
    for (index, member) in members.iter().enumerate() {
        let item = items.get(index).unwrap_or(&NIL);
        let item_context = context.push(index.to_string(), member.name());
        if let Validation::Failure(item_errors) = member.validate(item, &item_context) {
            errors.extend(item_errors);
        }
    }

    if errors.is_empty() {
        Validation::success(value)
    } else {
        Validation::Failure(ValidationErrors::from_vec(errors))
    }
}
