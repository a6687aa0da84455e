//! The irreducible validators: the atoms of the algebra.

use crate::context::Context;
use crate::result::Validation;
use crate::value::Value;

use super::{reject, Kind, Validator};

/// Accepts the nil value.
pub fn nil() -> Validator {
    Validator::new("nil", Kind::Irreducible { check: is_nil })
}

/// Accepts every value, including nil.
pub fn any() -> Validator {
    Validator::new("any", Kind::Irreducible { check: is_any })
}

/// Accepts primitive strings.
pub fn string() -> Validator {
    Validator::new("string", Kind::Irreducible { check: is_string })
}

/// Accepts finite, non-NaN primitive numbers.
pub fn number() -> Validator {
    Validator::new("number", Kind::Irreducible { check: is_number })
}

/// Accepts primitive booleans.
pub fn boolean() -> Validator {
    Validator::new("boolean", Kind::Irreducible { check: is_boolean })
}

/// Accepts any ordered-sequence value, regardless of element types.
pub fn arr() -> Validator {
    Validator::new("arr", Kind::Irreducible { check: is_arr })
}

/// Accepts any record value, regardless of field types.
pub fn obj() -> Validator {
    Validator::new("obj", Kind::Irreducible { check: is_obj })
}

/// Accepts callables: functions and classes.
pub fn fun() -> Validator {
    Validator::new("fun", Kind::Irreducible { check: is_fun })
}

fn is_nil(value: &Value) -> bool {
    value.is_null()
}

fn is_any(_: &Value) -> bool {
    true
}

fn is_string(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

fn is_number(value: &Value) -> bool {
    matches!(value, Value::Number(n) if n.is_finite())
}

fn is_boolean(value: &Value) -> bool {
    matches!(value, Value::Bool(_))
}

fn is_arr(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

fn is_obj(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

fn is_fun(value: &Value) -> bool {
    value.is_callable()
}

pub(super) fn validate_irreducible<'a>(
    check: fn(&Value) -> bool,
    value: &'a Value,
    context: &Context,
) -> Validation<&'a Value> {
    if check(value) {
        Validation::success(value)
    } else {
        reject(value, context)
    }
}
