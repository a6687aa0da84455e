//! # Shibboleth
//!
//! Composable runtime validators with path-annotated error accumulation.
//!
//! ## Overview
//!
//! Shibboleth is a small algebra for building first-class type descriptors
//! (*validators*) and applying them to values of unknown shape at trust
//! boundaries: wire payloads, configuration, cross-module data. A
//! validator decides membership, collects every fault with an exact path on
//! rejection, and hands back the same reference on acceptance so callers
//! can alias freely.
//!
//! Composite validators accumulate all errors rather than short-circuiting
//! on the first failure; only [`union`] and [`refinement`] collapse to a
//! single error about the whole value, because a reporter cannot
//! meaningfully pick among branches.
//!
//! ## Core types
//!
//! - [`Value`]: the runtime values validators are applied to
//! - [`Validator`]: a name, a kind, and a pure validate function
//! - [`Context`]: the path at which a sub-validation is happening
//! - [`Validation`]: success carrying the value, or a non-empty error list
//!
//! ## Example
//!
//! ```rust
//! use shibboleth::{array, maybe, number, object, string, validate, Value};
//! use serde_json::json;
//!
//! let user = object([
//!     ("name", string()),
//!     ("nickname", maybe(string())),
//!     ("scores", array(number())),
//! ]);
//!
//! let good = Value::from(json!({"name": "Ada", "scores": [1, 2]}));
//! assert!(validate(&good, &user).is_success());
//!
//! let bad = Value::from(json!({"name": "Ada", "scores": [1, "x"]}));
//! let errors = validate(&bad, &user).unwrap_failure();
//! assert_eq!(
//!     errors.first().description,
//!     "Invalid value \"x\" supplied to \
//!      : { name: string, nickname: ?string, scores: Array<number> }\
//!      /scores: Array<number>/1: number"
//! );
//! ```

#![warn(missing_docs)]

pub mod context;
pub mod error;
pub mod result;
pub mod rules;
pub mod validator;
pub mod value;

pub use context::{Context, ContextEntry};
pub use error::{ValidationError, ValidationErrors};
pub use result::{assert, crash, Validation};
pub use validator::{
    any, arr, array, boolean, class_of, exact, fun, instance_of, intersection, keys, literal,
    mapping, maybe, nil, number, obj, object, recursion, refinement, refinement_named, shape,
    string, tuple, union, Tag, Validator,
};
pub use value::{Class, Function, Value};

/// Type alias for validation results carrying a reference to the input.
pub type ValidationResult<'a> = Validation<&'a Value>;

/// Validates `value` against `validator` under a fresh root context.
///
/// # Example
///
/// ```rust
/// use shibboleth::{number, validate, Value};
///
/// assert!(validate(&Value::from(3), &number()).is_success());
/// assert!(validate(&Value::from("x"), &number()).is_failure());
/// ```
pub fn validate<'a>(value: &'a Value, validator: &Validator) -> ValidationResult<'a> {
    validator.validate(value, &Context::root(validator))
}

/// Validates `value` against `validator` under a caller-provided context.
///
/// Useful when a validation is logically nested inside a larger structure
/// the caller is traversing itself.
pub fn validate_with_context<'a>(
    value: &'a Value,
    context: &Context,
    validator: &Validator,
) -> ValidationResult<'a> {
    validator.validate(value, context)
}

/// Returns true if `validator` accepts `value`.
pub fn is_valid(value: &Value, validator: &Validator) -> bool {
    validate(value, validator).is_success()
}

/// Validates and returns the accepted reference.
///
/// # Panics
///
/// Panics (programmer failure) when the value is rejected, with every error
/// description in the message.
pub fn unwrap_validate<'a>(value: &'a Value, validator: &Validator) -> &'a Value {
    validate(value, validator).unwrap_success()
}
