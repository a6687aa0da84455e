//! Refinement validators: a base validator narrowed by a predicate.

use std::sync::Arc;

use crate::context::Context;
use crate::result::Validation;
use crate::value::Value;

use super::{reject, Kind, Predicate, Validator};

/// Narrows `base` with a runtime predicate.
///
/// The base validator runs first; only its accepted values reach the
/// predicate. A predicate rejection is a single error carrying the original
/// value at the current context. Closures have no name, so the default name
/// is `(T | <function1>)`; use [`refinement_named`] to name the predicate.
///
/// # Example
///
/// ```rust
/// use shibboleth::{refinement, string, is_valid, Value};
///
/// let short = refinement(string(), |v| {
///     v.as_str().is_some_and(|s| s.len() <= 3)
/// });
/// assert_eq!(short.name(), "(string | <function1>)");
/// assert!(is_valid(&Value::from("abc"), &short));
/// assert!(!is_valid(&Value::from("abcd"), &short));
/// ```
pub fn refinement<P>(base: Validator, predicate: P) -> Validator
where
    P: Fn(&Value) -> bool + Send + Sync + 'static,
{
    let name = format!("({} | <function1>)", base.name());
    Validator::new(
        name,
        Kind::Refinement {
            base,
            predicate: Arc::new(predicate),
        },
    )
}

/// Like [`refinement`], with a display name for the predicate:
/// `(T | predicate_name)`.
pub fn refinement_named<P>(base: Validator, predicate_name: &str, predicate: P) -> Validator
where
    P: Fn(&Value) -> bool + Send + Sync + 'static,
{
    let name = format!("({} | {predicate_name})", base.name());
    Validator::new(
        name,
        Kind::Refinement {
            base,
            predicate: Arc::new(predicate),
        },
    )
}

pub(super) fn validate_refinement<'a>(
    base: &Validator,
    predicate: &Predicate,
    value: &'a Value,
    context: &Context,
) -> Validation<&'a Value> {
    match base.validate(value, context) {
        Validation::Success(accepted) => {
            if predicate(accepted) {
                Validation::success(accepted)
            } else {
                reject(value, context)
            }
        }
        Validation::Failure(errors) => Validation::Failure(errors),
    }
}
