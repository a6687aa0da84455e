//! Nominal validators: instance and class checks.

use std::sync::Arc;

use crate::context::Context;
use crate::result::Validation;
use crate::value::{Class, Value};

use super::{fun, reject, Kind, Predicate, Validator};

/// Accepts instances of `class` or of one of its subclasses.
///
/// The default name is the class name.
pub fn instance_of(class: &Class) -> Validator {
    Validator::new(
        class.name().to_string(),
        Kind::InstanceOf {
            class: class.clone(),
        },
    )
}

/// Accepts class values equal to `class` or extending it.
///
/// Expressed as a refinement over [`fun`]: the value must be callable, and
/// must be a class whose inheritance chain reaches the target. The default
/// name is `Class<C>`.
///
/// # Example
///
/// ```rust
/// use shibboleth::{class_of, is_valid, Class, Value};
///
/// let base = Class::new("Shape");
/// let circle = Class::extends("Circle", &base);
///
/// let validator = class_of(&base);
/// assert!(is_valid(&Value::from(base.clone()), &validator));
/// assert!(is_valid(&Value::from(circle), &validator));
/// assert!(!is_valid(&Value::from(Class::new("Other")), &validator));
/// ```
pub fn class_of(class: &Class) -> Validator {
    let target = class.clone();
    let predicate: Predicate = Arc::new(move |value| match value {
        Value::Class(candidate) => candidate.inherits(&target),
        _ => false,
    });
    Validator::new(
        format!("Class<{}>", class.name()),
        Kind::Refinement {
            base: fun(),
            predicate,
        },
    )
}

pub(super) fn validate_instance_of<'a>(
    class: &Class,
    value: &'a Value,
    context: &Context,
) -> Validation<&'a Value> {
    match value {
        Value::Instance(candidate) if candidate.inherits(class) => Validation::success(value),
        _ => reject(value, context),
    }
}
