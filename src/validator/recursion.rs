//! Self-referential validators via late binding.

use std::sync::{Arc, OnceLock, Weak};

use crate::context::Context;
use crate::result::{crash, Validation};
use crate::value::Value;

use super::{Inner, Kind, Validator};

/// Builds a validator that can refer to itself.
///
/// `define` receives a placeholder standing in for the validator being
/// defined; the validator it returns is renamed to `name` and becomes the
/// placeholder's late-bound target. The placeholder holds a non-owning
/// handle, so embedding it inside the definition creates no ownership
/// cycle; the recursive reference stays valid for as long as the returned
/// validator (or any validator containing it) is alive.
///
/// # Example
///
/// ```rust
/// use shibboleth::{array, number, object, recursion, validate, Value};
/// use serde_json::json;
///
/// let tree = recursion("Tree", |tree| {
///     object([
///         ("value", number()),
///         ("children", array(tree.clone())),
///     ])
/// });
/// assert_eq!(tree.name(), "Tree");
///
/// let value = Value::from(json!({
///     "value": 1,
///     "children": [{"value": 2, "children": []}],
/// }));
/// assert!(validate(&value, &tree).is_success());
/// ```
pub fn recursion<F>(name: impl Into<String>, define: F) -> Validator
where
    F: FnOnce(&Validator) -> Validator,
{
    let name = name.into();
    let target: Arc<OnceLock<Weak<Inner>>> = Arc::new(OnceLock::new());
    let placeholder = Validator::new(
        name.clone(),
        Kind::Recursion {
            target: Arc::clone(&target),
        },
    );
    let result = define(&placeholder).named(name);
    let _ = target.set(Arc::downgrade(&result.inner));
    result
}

pub(super) fn validate_recursion<'a>(
    target: &OnceLock<Weak<Inner>>,
    value: &'a Value,
    context: &Context,
) -> Validation<&'a Value> {
    let Some(weak) = target.get() else {
        crash("recursive validator used before its definition completed")
    };
    let Some(inner) = weak.upgrade() else {
        crash("recursive validator used after its definition was dropped")
    };
    Validator::from_inner(inner).validate(value, context)
}
