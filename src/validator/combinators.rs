//! Branching combinators: union, intersection and maybe.

use crate::context::Context;
use crate::error::ValidationErrors;
use crate::result::{assert, Validation};
use crate::value::Value;

use super::{joined_names, reject, Kind, Validator};

/// First-match alternation over two or more validators.
///
/// Members are tried in order and the first acceptance wins. When none
/// matches, the result is a *single* error at the union's own context; the
/// per-branch errors are not surfaced, since a reporter cannot meaningfully
/// pick among branches. The default name is `(A | B | …)`.
///
/// # Example
///
/// ```rust
/// use shibboleth::{is_valid, number, string, union, Value};
///
/// let id = union([string(), number()]);
/// assert_eq!(id.name(), "(string | number)");
/// assert!(is_valid(&Value::from("abc"), &id));
/// assert!(is_valid(&Value::from(7), &id));
/// assert!(!is_valid(&Value::from(true), &id));
/// ```
pub fn union<I>(members: I) -> Validator
where
    I: IntoIterator<Item = Validator>,
{
    let members: Vec<Validator> = members.into_iter().collect();
    assert(members.len() >= 2, || {
        "union requires at least two validators".to_string()
    });
    let name = format!("({})", joined_names(&members, " | "));
    Validator::new(name, Kind::Union { members })
}

/// Conjunction: every member must accept the value.
///
/// Each member runs under a context entry `(index, member name)` and all
/// failures are collected. The default name is `(A & B & …)`.
pub fn intersection<I>(members: I) -> Validator
where
    I: IntoIterator<Item = Validator>,
{
    let members: Vec<Validator> = members.into_iter().collect();
    assert(members.len() >= 2, || {
        "intersection requires at least two validators".to_string()
    });
    let name = format!("({})", joined_names(&members, " & "));
    Validator::new(name, Kind::Intersection { members })
}

/// Accepts nil, otherwise delegates to `inner`.
///
/// The default name is `?T`.
pub fn maybe(inner: Validator) -> Validator {
    let name = format!("?{}", inner.name());
    Validator::new(name, Kind::Maybe { inner })
}

pub(super) fn validate_union<'a>(
    members: &[Validator],
    value: &'a Value,
    context: &Context,
) -> Validation<&'a Value> {
    for member in members {
        if let Validation::Success(accepted) = member.validate(value, context) {
            return Validation::success(accepted);
        }
    }
    reject(value, context)
}

pub(super) fn validate_intersection<'a>(
    members: &[Validator],
    value: &'a Value,
    context: &Context,
) -> Validation<&'a Value> {
    let mut errors = Vec::new();
    for (index, member) in members.iter().enumerate() {
        let member_context = context.push(index.to_string(), member.name());
        if let Validation::Failure(member_errors) = member.validate(value, &member_context) {
            errors.extend(member_errors);
        }
    }

    if errors.is_empty() {
        Validation::success(value)
    } else {
        Validation::Failure(ValidationErrors::from_vec(errors))
    }
}

pub(super) fn validate_maybe<'a>(
    inner: &Validator,
    value: &'a Value,
    context: &Context,
) -> Validation<&'a Value> {
    if value.is_null() {
        Validation::success(value)
    } else {
        inner.validate(value, context)
    }
}
