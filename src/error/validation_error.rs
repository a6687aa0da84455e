//! Validation error types.
//!
//! [`ValidationError`] captures a single rejection; [`ValidationErrors`]
//! accumulates rejections while guaranteeing there is at least one.

use std::fmt::{self, Display};

use crate::context::Context;
use crate::result::assert;
use crate::value::Value;

/// A single validation error.
///
/// Carries the offending runtime value, the context path at which it was
/// rejected, and a human-readable description. The description is canonical
/// and computed at construction:
/// `"Invalid value <value> supplied to <context>"`, where the value renders
/// as its callable name or its JSON form, and the context renders as
/// `/`-joined `key: name` entries.
///
/// # Example
///
/// ```rust
/// use shibboleth::{number, validate, Value};
///
/// let value = Value::from("x");
/// let result = validate(&value, &number());
/// let errors = result.unwrap_failure();
/// assert_eq!(
///     errors.first().description,
///     "Invalid value \"x\" supplied to : number"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// The runtime value that was rejected.
    pub value: Value,
    /// The path at which the rejection happened.
    pub context: Context,
    /// Human-readable description of the rejection.
    pub description: String,
}

impl ValidationError {
    /// Creates a new error for `value` rejected at `context`.
    pub fn new(value: Value, context: Context) -> Self {
        let description = format!("Invalid value {value} supplied to {context}");
        Self {
            value,
            context,
            description,
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description)
    }
}

impl std::error::Error for ValidationError {}

// ValidationError must stay shareable across threads; these assertions fail
// to compile if a field change breaks that.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationError>();
    assert_sync::<ValidationError>();
};

/// A non-empty collection of validation errors.
///
/// A failed validation always carries at least one error; constructing an
/// empty collection is a programmer failure.
///
/// # Combining
///
/// Composite validators accumulate errors from several branches:
///
/// ```rust
/// use shibboleth::{Context, number, ValidationError, ValidationErrors, Value};
///
/// let at = Context::root(&number());
/// let first = ValidationErrors::single(ValidationError::new(Value::from("a"), at.clone()));
/// let second = ValidationErrors::single(ValidationError::new(Value::from("b"), at));
///
/// assert_eq!(first.combine(second).len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Creates a collection containing a single error.
    pub fn single(error: ValidationError) -> Self {
        Self(vec![error])
    }

    /// Creates a collection from a vector of errors.
    ///
    /// # Panics
    ///
    /// Panics (programmer failure) if the vector is empty.
    pub fn from_vec(errors: Vec<ValidationError>) -> Self {
        assert(!errors.is_empty(), || {
            "a failed validation requires at least one error".to_string()
        });
        Self(errors)
    }

    /// Appends the other collection's errors after this one's.
    pub fn combine(mut self, other: Self) -> Self {
        self.0.extend(other.0);
        self
    }

    /// Returns the number of errors in this collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns false; the collection is guaranteed non-empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the contained errors.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// Returns the first error.
    pub fn first(&self) -> &ValidationError {
        &self.0[0]
    }

    /// Returns all errors rejected at the given context.
    pub fn at_context(&self, context: &Context) -> Vec<&ValidationError> {
        self.0.iter().filter(|e| &e.context == context).collect()
    }

    /// Converts this collection into a plain vector.
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.len())?;
        for (i, error) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationErrors>();
    assert_sync::<ValidationErrors>();
};
