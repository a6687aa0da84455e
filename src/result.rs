//! The success-or-failures result algebra.
//!
//! [`Validation`] carries either a validated value or a non-empty list of
//! [`ValidationErrors`](crate::ValidationErrors). Domain failures are always
//! values of this type; the panicking operations ([`Validation::unwrap_success`],
//! [`Validation::unwrap_failure`], [`crash`], [`assert`]) are reserved for
//! programmer misuse and are not meant to be caught.

use crate::error::ValidationErrors;

/// Prefix carried by every programmer-failure panic raised by this crate.
const FAILURE_PREFIX: &str = "[runtime-validation failure]";

/// Result of applying a validator: a validated value or accumulated errors.
///
/// # Example
///
/// ```rust
/// use shibboleth::{string, validate, Validation, Value};
///
/// match validate(&Value::from("hi"), &string()) {
///     Validation::Success(v) => assert_eq!(v, &Value::from("hi")),
///     Validation::Failure(errors) => panic!("unexpected: {errors}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Validation<T> {
    /// The value was accepted.
    Success(T),
    /// The value was rejected with at least one error.
    Failure(ValidationErrors),
}

impl<T> Validation<T> {
    /// Wraps an accepted value.
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Wraps a rejection.
    pub fn failure(errors: ValidationErrors) -> Self {
        Validation::Failure(errors)
    }

    /// Returns true for `Success`.
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Returns true for `Failure`.
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// Applies `f` to a success value; failures pass through.
    pub fn map<U, F>(self, f: F) -> Validation<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(errors) => Validation::Failure(errors),
        }
    }

    /// Monadic sequencing: feeds a success value into `f`; failures pass
    /// through untouched.
    pub fn and_then<U, F>(self, f: F) -> Validation<U>
    where
        F: FnOnce(T) -> Validation<U>,
    {
        match self {
            Validation::Success(value) => f(value),
            Validation::Failure(errors) => Validation::Failure(errors),
        }
    }

    /// Applicative application: applies a validated function to a validated
    /// value, accumulating errors when both sides failed.
    ///
    /// Unused by the validators themselves (they accumulate directly) but
    /// part of the algebra's public surface.
    pub fn ap<U, F>(self, func: Validation<F>) -> Validation<U>
    where
        F: FnOnce(T) -> U,
    {
        match (func, self) {
            (Validation::Success(f), Validation::Success(value)) => Validation::Success(f(value)),
            (Validation::Failure(left), Validation::Failure(right)) => {
                Validation::Failure(left.combine(right))
            }
            (Validation::Failure(errors), _) | (_, Validation::Failure(errors)) => {
                Validation::Failure(errors)
            }
        }
    }

    /// Converts into a standard `Result`.
    pub fn into_result(self) -> Result<T, ValidationErrors> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(errors) => Err(errors),
        }
    }

    /// Returns the errors of a failure, if any.
    pub fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            Validation::Success(_) => None,
            Validation::Failure(errors) => Some(errors),
        }
    }

    /// Extracts the success value.
    ///
    /// # Panics
    ///
    /// Panics (programmer failure) on a `Failure`, with every error
    /// description joined by newlines.
    pub fn unwrap_success(self) -> T {
        match self {
            Validation::Success(value) => value,
            Validation::Failure(errors) => {
                let descriptions: Vec<&str> =
                    errors.iter().map(|e| e.description.as_str()).collect();
                crash(&descriptions.join("\n"))
            }
        }
    }

    /// Extracts the errors of a failure.
    ///
    /// # Panics
    ///
    /// Panics (programmer failure) on a `Success`.
    pub fn unwrap_failure(self) -> ValidationErrors {
        match self {
            Validation::Success(_) => {
                crash("unwrap_failure called on a successful validation")
            }
            Validation::Failure(errors) => errors,
        }
    }
}

/// Raises a programmer failure with the library's panic prefix.
pub fn crash(message: &str) -> ! {
    panic!("{FAILURE_PREFIX}\n{message}")
}

/// Raises a programmer failure with a lazily computed message when
/// `condition` is false.
pub fn assert<F>(condition: bool, message: F)
where
    F: FnOnce() -> String,
{
    if !condition {
        crash(&message());
    }
}
