//! Error types for validation failures.
//!
//! This module provides [`ValidationError`] for a single rejection and
//! [`ValidationErrors`] for the non-empty collection a failed validation
//! carries.

mod validation_error;

pub use validation_error::{ValidationError, ValidationErrors};
