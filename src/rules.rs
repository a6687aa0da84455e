//! Prebuilt refinements for common trust-boundary checks.
//!
//! These are ordinary [`refinement`](crate::refinement) validators over the
//! irreducibles, named per the `(T | predicate)` convention, so they compose
//! with the rest of the algebra like any other validator.

use regex::Regex;

use crate::validator::{number, refinement_named, string, Validator};
use crate::value::Value;

/// A string of at least `min` characters: `(string | minLength)`.
pub fn min_length(min: usize) -> Validator {
    refinement_named(string(), "minLength", move |value| {
        value.as_str().is_some_and(|s| s.chars().count() >= min)
    })
}

/// A string of at most `max` characters: `(string | maxLength)`.
pub fn max_length(max: usize) -> Validator {
    refinement_named(string(), "maxLength", move |value| {
        value.as_str().is_some_and(|s| s.chars().count() <= max)
    })
}

/// A string matching the given regex: `(string | pattern)`.
///
/// Returns an error if the pattern is not a valid regex.
///
/// # Example
///
/// ```rust
/// use shibboleth::{is_valid, rules, Value};
///
/// let digits = rules::pattern(r"^\d+$").unwrap();
/// assert!(is_valid(&Value::from("123"), &digits));
/// assert!(!is_valid(&Value::from("12a"), &digits));
/// ```
pub fn pattern(pattern: &str) -> Result<Validator, regex::Error> {
    let regex = Regex::new(pattern)?;
    Ok(refinement_named(string(), "pattern", move |value| {
        value.as_str().is_some_and(|s| regex.is_match(s))
    }))
}

/// A number with no fractional part: `(number | integer)`.
pub fn integer() -> Validator {
    refinement_named(number(), "integer", |value| match value {
        Value::Number(n) => n.fract() == 0.0,
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::is_valid;

    #[test]
    fn test_rule_names_follow_the_refinement_convention() {
        assert_eq!(min_length(2).name(), "(string | minLength)");
        assert_eq!(max_length(2).name(), "(string | maxLength)");
        assert_eq!(integer().name(), "(number | integer)");
        assert_eq!(pattern(r"\d").unwrap().name(), "(string | pattern)");
    }

    #[test]
    fn test_length_rules_count_characters() {
        // 3 characters, 9 bytes
        let value = Value::from("日本語");
        assert!(is_valid(&value, &min_length(3)));
        assert!(is_valid(&value, &max_length(3)));
        assert!(!is_valid(&value, &min_length(4)));
    }

    #[test]
    fn test_integer_rejects_fractions_and_non_numbers() {
        assert!(is_valid(&Value::from(4), &integer()));
        assert!(!is_valid(&Value::from(4.5), &integer()));
        assert!(!is_valid(&Value::from("4"), &integer()));
    }

    #[test]
    fn test_pattern_rejects_invalid_regex() {
        assert!(pattern(r"[unclosed").is_err());
    }
}
