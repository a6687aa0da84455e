//! Validation context: the path at which a sub-validation is happening.
//!
//! This module provides [`Context`] and [`ContextEntry`] for tracking where
//! inside a composite value the current validator is being applied. Every
//! descent into an element, property or branch extends the context with a
//! `(key, type name)` entry, so rejections can report an exact path.

use std::fmt::{self, Display};

use crate::validator::Validator;

/// A single step of a validation path: an access key paired with the name
/// of the validator applied at that position.
///
/// The root entry of every validation has an empty key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContextEntry {
    /// The access key (property name or stringified index; empty at the root).
    pub key: String,
    /// The name of the validator applied at this position.
    pub name: String,
}

impl ContextEntry {
    /// Creates a new entry from a key and a type name.
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
        }
    }

    /// Creates an entry naming the given validator.
    pub fn of(key: impl Into<String>, validator: &Validator) -> Self {
        Self::new(key, validator.name())
    }
}

impl Display for ContextEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.name)
    }
}

/// An ordered validation path.
///
/// Contexts are immutable from the perspective of sibling branches: every
/// descent produces a fresh extended context via [`Context::push`] rather
/// than mutating the parent's.
///
/// # Example
///
/// ```rust
/// use shibboleth::{number, Context};
///
/// let root = Context::root(&number());
/// let child = root.push("0", "number");
///
/// assert_eq!(root.to_string(), ": number");
/// assert_eq!(child.to_string(), ": number/0: number");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Context {
    entries: Vec<ContextEntry>,
}

impl Context {
    /// Creates the default top-level context for a validator: a single
    /// entry with an empty key and the validator's name.
    pub fn root(validator: &Validator) -> Self {
        Self {
            entries: vec![ContextEntry::of("", validator)],
        }
    }

    /// Creates a context from pre-built entries.
    pub fn from_entries(entries: Vec<ContextEntry>) -> Self {
        Self { entries }
    }

    /// Returns a new context with a `(key, name)` entry appended.
    ///
    /// This method does not modify the original context; it returns a new one.
    pub fn push(&self, key: impl Into<String>, name: impl Into<String>) -> Self {
        let mut entries = self.entries.clone();
        entries.push(ContextEntry::new(key, name));
        Self { entries }
    }

    /// Returns the number of entries in this context.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if this context has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the entries.
    pub fn entries(&self) -> impl Iterator<Item = &ContextEntry> {
        self.entries.iter()
    }

    /// Returns the last entry, or None if the context is empty.
    pub fn last(&self) -> Option<&ContextEntry> {
        self.entries.last()
    }

    /// Returns the context of the enclosing position (all entries except
    /// the last), or None if there is nothing to strip.
    pub fn parent(&self) -> Option<Self> {
        if self.entries.is_empty() {
            None
        } else {
            Some(Self {
                entries: self.entries[..self.entries.len() - 1].to_vec(),
            })
        }
    }
}

impl Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}
