//! Validator definitions and constructors.
//!
//! A [`Validator`] pairs a display name with a closed-set kind and a pure
//! `validate` function. Validators are built once, are immutable afterwards,
//! and are cheap to clone and share: parents hold reference-style links to
//! children, so the same child can appear under many parents.
//!
//! # Example
//!
//! ```rust
//! use shibboleth::{array, number, object, string, validate, Value};
//! use serde_json::json;
//!
//! let user = object([
//!     ("name", string()),
//!     ("scores", array(number())),
//! ]);
//!
//! let value = Value::from(json!({"name": "Ada", "scores": [1, 2, 3]}));
//! assert!(validate(&value, &user).is_success());
//! ```

mod array;
mod combinators;
mod irreducible;
mod literal;
mod nominal;
mod object;
mod recursion;
mod refinement;

pub use array::{array, tuple};
pub use combinators::{intersection, maybe, union};
pub use irreducible::{any, arr, boolean, fun, nil, number, obj, string};
pub use literal::literal;
pub use nominal::{class_of, instance_of};
pub use object::{exact, keys, mapping, object, shape};
pub use recursion::recursion;
pub use refinement::{refinement, refinement_named};

use std::fmt;
use std::sync::{Arc, OnceLock, Weak};

use indexmap::IndexMap;

use crate::context::Context;
use crate::error::{ValidationError, ValidationErrors};
use crate::result::Validation;
use crate::value::{Class, Value};

/// The closed set of validator kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// An atom with no child validators.
    Irreducible,
    /// A single primitive value.
    Literal,
    /// A nominal instance check.
    InstanceOf,
    /// A base validator narrowed by a predicate.
    Refinement,
    /// Homogeneous element-wise sequence validation.
    Array,
    /// First-match alternation.
    Union,
    /// Positional sequence validation.
    Tuple,
    /// Conjunction of validators.
    Intersection,
    /// Nil or the inner validator.
    Maybe,
    /// Key/value validation over every record entry.
    Mapping,
    /// Declared-property record validation.
    Object,
    /// Membership in an object validator's property names.
    Keys,
    /// Record validation that rejects undeclared keys.
    Exact,
    /// Present-properties-only record validation with the exact key check.
    Shape,
    /// Late-bound self reference inside a recursive validator.
    Recursion,
}

/// A first-class runtime type descriptor.
///
/// Cloning a validator clones a shared handle, not the definition.
#[derive(Clone)]
pub struct Validator {
    pub(crate) inner: Arc<Inner>,
}

pub(crate) struct Inner {
    pub(crate) name: String,
    pub(crate) kind: Kind,
}

/// Predicate storage for refinements.
pub(crate) type Predicate = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

#[derive(Clone)]
pub(crate) enum Kind {
    Irreducible { check: fn(&Value) -> bool },
    Literal { expected: Value },
    InstanceOf { class: Class },
    Refinement { base: Validator, predicate: Predicate },
    Array { element: Validator },
    Union { members: Vec<Validator> },
    Tuple { members: Vec<Validator> },
    Intersection { members: Vec<Validator> },
    Maybe { inner: Validator },
    Mapping { key: Validator, value: Validator },
    Object { props: IndexMap<String, Validator> },
    Keys { object: Validator },
    Exact { props: IndexMap<String, Validator> },
    Shape { object: Validator },
    Recursion { target: Arc<OnceLock<Weak<Inner>>> },
}

impl Validator {
    pub(crate) fn new(name: impl Into<String>, kind: Kind) -> Self {
        Self {
            inner: Arc::new(Inner {
                name: name.into(),
                kind,
            }),
        }
    }

    pub(crate) fn from_inner(inner: Arc<Inner>) -> Self {
        Self { inner }
    }

    /// Returns the validator's display name, as used in context entries and
    /// error descriptions.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Returns the kind discriminant.
    pub fn tag(&self) -> Tag {
        match &self.inner.kind {
            Kind::Irreducible { .. } => Tag::Irreducible,
            Kind::Literal { .. } => Tag::Literal,
            Kind::InstanceOf { .. } => Tag::InstanceOf,
            Kind::Refinement { .. } => Tag::Refinement,
            Kind::Array { .. } => Tag::Array,
            Kind::Union { .. } => Tag::Union,
            Kind::Tuple { .. } => Tag::Tuple,
            Kind::Intersection { .. } => Tag::Intersection,
            Kind::Maybe { .. } => Tag::Maybe,
            Kind::Mapping { .. } => Tag::Mapping,
            Kind::Object { .. } => Tag::Object,
            Kind::Keys { .. } => Tag::Keys,
            Kind::Exact { .. } => Tag::Exact,
            Kind::Shape { .. } => Tag::Shape,
            Kind::Recursion { .. } => Tag::Recursion,
        }
    }

    /// Returns a validator with the same semantics under a new name.
    ///
    /// The receiver is untouched; the renamed validator is a fresh handle.
    /// Renaming the result of [`recursion`] after construction detaches the
    /// recursive self reference from the renamed copy, so recursive
    /// validators should be named through `recursion` itself.
    pub fn named(&self, name: impl Into<String>) -> Validator {
        Validator::new(name, self.inner.kind.clone())
    }

    /// Applies this validator to `value` at `context`.
    ///
    /// On acceptance the returned success carries the *same reference* that
    /// was passed in, so callers can alias freely. On rejection the errors
    /// locate every fault by context path.
    pub fn validate<'a>(&self, value: &'a Value, context: &Context) -> Validation<&'a Value> {
        match &self.inner.kind {
            Kind::Irreducible { check } => irreducible::validate_irreducible(*check, value, context),
            Kind::Literal { expected } => literal::validate_literal(expected, value, context),
            Kind::InstanceOf { class } => nominal::validate_instance_of(class, value, context),
            Kind::Refinement { base, predicate } => {
                refinement::validate_refinement(base, predicate, value, context)
            }
            Kind::Array { element } => array::validate_array(element, value, context),
            Kind::Union { members } => combinators::validate_union(members, value, context),
            Kind::Tuple { members } => array::validate_tuple(members, value, context),
            Kind::Intersection { members } => {
                combinators::validate_intersection(members, value, context)
            }
            Kind::Maybe { inner } => combinators::validate_maybe(inner, value, context),
            Kind::Mapping { key, value: entry } => {
                object::validate_mapping(key, entry, value, context)
            }
            Kind::Object { props } => object::validate_object(props, value, context),
            Kind::Keys { object } => object::validate_keys(object, value, context),
            Kind::Exact { props } => object::validate_exact(props, value, context),
            Kind::Shape { object } => object::validate_shape(object, value, context),
            Kind::Recursion { target } => recursion::validate_recursion(target, value, context),
        }
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("name", &self.name())
            .field("tag", &self.tag())
            .finish()
    }
}

/// Builds the single-error rejection every validator uses.
pub(crate) fn reject<T>(value: &Value, context: &Context) -> Validation<T> {
    Validation::failure(ValidationErrors::single(ValidationError::new(
        value.clone(),
        context.clone(),
    )))
}

/// Joins validator names for default union/tuple/intersection names.
pub(crate) fn joined_names(members: &[Validator], separator: &str) -> String {
    members
        .iter()
        .map(Validator::name)
        .collect::<Vec<_>>()
        .join(separator)
}

// Validators are shared across threads; fail the build if that breaks.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Validator>();
    assert_sync::<Validator>();
};
