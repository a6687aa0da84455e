//! The runtime value model validators are applied to.
//!
//! [`Value`] is the universe of validatable values: the JSON data categories
//! plus callables ([`Function`]) and nominal classes/instances ([`Class`]),
//! which the combinator set needs for `fun`, `instance_of` and `class_of`.

use std::fmt::{self, Display};
use std::sync::Arc;

use indexmap::IndexMap;

/// The nil value, shared so validators can hand out a reference for
/// missing object properties and out-of-range tuple indices.
pub(crate) static NIL: Value = Value::Null;

/// A nominal runtime class.
///
/// Classes form a single-inheritance chain and are compared by reference
/// identity, so two classes with the same name are still distinct.
///
/// # Example
///
/// ```rust
/// use shibboleth::Class;
///
/// let animal = Class::new("Animal");
/// let dog = Class::extends("Dog", &animal);
///
/// assert!(dog.inherits(&animal));
/// assert!(!animal.inherits(&dog));
/// assert_ne!(Class::new("Animal"), animal);
/// ```
#[derive(Debug, Clone)]
pub struct Class {
    def: Arc<ClassDef>,
}

#[derive(Debug)]
struct ClassDef {
    name: String,
    parent: Option<Class>,
}

impl Class {
    /// Creates a new root class with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            def: Arc::new(ClassDef {
                name: name.into(),
                parent: None,
            }),
        }
    }

    /// Creates a new class extending `parent`.
    pub fn extends(name: impl Into<String>, parent: &Class) -> Self {
        Self {
            def: Arc::new(ClassDef {
                name: name.into(),
                parent: Some(parent.clone()),
            }),
        }
    }

    /// Returns the class name.
    pub fn name(&self) -> &str {
        &self.def.name
    }

    /// Returns the direct superclass, if any.
    pub fn parent(&self) -> Option<&Class> {
        self.def.parent.as_ref()
    }

    /// Returns true if this class is `ancestor` or a subclass of it.
    pub fn inherits(&self, ancestor: &Class) -> bool {
        let mut current = Some(self);
        while let Some(class) = current {
            if class == ancestor {
                return true;
            }
            current = class.parent();
        }
        false
    }

    /// Creates a value stamped with this class, as a constructor would.
    pub fn instance(&self) -> Value {
        Value::Instance(self.clone())
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.def, &other.def)
    }
}

/// Callable metadata: an optional display name and an arity.
///
/// The library never invokes value-level callables; it only classifies them
/// (`fun`) and renders them in error descriptions.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    name: Option<String>,
    arity: usize,
}

impl Function {
    /// Creates a named callable.
    pub fn named(name: impl Into<String>, arity: usize) -> Self {
        Self {
            name: Some(name.into()),
            arity,
        }
    }

    /// Creates an anonymous callable.
    pub fn anonymous(arity: usize) -> Self {
        Self { name: None, arity }
    }

    /// The display name: the callable's own name, or `<function{arity}>`.
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("<function{}>", self.arity),
        }
    }
}

/// A runtime value of unknown shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The nil value (the source language's `undefined` and `null` collapse here).
    Null,
    /// A primitive boolean.
    Bool(bool),
    /// A primitive number. May hold NaN or infinities; the `number`
    /// irreducible rejects those.
    Number(f64),
    /// A primitive string.
    String(String),
    /// An ordered sequence.
    Array(Vec<Value>),
    /// A record with insertion-ordered keys.
    Object(IndexMap<String, Value>),
    /// A callable.
    Function(Function),
    /// A class (constructor). Classes are callable.
    Class(Class),
    /// An instance stamped with the class that constructed it.
    Instance(Class),
}

impl Value {
    /// Returns true for the nil value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true for callables (functions and classes).
    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Function(_) | Value::Class(_))
    }

    /// If the value is a string, returns it.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an array, returns its elements.
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// If the value is a record, returns its fields.
    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Renders the data portion of the value as JSON.
    ///
    /// Callables become JSON null in arrays and are skipped in objects;
    /// instances render as empty objects; non-finite numbers become null.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => number_to_json(*n),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Array(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Object(map) => serde_json::Value::Object(
                map.iter()
                    .filter(|(_, v)| !v.is_callable())
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
            Value::Function(_) | Value::Class(_) => serde_json::Value::Null,
            Value::Instance(_) => serde_json::Value::Object(serde_json::Map::new()),
        }
    }
}

/// Integral floats render without a fractional part, matching the source
/// notation (`1`, not `1.0`).
fn number_to_json(n: f64) -> serde_json::Value {
    if n.is_finite() && n.fract() == 0.0 && n >= i64::MIN as f64 && n <= i64::MAX as f64 {
        serde_json::Value::Number(serde_json::Number::from(n as i64))
    } else {
        serde_json::Number::from_f64(n)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null)
    }
}

impl Display for Value {
    /// The canonical rendering used in error descriptions: callables show
    /// their display name, everything else shows as JSON.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Function(func) => write!(f, "{}", func.display_name()),
            Value::Class(class) => write!(f, "{}", class.name()),
            _ => write!(f, "{}", self.to_json()),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(value: &serde_json::Value) -> Self {
        Value::from(value.clone())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Function> for Value {
    fn from(func: Function) -> Self {
        Value::Function(func)
    }
}

impl From<Class> for Value {
    fn from(class: Class) -> Self {
        Value::Class(class)
    }
}
