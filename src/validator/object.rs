//! Record validators: declared properties, mappings, key sets, exactness
//! and shapes.

use indexmap::IndexMap;

use crate::context::Context;
use crate::error::{ValidationError, ValidationErrors};
use crate::result::{assert, crash, Validation};
use crate::value::{Value, NIL};

use super::{reject, Kind, Tag, Validator};

/// Validates a record against a declared property set.
///
/// Every declared property is validated under a `(key, property name)`
/// context entry; missing properties read as nil and the property validator
/// decides. Keys on the value that are not declared are ignored. All
/// failures are collected. The default name lists the properties in
/// declaration order: `{ k: T, … }`.
///
/// # Example
///
/// ```rust
/// use shibboleth::{number, object, string, validate, Value};
/// use serde_json::json;
///
/// let point = object([("x", number()), ("y", number())]);
/// assert_eq!(point.name(), "{ x: number, y: number }");
///
/// let value = Value::from(json!({"x": 1, "y": 2, "extra": true}));
/// assert!(validate(&value, &point).is_success());
/// ```
pub fn object<K, I>(props: I) -> Validator
where
    K: Into<String>,
    I: IntoIterator<Item = (K, Validator)>,
{
    let props: IndexMap<String, Validator> =
        props.into_iter().map(|(k, v)| (k.into(), v)).collect();
    let name = object_name(&props);
    Validator::new(name, Kind::Object { props })
}

/// Validates every entry of a record: each key against `key` and each value
/// against `value`.
///
/// All failures are collected. The default name is `{ [key: K]: V }`.
pub fn mapping(key: Validator, value: Validator) -> Validator {
    let name = format!("{{ [key: {}]: {} }}", key.name(), value.name());
    Validator::new(name, Kind::Mapping { key, value })
}

/// Accepts strings that are declared property names of `object_type`.
///
/// `object_type` must be an [`object`]-kind validator. The default name is
/// `$Keys<O>`.
pub fn keys(object_type: &Validator) -> Validator {
    assert(object_type.tag() == Tag::Object, || {
        format!(
            "keys requires an object validator, got {}",
            object_type.name()
        )
    });
    Validator::new(
        format!("$Keys<{}>", object_type.name()),
        Kind::Keys {
            object: object_type.clone(),
        },
    )
}

/// Like [`object`], but every undeclared key on the value is an error.
///
/// Each extra key produces one error carrying the extra value, at a context
/// entry `(key, "nil")`. The default name is `$Exact<{ … }>`.
pub fn exact<K, I>(props: I) -> Validator
where
    K: Into<String>,
    I: IntoIterator<Item = (K, Validator)>,
{
    let props: IndexMap<String, Validator> =
        props.into_iter().map(|(k, v)| (k.into(), v)).collect();
    let name = format!("$Exact<{}>", object_name(&props));
    Validator::new(name, Kind::Exact { props })
}

/// Validates only the properties of `object_type` that are present on the
/// value, plus the [`exact`]-style undeclared-key check.
///
/// Missing properties are not errors. `object_type` must be an
/// [`object`]-kind validator. The default name is `$Shape<O>`.
pub fn shape(object_type: &Validator) -> Validator {
    assert(object_type.tag() == Tag::Object, || {
        format!(
            "shape requires an object validator, got {}",
            object_type.name()
        )
    });
    Validator::new(
        format!("$Shape<{}>", object_type.name()),
        Kind::Shape {
            object: object_type.clone(),
        },
    )
}

fn object_name(props: &IndexMap<String, Validator>) -> String {
    if props.is_empty() {
        return "{}".to_string();
    }
    let fields = props
        .iter()
        .map(|(key, prop)| format!("{key}: {}", prop.name()))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{ {fields} }}")
}

/// The declared properties of an object-kind validator. Construction of
/// `keys` and `shape` guarantees the kind.
fn object_props(object: &Validator) -> &IndexMap<String, Validator> {
    match &object.inner.kind {
        Kind::Object { props } => props,
        _ => crash("expected an object validator"),
    }
}

pub(super) fn validate_object<'a>(
    props: &IndexMap<String, Validator>,
    value: &'a Value,
    context: &Context,
) -> Validation<&'a Value> {
    let Some(map) = value.as_object() else {
        return reject(value, context);
    };

    let mut errors = Vec::new();
    collect_prop_errors(props, map, context, &mut errors);

    if errors.is_empty() {
        Validation::success(value)
    } else {
        Validation::Failure(ValidationErrors::from_vec(errors))
    }
}

pub(super) fn validate_mapping<'a>(
    key_type: &Validator,
    value_type: &Validator,
    value: &'a Value,
    context: &Context,
) -> Validation<&'a Value> {
    let Some(map) = value.as_object() else {
        return reject(value, context);
    };

    let mut errors = Vec::new();
    for (key, entry_value) in map {
        let key_value = Value::String(key.clone());
        let key_context = context.push(key, key_type.name());
        if let Validation::Failure(key_errors) = key_type.validate(&key_value, &key_context) {
            errors.extend(key_errors);
        }

        let value_context = context.push(key, value_type.name());
        if let Validation::Failure(value_errors) = value_type.validate(entry_value, &value_context)
        {
            errors.extend(value_errors);
        }
    }

    if errors.is_empty() {
        Validation::success(value)
    } else {
        Validation::Failure(ValidationErrors::from_vec(errors))
    }
}

pub(super) fn validate_keys<'a>(
    object: &Validator,
    value: &'a Value,
    context: &Context,
) -> Validation<&'a Value> {
    let Some(key) = value.as_str() else {
        return reject(value, context);
    };
    if object_props(object).contains_key(key) {
        Validation::success(value)
    } else {
        reject(value, context)
    }
}

pub(super) fn validate_exact<'a>(
    props: &IndexMap<String, Validator>,
    value: &'a Value,
    context: &Context,
) -> Validation<&'a Value> {
    let Some(map) = value.as_object() else {
        return reject(value, context);
    };

    let mut errors = Vec::new();
    collect_prop_errors(props, map, context, &mut errors);
    collect_extra_key_errors(props, map, context, &mut errors);

    if errors.is_empty() {
        Validation::success(value)
    } else {
        Validation::Failure(ValidationErrors::from_vec(errors))
    }
}

pub(super) fn validate_shape<'a>(
    object: &Validator,
    value: &'a Value,
    context: &Context,
) -> Validation<&'a Value> {
    let Some(map) = value.as_object() else {
        return reject(value, context);
    };

    let props = object_props(object);
    let mut errors = Vec::new();
    for (key, prop) in props {
        if let Some(prop_value) = map.get(key) {
            let prop_context = context.push(key, prop.name());
            if let Validation::Failure(prop_errors) = prop.validate(prop_value, &prop_context) {
                errors.extend(prop_errors);
            }
        }
    }
    collect_extra_key_errors(props, map, context, &mut errors);

    if errors.is_empty() {
        Validation::success(value)
    } else {
        Validation::Failure(ValidationErrors::from_vec(errors))
    }
}

fn collect_prop_errors(
    props: &IndexMap<String, Validator>,
    map: &IndexMap<String, Value>,
    context: &Context,
    errors: &mut Vec<ValidationError>,
) {
    for (key, prop) in props {
        let prop_value = map.get(key).unwrap_or(&NIL);
        let prop_context = context.push(key, prop.name());
        if let Validation::Failure(prop_errors) = prop.validate(prop_value, &prop_context) {
            errors.extend(prop_errors);
        }
    }
}

/// One error per undeclared key, recorded as if the key's value had been
/// required to be nil.
fn collect_extra_key_errors(
    props: &IndexMap<String, Validator>,
    map: &IndexMap<String, Value>,
    context: &Context,
    errors: &mut Vec<ValidationError>,
) {
    for (key, extra_value) in map {
        if !props.contains_key(key) {
            let extra_context = context.push(key, "nil");
            errors.push(ValidationError::new(extra_value.clone(), extra_context));
        }
    }
}
