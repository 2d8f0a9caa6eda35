//! Argument wrapper over the JSON tree editor.
//!
//! The surrounding application represents configurable function parameters
//! as "arguments": every node of a JSON default value is wrapped with
//! `enabled`/`interpolated` metadata, nested through a `default` field. The
//! wire shape is plain JSON:
//!
//! ```json
//! {"enabled": true, "interpolated": "", "default": {"a": {"enabled": ...}}}
//! ```
//!
//! [`from_default`] and [`to_default`] convert between a plain JSON value
//! and the wrapped tree and are exact structural inverses. Accessors
//! produced by the editor engine against the underlying default resolve
//! through the wrapped tree with [`get_argument`] / [`set_argument`], each
//! step passing through one `default` indirection.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use thiserror::Error;

pub use json_tree_edit::Step;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// The accessor did not resolve to an argument node. The tree is left
    /// unmodified.
    #[error("invalid accessor")]
    InvalidAccessor,
}

/// A JSON node wrapped with per-node metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Argument {
    pub enabled: bool,
    pub interpolated: String,
    pub default: ArgumentValue,
}

impl Argument {
    /// Wraps `default` with the metadata defaults (`enabled`, empty
    /// interpolation).
    pub fn new(default: ArgumentValue) -> Self {
        Argument {
            enabled: true,
            interpolated: String::new(),
            default,
        }
    }
}

/// The value side of an [`Argument`]: a JSON value whose array and object
/// children are themselves arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgumentValue {
    Null,
    Boolean(bool),
    Number(Number),
    String(String),
    Array(Vec<Argument>),
    Object(IndexMap<String, Argument>),
}

/// Wraps every node of a plain JSON value, recursively.
pub fn from_default(def: Value) -> Argument {
    let value = match def {
        Value::Null => ArgumentValue::Null,
        Value::Bool(b) => ArgumentValue::Boolean(b),
        Value::Number(n) => ArgumentValue::Number(n),
        Value::String(s) => ArgumentValue::String(s),
        Value::Array(arr) => ArgumentValue::Array(arr.into_iter().map(from_default).collect()),
        Value::Object(map) => ArgumentValue::Object(
            map.into_iter().map(|(k, v)| (k, from_default(v))).collect(),
        ),
    };
    Argument::new(value)
}

/// Strips the wrapper recursively, discarding `enabled`/`interpolated`.
pub fn to_default(arg: &Argument) -> Value {
    match &arg.default {
        ArgumentValue::Null => Value::Null,
        ArgumentValue::Boolean(b) => Value::Bool(*b),
        ArgumentValue::Number(n) => Value::Number(n.clone()),
        ArgumentValue::String(s) => Value::String(s.clone()),
        ArgumentValue::Array(arr) => Value::Array(arr.iter().map(to_default).collect()),
        ArgumentValue::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), to_default(v)))
                .collect::<Map<String, Value>>(),
        ),
    }
}

/// Walks `accessor` through nested `default`s.
///
/// Returns `None` if a step does not match the node kind (string key into
/// an array, index into an object, any step into a leaf) or does not exist.
/// Partial paths are an expected occurrence during incremental editing, so
/// this is a sentinel, not an error.
pub fn get_argument<'a>(arg: &'a Argument, accessor: &[Step]) -> Option<&'a Argument> {
    let mut current = arg;
    for step in accessor {
        current = match (step, &current.default) {
            (Step::Key(k), ArgumentValue::Object(map)) => map.get(k)?,
            (Step::Index(i), ArgumentValue::Array(arr)) => arr.get(*i)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Mutable twin of [`get_argument`].
pub fn get_argument_mut<'a>(arg: &'a mut Argument, accessor: &[Step]) -> Option<&'a mut Argument> {
    let mut current = arg;
    for step in accessor {
        current = match (step, &mut current.default) {
            (Step::Key(k), ArgumentValue::Object(map)) => map.get_mut(k)?,
            (Step::Index(i), ArgumentValue::Array(arr)) => arr.get_mut(*i)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Overwrites the argument at `accessor` with `value`.
///
/// # Errors
///
/// [`ArgumentError::InvalidAccessor`] if the path does not resolve; the
/// tree is left unmodified.
pub fn set_argument(
    arg: &mut Argument,
    accessor: &[Step],
    value: Argument,
) -> Result<(), ArgumentError> {
    let target = get_argument_mut(arg, accessor).ok_or(ArgumentError::InvalidAccessor)?;
    *target = value;
    Ok(())
}
