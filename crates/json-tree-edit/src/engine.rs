//! The tree editor engine.
//!
//! [`edit`] is a pure function: given a JSON value, a [`Change`] whose
//! accessor addresses a node inside it, and the key order of the root node
//! (for objects), it produces the new value, the bubbled change, and the new
//! key order. The caller owns the canonical value and key order and replaces
//! both wholesale with the returned triple; untouched siblings are carried
//! over structurally unchanged (copy-on-write per touched level).
//!
//! Descent consumes the accessor one step at a time; the local operation
//! applies once the accessor is empty, and each frame prepends its step back
//! onto the bubbled change on the way up, so the returned accessor reads
//! outermost-first.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::change::{Change, Step};
use crate::key_order::{
    append_key, derive_key_order, generate_key, remove_key, rename_key, KeyOrder,
};
use crate::value::{is_scalar, type_name};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditError {
    /// The operation is not legal for the target node's kind.
    #[error("invalid operation '{op}' on {kind} node")]
    InvalidOperation { op: &'static str, kind: &'static str },
    /// No operation is legal on a null node.
    #[error("unsupported operation on null")]
    NullTarget,
    /// An add or rename would collide with an existing key.
    #[error("key collision: '{0}'")]
    KeyCollision(String),
    /// A step of the accessor did not resolve.
    #[error("path step '{0}' not found")]
    PathNotFound(Step),
    /// An array index was outside the array's bounds.
    #[error("index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result of one [`edit`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct Edited {
    /// The new value of the node `edit` was invoked on.
    pub value: Value,
    /// The change, with the accessor extended by every frame it bubbled
    /// through. For a generated-key `Add` the `key` field is filled in.
    pub change: Change,
    /// The new key order of the node `edit` was invoked on; `Some` only for
    /// object nodes.
    pub key_order: Option<KeyOrder>,
}

/// Applies `change` to `value` and returns the new `(value, change,
/// key_order)` triple.
///
/// `key_order` is the explicit key order of `value` when it is an object
/// node; pass `None` to fall back to the value's current iteration order.
/// Key orders of nested objects are derived lazily during descent; callers
/// caching per-child orders recompute them with
/// [`crate::key_order::derive_child_key_orders`] after every edit.
///
/// # Errors
///
/// - [`EditError::InvalidOperation`] for an operation not legal on the
///   target node's kind (edit on a container, reorder on an object, ...).
/// - [`EditError::NullTarget`] for any operation targeting a null node.
/// - [`EditError::KeyCollision`] when an `Add` supplies an existing key or a
///   `Key` rename targets an existing key.
/// - [`EditError::PathNotFound`] when a step of the accessor does not
///   resolve (missing key, bad index, or a step into a leaf).
/// - [`EditError::IndexOutOfRange`] for remove/reorder indices outside the
///   array.
pub fn edit(value: &Value, change: Change, key_order: Option<&[String]>) -> Result<Edited, EditError> {
    if change.accessor().is_empty() {
        return apply_local(value, change, key_order);
    }

    let mut change = change;
    let step = change.accessor_mut().remove(0);
    match (&step, value) {
        (Step::Key(k), Value::Object(map)) => {
            let child = map
                .get(k)
                .ok_or_else(|| EditError::PathNotFound(step.clone()))?;
            let child_order = derive_key_order(child);
            let edited = edit(child, change, child_order.as_deref())?;
            let mut map = map.clone();
            map.insert(k.clone(), edited.value);
            Ok(Edited {
                value: Value::Object(map),
                change: edited.change.prepend(step),
                key_order: object_order(key_order, value),
            })
        }
        (Step::Index(i), Value::Array(arr)) => {
            let child = arr
                .get(*i)
                .ok_or_else(|| EditError::PathNotFound(step.clone()))?;
            let child_order = derive_key_order(child);
            let edited = edit(child, change, child_order.as_deref())?;
            let mut arr = arr.clone();
            arr[*i] = edited.value;
            Ok(Edited {
                value: Value::Array(arr),
                change: edited.change.prepend(step),
                key_order: None,
            })
        }
        _ => Err(EditError::PathNotFound(step)),
    }
}

/// The key order to use for an object node: the caller-supplied one, or the
/// value's current iteration order as a fallback.
fn object_order(key_order: Option<&[String]>, value: &Value) -> Option<KeyOrder> {
    match key_order {
        Some(order) => Some(order.to_vec()),
        None => derive_key_order(value),
    }
}

fn apply_local(
    value: &Value,
    change: Change,
    key_order: Option<&[String]>,
) -> Result<Edited, EditError> {
    match value {
        Value::Null => Err(EditError::NullTarget),
        Value::String(_) | Value::Number(_) | Value::Bool(_) => apply_scalar(value, change),
        Value::Object(map) => {
            let order = object_order(key_order, value).unwrap_or_default();
            apply_object(map, change, &order)
        }
        Value::Array(arr) => apply_array(arr, change),
    }
}

fn apply_scalar(value: &Value, change: Change) -> Result<Edited, EditError> {
    match change {
        Change::Edit { accessor, value: new } => {
            if !is_scalar(&new) {
                return Err(EditError::InvalidOperation {
                    op: "edit",
                    kind: type_name(&new),
                });
            }
            Ok(Edited {
                value: new.clone(),
                change: Change::Edit {
                    accessor,
                    value: new,
                },
                key_order: None,
            })
        }
        other => Err(EditError::InvalidOperation {
            op: other.op_name(),
            kind: type_name(value),
        }),
    }
}

fn apply_object(
    map: &Map<String, Value>,
    change: Change,
    order: &[String],
) -> Result<Edited, EditError> {
    match change {
        Change::Add {
            accessor,
            key,
            value,
        } => {
            let key = match key {
                Some(k) => {
                    if map.contains_key(&k) {
                        return Err(EditError::KeyCollision(k));
                    }
                    k
                }
                None => generate_key(order),
            };
            let mut map = map.clone();
            map.insert(key.clone(), value.clone());
            Ok(Edited {
                value: Value::Object(map),
                key_order: Some(append_key(order, &key)),
                change: Change::Add {
                    accessor,
                    key: Some(key),
                    value,
                },
            })
        }
        Change::Remove { accessor, key } => {
            let k = match &key {
                Step::Key(k) => k.clone(),
                Step::Index(_) => {
                    return Err(EditError::InvalidOperation {
                        op: "remove",
                        kind: "object",
                    })
                }
            };
            let mut map = map.clone();
            if map.shift_remove(&k).is_none() {
                return Err(EditError::PathNotFound(key));
            }
            Ok(Edited {
                value: Value::Object(map),
                key_order: Some(remove_key(order, &k)),
                change: Change::Remove { accessor, key },
            })
        }
        Change::Key { accessor, from, to } => {
            if !map.contains_key(&from) {
                return Err(EditError::PathNotFound(Step::Key(from)));
            }
            if map.contains_key(&to) {
                return Err(EditError::KeyCollision(to));
            }
            // Rebuild entry by entry so the renamed key keeps its slot.
            let mut renamed = Map::new();
            for (k, v) in map {
                if k == &from {
                    renamed.insert(to.clone(), v.clone());
                } else {
                    renamed.insert(k.clone(), v.clone());
                }
            }
            Ok(Edited {
                value: Value::Object(renamed),
                key_order: Some(rename_key(order, &from, &to)),
                change: Change::Key { accessor, from, to },
            })
        }
        other => Err(EditError::InvalidOperation {
            op: other.op_name(),
            kind: "object",
        }),
    }
}

fn apply_array(arr: &[Value], change: Change) -> Result<Edited, EditError> {
    match change {
        Change::Add {
            accessor,
            key: None,
            value,
        } => {
            let mut arr = arr.to_vec();
            arr.push(value.clone());
            Ok(Edited {
                value: Value::Array(arr),
                change: Change::Add {
                    accessor,
                    key: None,
                    value,
                },
                key_order: None,
            })
        }
        Change::Add { key: Some(_), .. } => Err(EditError::InvalidOperation {
            op: "add with key",
            kind: "array",
        }),
        Change::Remove { accessor, key } => {
            let i = match &key {
                Step::Index(i) => *i,
                Step::Key(_) => {
                    return Err(EditError::InvalidOperation {
                        op: "remove",
                        kind: "array",
                    })
                }
            };
            if i >= arr.len() {
                return Err(EditError::IndexOutOfRange {
                    index: i,
                    len: arr.len(),
                });
            }
            let mut arr = arr.to_vec();
            arr.remove(i);
            Ok(Edited {
                value: Value::Array(arr),
                change: Change::Remove { accessor, key },
                key_order: None,
            })
        }
        Change::Reorder { accessor, from, to } => {
            let len = arr.len();
            if from >= len {
                return Err(EditError::IndexOutOfRange { index: from, len });
            }
            if to >= len {
                return Err(EditError::IndexOutOfRange { index: to, len });
            }
            // Single-element move: splice out, reinsert. Not a swap.
            let mut arr = arr.to_vec();
            let moved = arr.remove(from);
            arr.insert(to, moved);
            Ok(Edited {
                value: Value::Array(arr),
                change: Change::Reorder { accessor, from, to },
                key_order: None,
            })
        }
        other => Err(EditError::InvalidOperation {
            op: other.op_name(),
            kind: "array",
        }),
    }
}
