//! Change records and accessor paths.
//!
//! Every mutation the engine performs is reported as a [`Change`]: a closed
//! set of mutation descriptors, each carrying the accessor path from the
//! subtree root of the `edit` call down to the node the change directly
//! applies to. Enclosing recursive frames prepend their local step on the
//! way back up ("bubbling"), so the accessor length always equals the
//! nesting depth between the receiving call site and the mutated node.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One step of an accessor path: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Step {
    Key(String),
    Index(usize),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Key(k) => write!(f, "{k}"),
            Step::Index(i) => write!(f, "{i}"),
        }
    }
}

impl From<&str> for Step {
    fn from(key: &str) -> Self {
        Step::Key(key.to_string())
    }
}

impl From<String> for Step {
    fn from(key: String) -> Self {
        Step::Key(key)
    }
}

impl From<usize> for Step {
    fn from(index: usize) -> Self {
        Step::Index(index)
    }
}

/// A path of object keys and array indices locating a node relative to some
/// ancestor.
pub type Accessor = Vec<Step>;

/// A mutation descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Change {
    /// Insert a new entry (object) or element (array).
    ///
    /// `key` is meaningful only when the target is an object; `None` asks
    /// the engine to generate one. For arrays the element is appended.
    Add {
        accessor: Accessor,
        #[serde(skip_serializing_if = "Option::is_none")]
        key: Option<String>,
        value: Value,
    },
    /// Delete the entry at `key` (object) or the element at that index
    /// (array).
    Remove { accessor: Accessor, key: Step },
    /// Replace the value of a scalar leaf (string/number/boolean).
    Edit { accessor: Accessor, value: Value },
    /// Move the array element at `from` so it lands at index `to`
    /// (single-element move, not a swap).
    Reorder {
        accessor: Accessor,
        from: usize,
        to: usize,
    },
    /// Rename an object key in place, preserving its value and its position
    /// in the key order.
    Key {
        accessor: Accessor,
        from: String,
        to: String,
    },
}

impl Change {
    /// The accessor path carried by this change.
    pub fn accessor(&self) -> &[Step] {
        match self {
            Change::Add { accessor, .. }
            | Change::Remove { accessor, .. }
            | Change::Edit { accessor, .. }
            | Change::Reorder { accessor, .. }
            | Change::Key { accessor, .. } => accessor,
        }
    }

    pub(crate) fn accessor_mut(&mut self) -> &mut Accessor {
        match self {
            Change::Add { accessor, .. }
            | Change::Remove { accessor, .. }
            | Change::Edit { accessor, .. }
            | Change::Reorder { accessor, .. }
            | Change::Key { accessor, .. } => accessor,
        }
    }

    /// Prepends `step` to the accessor. Called by each enclosing recursive
    /// frame as the change bubbles up.
    pub fn prepend(mut self, step: Step) -> Self {
        self.accessor_mut().insert(0, step);
        self
    }

    /// Short operation name, used in error messages.
    pub fn op_name(&self) -> &'static str {
        match self {
            Change::Add { .. } => "add",
            Change::Remove { .. } => "remove",
            Change::Edit { .. } => "edit",
            Change::Reorder { .. } => "reorder",
            Change::Key { .. } => "key",
        }
    }
}
