//! Schema-less recursive JSON tree editor.
//!
//! The caller owns a canonical JSON value (a [`serde_json::Value`] with
//! insertion-ordered maps) and, for each object node it cares about, an
//! explicit key order. Every user gesture becomes a [`Change`] addressed by
//! an accessor path; [`edit`] applies it and returns the new value, the
//! bubbled change, and the new key order, which the caller swaps in
//! wholesale. The core holds no state of its own.
//!
//! # Example
//!
//! ```
//! use json_tree_edit::{edit, Change, Step, Template};
//! use serde_json::json;
//!
//! // Start with an empty object and an empty key order.
//! let doc = json!({});
//! let order: Vec<String> = vec![];
//!
//! // Add a string entry with a generated key.
//! let out = edit(
//!     &doc,
//!     Change::Add { accessor: vec![], key: None, value: Template::String.value() },
//!     Some(&order),
//! )
//! .unwrap();
//! assert_eq!(out.value, json!({"Key": "Value"}));
//! assert_eq!(out.key_order, Some(vec!["Key".to_string()]));
//!
//! // Rename it; the key keeps its position in the order.
//! let out = edit(
//!     &out.value,
//!     Change::Key { accessor: vec![], from: "Key".into(), to: "Name".into() },
//!     out.key_order.as_deref(),
//! )
//! .unwrap();
//! assert_eq!(out.value, json!({"Name": "Value"}));
//! ```

pub mod change;
pub mod engine;
pub mod key_order;
pub mod render;
pub mod value;

pub use change::{Accessor, Change, Step};
pub use engine::{edit, EditError, Edited};
pub use key_order::{derive_child_key_orders, derive_key_order, generate_key, KeyOrder};
pub use render::{walk, RenderHooks};
pub use value::{is_scalar, type_name, Template};

/// Returns the crate version at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
