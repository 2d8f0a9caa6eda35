//! JSON value model helpers.
//!
//! The editor works directly on [`serde_json::Value`] (with insertion-ordered
//! maps); this module adds the small amount of vocabulary the engine and the
//! presentation layer share: a stable type-name function, the scalar
//! predicate, and the catalog of default "add" payloads.

use serde_json::{json, Value};

/// Returns the user-facing type name of a JSON value.
///
/// One of `"null"`, `"array"`, `"object"`, `"string"`, `"number"`,
/// `"boolean"`; always agrees with the `Value::is_*` predicates.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Returns `true` for the editable leaf kinds: string, number, boolean.
///
/// `null` is not a scalar here; it renders read-only and accepts no
/// operations at all.
pub fn is_scalar(value: &Value) -> bool {
    matches!(value, Value::String(_) | Value::Number(_) | Value::Bool(_))
}

/// The fixed catalog of default values offered when adding a new
/// element/entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    String,
    Number,
    Boolean,
    Array,
    Object,
    Null,
}

impl Template {
    /// All templates, in the order a host menu would present them.
    pub const ALL: [Template; 6] = [
        Template::String,
        Template::Number,
        Template::Boolean,
        Template::Array,
        Template::Object,
        Template::Null,
    ];

    /// The default payload for this template.
    pub fn value(&self) -> Value {
        match self {
            Template::String => json!("Value"),
            Template::Number => json!(0),
            Template::Boolean => json!(false),
            Template::Array => json!([]),
            Template::Object => json!({}),
            Template::Null => Value::Null,
        }
    }

    /// Menu label for this template.
    pub fn label(&self) -> &'static str {
        match self {
            Template::String => "String",
            Template::Number => "Number",
            Template::Boolean => "Boolean",
            Template::Array => "Array",
            Template::Object => "Object",
            Template::Null => "Null",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_name_matches_predicates() {
        let cases = [
            (Value::Null, "null"),
            (json!(true), "boolean"),
            (json!(1.5), "number"),
            (json!("s"), "string"),
            (json!([1]), "array"),
            (json!({"a": 1}), "object"),
        ];
        for (value, name) in cases {
            assert_eq!(type_name(&value), name);
        }
    }

    #[test]
    fn test_object_array_predicates_exclusive() {
        let obj = json!({"a": 1});
        let arr = json!([1]);
        assert!(obj.is_object() && !obj.is_array());
        assert!(arr.is_array() && !arr.is_object());
    }

    #[test]
    fn test_is_scalar() {
        assert!(is_scalar(&json!("s")));
        assert!(is_scalar(&json!(0)));
        assert!(is_scalar(&json!(false)));
        assert!(!is_scalar(&Value::Null));
        assert!(!is_scalar(&json!([])));
        assert!(!is_scalar(&json!({})));
    }

    #[test]
    fn test_template_catalog() {
        assert_eq!(Template::String.value(), json!("Value"));
        assert_eq!(Template::Number.value(), json!(0));
        assert_eq!(Template::Boolean.value(), json!(false));
        assert_eq!(Template::Array.value(), json!([]));
        assert_eq!(Template::Object.value(), json!({}));
        assert_eq!(Template::Null.value(), Value::Null);
        assert_eq!(Template::ALL.len(), 6);
    }

    #[test]
    fn test_template_labels_agree_with_type_names() {
        for template in Template::ALL {
            assert_eq!(template.label().to_lowercase(), type_name(&template.value()));
        }
    }
}
