//! Key-order derivation and maintenance.
//!
//! Object key order is user-facing state: after a rename the renamed entry
//! must keep its position, which no map's native iteration order can be
//! trusted to guarantee. The order therefore lives outside the JSON value,
//! as a plain `Vec<String>` per object node, derived here and kept in sync
//! by the engine.
//!
//! Invariant: a node's key order is always a permutation of exactly that
//! node's key set. It must be regenerated (via [`derive_key_order`]) whenever
//! the key set changes by any means other than a tracked edit.

use serde_json::Value;

/// Ordered keys of one object node.
pub type KeyOrder = Vec<String>;

/// Derives the key order of an object node from its current iteration order.
///
/// Returns `None` for every non-object node. Used at initialization and
/// whenever the owner swaps in an externally produced value.
pub fn derive_key_order(value: &Value) -> Option<KeyOrder> {
    match value {
        Value::Object(map) => Some(map.keys().cloned().collect()),
        _ => None,
    }
}

/// Derives the key orders of a node's immediate children.
///
/// For an object or array node, returns one slot per child (indexed by array
/// position, or by key-order index for objects), each being that child's own
/// key order if it is itself an object, else `None`. Returns `None` for
/// scalar and null nodes.
///
/// Must be recomputed whenever the parent's value reference changes, since
/// children may have been added, removed, or replaced.
pub fn derive_child_key_orders(value: &Value) -> Option<Vec<Option<KeyOrder>>> {
    match value {
        Value::Object(map) => Some(map.values().map(derive_key_order).collect()),
        Value::Array(arr) => Some(arr.iter().map(derive_key_order).collect()),
        _ => None,
    }
}

/// Replaces the label `from` with `to`, in place. Position preserved.
pub fn rename_key(order: &[String], from: &str, to: &str) -> KeyOrder {
    order
        .iter()
        .map(|k| if k == from { to.to_string() } else { k.clone() })
        .collect()
}

/// Appends `key` at the end of the order.
pub fn append_key(order: &[String], key: &str) -> KeyOrder {
    let mut out = order.to_vec();
    out.push(key.to_string());
    out
}

/// Filters `key` out, preserving the relative order of the rest.
pub fn remove_key(order: &[String], key: &str) -> KeyOrder {
    order.iter().filter(|k| *k != key).cloned().collect()
}

/// Generates a key not present in `existing`.
///
/// Default policy: `"Key"`, then `"Key 1"`, `"Key 2"`, ... until unused.
/// Collision-free by construction.
pub fn generate_key(existing: &[String]) -> String {
    const BASE: &str = "Key";
    if !existing.iter().any(|k| k == BASE) {
        return BASE.to_string();
    }
    let mut i = 1usize;
    loop {
        let candidate = format!("{BASE} {i}");
        if !existing.iter().any(|k| k == &candidate) {
            return candidate;
        }
        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_derive_key_order() {
        let obj = json!({"b": 1, "a": 2});
        assert_eq!(derive_key_order(&obj), Some(vec!["b".to_string(), "a".to_string()]));
        assert_eq!(derive_key_order(&json!([1, 2])), None);
        assert_eq!(derive_key_order(&json!("s")), None);
        assert_eq!(derive_key_order(&Value::Null), None);
    }

    #[test]
    fn test_derive_child_key_orders_object() {
        let obj = json!({"x": {"k": 1}, "y": [1], "z": 3});
        let orders = derive_child_key_orders(&obj).unwrap();
        assert_eq!(orders, vec![Some(vec!["k".to_string()]), None, None]);
    }

    #[test]
    fn test_derive_child_key_orders_array() {
        let arr = json!([{"a": 1, "b": 2}, "s", null]);
        let orders = derive_child_key_orders(&arr).unwrap();
        assert_eq!(
            orders,
            vec![Some(vec!["a".to_string(), "b".to_string()]), None, None]
        );
    }

    #[test]
    fn test_derive_child_key_orders_scalar() {
        assert_eq!(derive_child_key_orders(&json!(1)), None);
        assert_eq!(derive_child_key_orders(&Value::Null), None);
    }

    #[test]
    fn test_rename_preserves_position() {
        let order = vec!["a".to_string(), "k1".to_string(), "b".to_string()];
        assert_eq!(rename_key(&order, "k1", "k2"), vec!["a", "k2", "b"]);
    }

    #[test]
    fn test_append_and_remove() {
        let order = vec!["a".to_string(), "b".to_string()];
        assert_eq!(append_key(&order, "c"), vec!["a", "b", "c"]);
        assert_eq!(remove_key(&order, "a"), vec!["b"]);
        assert_eq!(remove_key(&order, "missing"), vec!["a", "b"]);
    }

    #[test]
    fn test_generate_key() {
        assert_eq!(generate_key(&[]), "Key");
        assert_eq!(generate_key(&["Other".to_string()]), "Key");
        assert_eq!(generate_key(&["Key".to_string()]), "Key 1");
        assert_eq!(
            generate_key(&["Key".to_string(), "Key 1".to_string()]),
            "Key 2"
        );
        // Gaps are filled with the first unused probe.
        assert_eq!(
            generate_key(&["Key".to_string(), "Key 2".to_string()]),
            "Key 1"
        );
    }
}
