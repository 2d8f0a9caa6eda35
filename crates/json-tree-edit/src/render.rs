//! Presentation binding.
//!
//! The core never renders anything itself; a host UI maps each node kind to
//! a control and turns gestures into [`Change`](crate::Change)s. What the
//! core does provide is the traversal: [`walk`] visits every node
//! depth-first, in explicit key order for objects and index order for
//! arrays, and invokes the [`RenderHooks`] at fixed points so a host can
//! annotate nodes (an "interpolate" toggle per argument, say) without
//! touching the engine.

use serde_json::Value;

use crate::change::Step;
use crate::key_order::derive_key_order;

/// Hook points a host may implement. All methods default to no-ops; each
/// receives the accessor path to the node in question.
pub trait RenderHooks {
    /// Called once per node, before anything else, with its value.
    fn node(&mut self, _path: &[Step], _value: &Value) {}

    /// Called on a container node before its children are visited.
    fn before_children(&mut self, _path: &[Step]) {}

    /// Called on a container node after its children are visited.
    fn after_children(&mut self, _path: &[Step]) {}

    /// Called after the remove control that follows each child entry.
    fn after_remove_control(&mut self, _path: &[Step]) {}
}

/// Depth-first traversal of `value`, invoking `hooks` at each node.
///
/// `key_order` is the explicit order of the root node's keys when it is an
/// object; nested objects are visited in their derived order. Keys present
/// in the order but absent from the value are skipped.
pub fn walk<H: RenderHooks>(value: &Value, key_order: Option<&[String]>, hooks: &mut H) {
    let mut path = Vec::new();
    walk_inner(value, key_order, &mut path, hooks);
}

fn walk_inner<H: RenderHooks>(
    value: &Value,
    key_order: Option<&[String]>,
    path: &mut Vec<Step>,
    hooks: &mut H,
) {
    hooks.node(path, value);
    match value {
        Value::Object(map) => {
            hooks.before_children(path);
            let derived;
            let order: &[String] = match key_order {
                Some(order) => order,
                None => {
                    derived = map.keys().cloned().collect::<Vec<_>>();
                    &derived
                }
            };
            for key in order {
                let Some(child) = map.get(key) else { continue };
                path.push(Step::Key(key.clone()));
                let child_order = derive_key_order(child);
                walk_inner(child, child_order.as_deref(), path, hooks);
                hooks.after_remove_control(path);
                path.pop();
            }
            hooks.after_children(path);
        }
        Value::Array(arr) => {
            hooks.before_children(path);
            for (i, child) in arr.iter().enumerate() {
                path.push(Step::Index(i));
                let child_order = derive_key_order(child);
                walk_inner(child, child_order.as_deref(), path, hooks);
                hooks.after_remove_control(path);
                path.pop();
            }
            hooks.after_children(path);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    fn fmt_path(path: &[Step]) -> String {
        path.iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join("/")
    }

    impl RenderHooks for Recorder {
        fn node(&mut self, path: &[Step], value: &Value) {
            self.events
                .push(format!("node:{}:{}", fmt_path(path), crate::value::type_name(value)));
        }
        fn before_children(&mut self, path: &[Step]) {
            self.events.push(format!("before:{}", fmt_path(path)));
        }
        fn after_children(&mut self, path: &[Step]) {
            self.events.push(format!("after:{}", fmt_path(path)));
        }
        fn after_remove_control(&mut self, path: &[Step]) {
            self.events.push(format!("remove:{}", fmt_path(path)));
        }
    }

    #[test]
    fn test_walk_visits_in_key_order() {
        let doc = json!({"a": 1, "b": [true]});
        let order = vec!["b".to_string(), "a".to_string()];
        let mut rec = Recorder::default();
        walk(&doc, Some(&order), &mut rec);
        assert_eq!(
            rec.events,
            vec![
                "node::object",
                "before:",
                "node:b:array",
                "before:b",
                "node:b/0:boolean",
                "remove:b/0",
                "after:b",
                "remove:b",
                "node:a:number",
                "remove:a",
                "after:",
            ]
        );
    }

    #[test]
    fn test_walk_skips_stale_order_entries() {
        let doc = json!({"a": 1});
        let order = vec!["gone".to_string(), "a".to_string()];
        let mut rec = Recorder::default();
        walk(&doc, Some(&order), &mut rec);
        assert!(rec.events.contains(&"node:a:number".to_string()));
        assert!(!rec.events.iter().any(|e| e.contains("gone")));
    }

    #[test]
    fn test_walk_scalar_root_has_no_children_hooks() {
        let mut rec = Recorder::default();
        walk(&json!("leaf"), None, &mut rec);
        assert_eq!(rec.events, vec!["node::string"]);
    }
}
