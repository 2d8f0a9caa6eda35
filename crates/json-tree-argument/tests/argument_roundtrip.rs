use json_tree_argument::{from_default, get_argument, to_default};
use json_tree_edit::{edit, Change, Step};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        "[a-z]{0,8}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..6).prop_map(|entries| {
                let mut map = Map::new();
                for (k, v) in entries {
                    map.insert(k, v);
                }
                Value::Object(map)
            }),
        ]
    })
}

proptest! {
    /// `to_default` is the exact inverse of `from_default` over arbitrary
    /// JSON values.
    #[test]
    fn roundtrip(doc in arb_json()) {
        prop_assert_eq!(to_default(&from_default(doc.clone())), doc);
    }

    /// The wire shape survives a serde round trip.
    #[test]
    fn serde_roundtrip(doc in arb_json()) {
        let arg = from_default(doc);
        let encoded = serde_json::to_value(&arg).unwrap();
        let decoded: json_tree_argument::Argument = serde_json::from_value(encoded).unwrap();
        prop_assert_eq!(decoded, arg);
    }
}

/// An accessor produced by the engine against the plain default resolves
/// through the wrapped tree, one `default` indirection per step.
#[test]
fn engine_accessor_resolves_through_arguments() {
    let doc = json!({"a": [1, {"b": "old"}]});
    let root = from_default(doc.clone());

    let out = edit(
        &doc,
        Change::Edit {
            accessor: vec![Step::from("a"), Step::from(1usize), Step::from("b")],
            value: json!("new"),
        },
        None,
    )
    .unwrap();

    let hit = get_argument(&root, out.change.accessor()).unwrap();
    assert_eq!(to_default(hit), json!("old"));
}
