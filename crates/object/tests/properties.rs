use futures::executor::block_on;
use objkit::value::{MutationError, PathSegment, Value, ValueMut};
use objkit::{clone, deep_merge, make_readonly, traverse, traverse_async, Entry, TraversalNode};
use proptest::prelude::*;
use std::convert::Infallible;

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        Just(Value::Undefined),
        any::<bool>().prop_map(Value::Bool),
        (-1.0e6..1.0e6f64).prop_map(Value::Number),
        "[a-z]{0,6}".prop_map(Value::String),
    ]
}

fn arb_tree() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(4, 48, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec(("[a-f]{1,2}", inner), 0..5).prop_map(Value::object),
        ]
    })
}

fn arb_object() -> impl Strategy<Value = Value> {
    prop::collection::vec(("[a-f]{1,2}", arb_tree()), 0..5).prop_map(Value::object)
}

/// Objects whose leaves are primitives only (no arrays anywhere).
fn arb_plain_object() -> impl Strategy<Value = Value> {
    let tree = leaf().prop_recursive(3, 32, 4, |inner| {
        prop::collection::vec(("[a-d]", inner), 0..4).prop_map(Value::object)
    });
    prop::collection::vec(("[a-d]", tree), 0..4).prop_map(Value::object)
}

fn all_paths(value: &Value, prefix: &mut Vec<PathSegment>, out: &mut Vec<Vec<PathSegment>>) {
    match value {
        Value::Object(obj) => {
            for (key, child) in obj {
                prefix.push(PathSegment::Key(key.clone()));
                out.push(prefix.clone());
                all_paths(child, prefix, out);
                prefix.pop();
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                prefix.push(PathSegment::Index(index));
                out.push(prefix.clone());
                all_paths(child, prefix, out);
                prefix.pop();
            }
        }
        _ => {}
    }
}

fn rewrite_rule(entry: &Entry, node: &TraversalNode) -> Option<Entry> {
    if entry.key.starts_with('a') {
        node.skip_children();
    }
    match &entry.value {
        Value::String(s) => Some(Entry::new(entry.key.to_uppercase(), format!("{s}!"))),
        Value::Number(n) => Some(Entry::new(entry.key.clone(), n * 2.0)),
        _ if entry.key == "b" => Some(Entry::new("renamed", entry.value.clone())),
        _ => None,
    }
}

proptest! {
    #[test]
    fn clone_is_idempotent(tree in arb_tree()) {
        let once = clone(&tree);
        prop_assert_eq!(&clone(&once), &once);
        prop_assert_eq!(&once, &tree);
    }

    #[test]
    fn clone_is_independent(tree in arb_object()) {
        let snapshot = tree.clone();
        let mut copy = clone(&tree);
        let mut paths = Vec::new();
        all_paths(&copy, &mut Vec::new(), &mut paths);
        for path in &paths {
            // Earlier writes may have replaced a container, so later paths can fail.
            let _ = copy.set_at(path, Value::from("mutated"));
        }
        prop_assert_eq!(&tree, &snapshot);
    }

    #[test]
    fn merge_leaves_sources_unchanged(a in arb_object(), b in arb_object()) {
        let (snap_a, snap_b) = (a.clone(), b.clone());
        let _ = deep_merge([&a, &b]);
        prop_assert_eq!(&a, &snap_a);
        prop_assert_eq!(&b, &snap_b);
    }

    #[test]
    fn merge_later_source_wins_at_top_level(a in arb_object(), b in arb_object()) {
        let merged = deep_merge([&a, &b]);
        for (key, value) in b.as_object().unwrap() {
            let got = merged.get(key).unwrap();
            match (a.get(key), value) {
                (Some(Value::Object(_)), Value::Object(_)) => prop_assert!(matches!(got, Value::Object(_))),
                _ => prop_assert_eq!(got, value),
            }
        }
    }

    #[test]
    fn merge_folds_left(a in arb_plain_object(), b in arb_plain_object(), c in arb_plain_object()) {
        let all_at_once = deep_merge([&a, &b, &c]);
        let stepwise = deep_merge([&deep_merge([&a, &b]), &c]);
        prop_assert_eq!(all_at_once, stepwise);
    }

    #[test]
    fn readonly_rejects_every_path(tree in arb_object()) {
        let mut frozen = make_readonly(&tree);
        let mut paths = Vec::new();
        all_paths(&tree, &mut Vec::new(), &mut paths);
        for path in &paths {
            let rejected = matches!(
                frozen.set_at(path, Value::Null),
                Err(MutationError::Frozen { .. })
            );
            prop_assert!(rejected);
        }
        prop_assert_eq!(&frozen, &tree);

        let mut original = tree.clone();
        if let Some(path) = paths.first() {
            prop_assert!(original.set_at(path, Value::from("changed")).is_ok());
            prop_assert_eq!(&frozen, &tree);
        }
    }

    #[test]
    fn traverse_async_matches_sync(tree in arb_tree()) {
        let sync_out = traverse(&tree, rewrite_rule);
        let async_out = block_on(traverse_async(&tree, |entry, node| async move {
            Ok::<_, Infallible>(rewrite_rule(&entry, &node))
        }))
        .unwrap();
        prop_assert_eq!(sync_out, async_out);
    }

    #[test]
    fn traverse_never_mutates_input(tree in arb_tree()) {
        let snapshot = tree.clone();
        let _ = traverse(&tree, rewrite_rule);
        prop_assert_eq!(&tree, &snapshot);
    }
}
