use objkit_value::{
    classify, deep_equal, is_plain_object, parse_json, parse_json_or, to_json, Kind, MapValue, PathSegment,
    RegExp, Value, ValueMut,
};
use proptest::prelude::*;
use serde_json::json;

#[test]
fn test_parsed_document_kinds() {
    let doc = parse_json(r#"{"n": null, "b": true, "x": 1.5, "s": "t", "a": [], "o": {}}"#).unwrap();
    let kinds: Vec<(String, Kind)> = doc
        .as_object()
        .unwrap()
        .iter()
        .map(|(k, v)| (k.clone(), classify(v)))
        .collect();
    assert_eq!(
        kinds,
        vec![
            ("n".to_string(), Kind::Null),
            ("b".to_string(), Kind::Primitive),
            ("x".to_string(), Kind::Primitive),
            ("s".to_string(), Kind::Primitive),
            ("a".to_string(), Kind::Array),
            ("o".to_string(), Kind::PlainObject),
        ]
    );
}

#[test]
fn test_special_values_are_not_plain_objects() {
    let mut map = MapValue::new();
    map.insert(Value::from("k"), Value::from(1));
    for value in [
        Value::map(map),
        Value::regexp(RegExp::new("a", "").unwrap()),
        Value::opaque(vec![1u8, 2, 3]),
        Value::function(|_| Value::Null),
    ] {
        assert!(!is_plain_object(&value), "{value:?}");
    }
}

#[test]
fn test_parse_json_or_keeps_fallback_identity() {
    let fallback = Value::function(|_| Value::Null);
    let out = parse_json_or("not json", fallback.clone());
    assert!(out.ptr_eq(&fallback));
}

#[test]
fn test_mutate_parsed_document() {
    let mut doc = parse_json(r#"{"servers": [{"host": "a"}, {"host": "b"}]}"#).unwrap();
    doc.set_at(
        &[PathSegment::from("servers"), PathSegment::Index(1), PathSegment::from("port")],
        Value::from(8080),
    )
    .unwrap();
    doc.push_at(&[PathSegment::from("servers")], Value::object([("host", Value::from("c"))]))
        .unwrap();
    assert_eq!(
        to_json(&doc),
        Some(json!({"servers": [{"host": "a"}, {"host": "b", "port": 8080}, {"host": "c"}]}))
    );
}

fn arb_json() -> impl Strategy<Value = serde_json::Value> {
    let leaf = prop_oneof![
        Just(serde_json::Value::Null),
        any::<bool>().prop_map(serde_json::Value::Bool),
        (-1_000_000i64..1_000_000).prop_map(|n| json!(n)),
        "[a-z ]{0,8}".prop_map(serde_json::Value::String),
    ];
    leaf.prop_recursive(4, 40, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(serde_json::Value::Array),
            prop::collection::btree_map("[a-z]{1,3}", inner, 0..4)
                .prop_map(|m| serde_json::Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn json_documents_survive_conversion(doc in arb_json()) {
        let value = Value::from(doc.clone());
        prop_assert_eq!(to_json(&value), Some(doc));
    }

    #[test]
    fn deep_equal_is_reflexive_for_json(doc in arb_json()) {
        let a = Value::from(doc.clone());
        let b = Value::from(doc);
        prop_assert!(deep_equal(&a, &b));
        prop_assert!(deep_equal(&b, &a));
    }
}
