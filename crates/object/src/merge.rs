use objkit_value::{is_reserved_key, Object, Value};
use std::borrow::Borrow;
use std::rc::Rc;
use tracing::{debug, trace};

/// Deep-merges `sources` left to right into a fresh empty object.
///
/// Later sources win on conflicting keys. Nested plain objects merge key by
/// key; arrays and every other kind replace whatever was there before. No
/// source is modified and the result shares no container or special value
/// (date, regular expression, map, set) with any source. Sources that are not
/// plain objects contribute nothing.
///
/// # Examples
///
/// ```
/// use objkit::deep_merge;
/// use objkit::value::Value;
///
/// let defaults = Value::object([
///     ("retries", Value::from(3)),
///     ("hosts", Value::from(vec![Value::from("a"), Value::from("b")])),
///     ("tls", Value::object([("verify", Value::from(true))])),
/// ]);
/// let overrides = Value::object([
///     ("hosts", Value::from(vec![Value::from("c")])),
///     ("tls", Value::object([("ca", Value::from("/etc/ca.pem"))])),
/// ]);
///
/// let merged = deep_merge([&defaults, &overrides]);
/// assert_eq!(merged.get("retries"), Some(&Value::from(3)));
/// assert_eq!(merged.get("hosts"), Some(&Value::from(vec![Value::from("c")])));
/// assert_eq!(
///     merged.get("tls"),
///     Some(&Value::object([
///         ("verify", Value::from(true)),
///         ("ca", Value::from("/etc/ca.pem")),
///     ]))
/// );
/// ```
pub fn deep_merge<I>(sources: I) -> Value
where
    I: IntoIterator,
    I::Item: Borrow<Value>,
{
    let mut result = Object::new();
    for (position, source) in sources.into_iter().enumerate() {
        match source.borrow() {
            Value::Object(obj) => result = merge_two(&result, obj),
            other => debug!(position, kind = %other.kind(), "ignoring non-object merge source"),
        }
    }
    Value::Object(result)
}

/// Merges `source` over `target` into a new object.
///
/// Every key of `target` is copied first; then each key of `source` is applied:
/// `null`/`undefined` and arrays replace, plain objects merge recursively into
/// an existing plain object (or replace anything else), and all other kinds
/// replace with a copy.
pub fn merge_two(target: &Object, source: &Object) -> Object {
    let mut result = Object::with_capacity(target.len().max(source.len()));
    for (key, value) in target {
        if is_reserved_key(key) {
            trace!(key = %key, "skipping reserved key in merge target");
            continue;
        }
        result.insert(key.clone(), copy_value(value));
    }
    for (key, value) in source {
        if is_reserved_key(key) {
            trace!(key = %key, "skipping reserved key in merge source");
            continue;
        }
        let merged = match (result.get(key), value) {
            (_, Value::Null | Value::Undefined) => value.clone(),
            (_, Value::Array(items)) => Value::Array(items.clone()),
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                Value::Object(merge_two(existing, incoming))
            }
            (_, Value::Object(incoming)) => Value::Object(copy_object(incoming)),
            (_, other) => copy_value(other),
        };
        result.insert(key.clone(), merged);
    }
    result
}

/// Copies one value the way merge does.
///
/// Unlike [`clone`](crate::clone), special values are rebuilt: a date from its
/// instant, a regular expression from its source and flags, maps and sets from
/// their entries. Arrays are copied shallowly (their element handles are
/// shared), plain objects key by key. Functions and opaque objects keep their
/// identity.
pub fn copy_value(value: &Value) -> Value {
    match value {
        Value::Undefined
        | Value::Null
        | Value::Bool(_)
        | Value::Number(_)
        | Value::String(_)
        | Value::Function(_)
        | Value::Opaque(_) => value.clone(),
        Value::Array(items) => Value::Array(items.clone()),
        Value::Object(obj) => Value::Object(copy_object(obj)),
        Value::Date(at) => Value::Date(Rc::new(**at)),
        Value::RegExp(re) => Value::RegExp(Rc::new(re.as_ref().clone())),
        Value::Map(map) => Value::Map(Rc::new(map.as_ref().clone())),
        Value::Set(set) => Value::Set(Rc::new(set.as_ref().clone())),
    }
}

fn copy_object(obj: &Object) -> Object {
    obj.iter()
        .filter(|(key, _)| !is_reserved_key(key))
        .map(|(key, value)| (key.clone(), copy_value(value)))
        .collect()
}
