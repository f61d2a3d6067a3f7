use objkit_value::{is_reserved_key, Object, Value};
use tracing::trace;

/// Creates a deep clone of the plain-object/array structure of a value.
///
/// Plain objects and arrays are rebuilt recursively, so the result shares no
/// container with the input. Every other kind is returned as is: functions,
/// opaque objects, dates, regular expressions, maps and sets keep their
/// identity. Reserved keys (`__proto__`, `constructor`, `prototype`) are not
/// copied.
///
/// # Examples
///
/// ```
/// use objkit::clone;
/// use objkit::value::{Value, DateTime};
///
/// let date = Value::date(DateTime::from_timestamp_millis(0).unwrap());
/// let original = Value::object([("when", date.clone()), ("tags", Value::from(vec![Value::from("a")]))]);
/// let cloned = clone(&original);
///
/// assert_eq!(original, cloned);
/// assert!(cloned.get("when").unwrap().ptr_eq(&date));
/// ```
pub fn clone(value: &Value) -> Value {
    match value {
        Value::Object(obj) => Value::Object(clone_object(obj)),
        Value::Array(items) => Value::Array(clone_array(items)),
        Value::Undefined
        | Value::Null
        | Value::Bool(_)
        | Value::Number(_)
        | Value::String(_)
        | Value::Function(_)
        | Value::Date(_)
        | Value::RegExp(_)
        | Value::Map(_)
        | Value::Set(_)
        | Value::Opaque(_) => value.clone(),
    }
}

/// Deep-clones a plain object, preserving key order.
pub fn clone_object(obj: &Object) -> Object {
    let mut out = Object::with_capacity(obj.len());
    for (key, val) in obj {
        if is_reserved_key(key) {
            trace!(key = %key, "skipping reserved key");
            continue;
        }
        out.insert(key.clone(), clone(val));
    }
    out
}

// Elements are appended to a fresh accumulator, so an array clone is the
// concatenation of its cloned elements onto an empty array.
fn clone_array(items: &[Value]) -> Vec<Value> {
    let mut out = Vec::with_capacity(items.len());
    out.extend(items.iter().map(clone));
    out
}
