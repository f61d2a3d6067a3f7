use objkit_value::{is_reserved_key, Object, PathSegment, Value};
use std::convert::Infallible;
use tracing::{trace, trace_span};

use super::node::{Entry, TraversalNode};
use crate::clone::clone;

/// Rewrites a tree of plain objects and arrays through `visit`.
///
/// `visit` is called once per key, parents before children, in key order. It
/// returns `None` to keep the entry, or a replacement [`Entry`] to rename the
/// key and/or replace the value. Unless the visitor calls
/// [`TraversalNode::skip_children`], the traversal then descends into the
/// resulting value: plain objects are traversed, and so is every plain object
/// found directly in an array (with the element index in its path). An entry
/// renamed to a reserved key (`__proto__`, `constructor`, `prototype`) is
/// dropped from the result.
///
/// The input is cloned first and never modified. Values that are neither plain
/// objects nor arrays are returned unchanged without calling `visit`.
///
/// # Examples
///
/// ```
/// use objkit::{traverse, Entry};
/// use objkit::value::Value;
///
/// let doc = Value::object([
///     ("a", Value::from(1)),
///     ("b", Value::object([("_type", Value::from("old"))])),
/// ]);
///
/// let rewritten = traverse(&doc, |entry, _node| {
///     (entry.key == "_type" && entry.value == Value::from("old"))
///         .then(|| Entry::new("_type", "new"))
/// });
///
/// assert_eq!(rewritten.get("b").and_then(|b| b.get("_type")), Some(&Value::from("new")));
/// assert_eq!(doc.get("b").and_then(|b| b.get("_type")), Some(&Value::from("old")));
/// ```
pub fn traverse<F>(value: &Value, mut visit: F) -> Value
where
    F: FnMut(&Entry, &TraversalNode) -> Option<Entry>,
{
    let result: Result<Value, Infallible> = try_traverse(value, |entry, node| Ok(visit(entry, node)));
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// Like [`traverse`], with a fallible visitor.
///
/// The first error returned by `visit` aborts the traversal and is returned
/// as is; nothing is partially applied to the input.
pub fn try_traverse<F, E>(value: &Value, mut visit: F) -> Result<Value, E>
where
    F: FnMut(&Entry, &TraversalNode) -> Result<Option<Entry>, E>,
{
    let _span = trace_span!("traverse", kind = %value.kind()).entered();
    let root = TraversalNode::root();
    match clone(value) {
        Value::Object(obj) => walk_object(obj, &root, &mut visit).map(Value::Object),
        Value::Array(items) => walk_array(items, &root, &mut visit).map(Value::Array),
        other => Ok(other),
    }
}

fn walk_object<F, E>(obj: Object, parent: &TraversalNode, visit: &mut F) -> Result<Object, E>
where
    F: FnMut(&Entry, &TraversalNode) -> Result<Option<Entry>, E>,
{
    let mut out = Object::with_capacity(obj.len());
    for (key, value) in obj {
        if is_reserved_key(&key) {
            continue;
        }
        let node = parent.child(PathSegment::Key(key.clone()));
        let entry = Entry { key, value };
        let Entry { key, value } = visit(&entry, &node)?.unwrap_or(entry);
        if is_reserved_key(&key) {
            trace!(path = %node.path(), key = %key, "dropping entry renamed to a reserved key");
            continue;
        }
        let value = if node.skips_children() {
            trace!(path = %node.path(), "skipping children");
            value
        } else {
            descend(value, &node, visit)?
        };
        out.insert(key, value);
    }
    Ok(out)
}

fn descend<F, E>(value: Value, node: &TraversalNode, visit: &mut F) -> Result<Value, E>
where
    F: FnMut(&Entry, &TraversalNode) -> Result<Option<Entry>, E>,
{
    match value {
        Value::Object(obj) => walk_object(obj, node, visit).map(Value::Object),
        Value::Array(items) => walk_array(items, node, visit).map(Value::Array),
        other => Ok(other),
    }
}

// Only plain-object elements are traversed; everything else is kept as is.
fn walk_array<F, E>(items: Vec<Value>, parent: &TraversalNode, visit: &mut F) -> Result<Vec<Value>, E>
where
    F: FnMut(&Entry, &TraversalNode) -> Result<Option<Entry>, E>,
{
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(obj) => {
                walk_object(obj, &parent.child(PathSegment::Index(index)), visit).map(Value::Object)
            }
            other => Ok(other),
        })
        .collect()
}
