use futures::future::{try_join_all, FutureExt, LocalBoxFuture};
use objkit_value::{is_reserved_key, Object, PathSegment, Value};
use std::future::Future;
use tracing::{trace, trace_span, Instrument};

use super::node::{Entry, TraversalNode};
use crate::clone::clone;

/// Asynchronous form of [`try_traverse`](crate::try_traverse).
///
/// `visit` receives an owned copy of each entry and a handle to its node and
/// returns a future. At every object level the visits for all sibling keys are
/// started in key order and awaited together; the traversal then descends into
/// the siblings one after another. The resulting tree is the same as the
/// synchronous traversal would produce for an equivalent visitor, including
/// dropping entries renamed to a reserved key.
///
/// The entry handed to `visit` owns a deep copy of its value, so a tree of
/// `n` keys nested `d` levels deep costs about `n * d` value copies. Prefer
/// [`traverse`](crate::traverse) for large trees when the visitor does not
/// need to await.
///
/// The first error from any visit is returned and the traversal stops.
///
/// # Examples
///
/// ```
/// use futures::executor::block_on;
/// use objkit::{traverse_async, Entry};
/// use objkit::value::Value;
///
/// let doc = Value::object([("b", Value::object([("_type", Value::from("old"))]))]);
///
/// let rewritten = block_on(traverse_async(&doc, |entry, _node| async move {
///     let rename = entry.key == "_type" && entry.value == Value::from("old");
///     Ok::<_, std::convert::Infallible>(rename.then(|| Entry::new("_type", "new")))
/// }))
/// .unwrap();
///
/// assert_eq!(rewritten.get("b").and_then(|b| b.get("_type")), Some(&Value::from("new")));
/// ```
pub async fn traverse_async<F, Fut, E>(value: &Value, mut visit: F) -> Result<Value, E>
where
    F: FnMut(Entry, TraversalNode) -> Fut,
    Fut: Future<Output = Result<Option<Entry>, E>>,
{
    let span = trace_span!("traverse_async", kind = %value.kind());
    let working = clone(value);
    async move {
        let root = TraversalNode::root();
        match working {
            Value::Object(obj) => walk_object(obj, root, &mut visit).await.map(Value::Object),
            Value::Array(items) => walk_array(items, root, &mut visit).await.map(Value::Array),
            other => Ok(other),
        }
    }
    .instrument(span)
    .await
}

fn walk_object<'a, F, Fut, E>(
    obj: Object,
    parent: TraversalNode,
    visit: &'a mut F,
) -> LocalBoxFuture<'a, Result<Object, E>>
where
    F: FnMut(Entry, TraversalNode) -> Fut + 'a,
    Fut: Future<Output = Result<Option<Entry>, E>> + 'a,
    E: 'a,
{
    async move {
        let slots: Vec<(Entry, TraversalNode)> = obj
            .into_iter()
            .filter(|(key, _)| !is_reserved_key(key))
            .map(|(key, value)| {
                let node = parent.child(PathSegment::Key(key.clone()));
                (Entry { key, value }, node)
            })
            .collect();

        let pending: Vec<Fut> = slots
            .iter()
            .map(|(entry, node)| visit(entry.clone(), node.clone()))
            .collect();
        let rewrites = try_join_all(pending).await?;

        let mut out = Object::with_capacity(slots.len());
        for ((entry, node), rewrite) in slots.into_iter().zip(rewrites) {
            let Entry { key, value } = rewrite.unwrap_or(entry);
            if is_reserved_key(&key) {
                trace!(path = %node.path(), key = %key, "dropping entry renamed to a reserved key");
                continue;
            }
            let value = if node.skips_children() {
                trace!(path = %node.path(), "skipping children");
                value
            } else {
                descend(value, node, &mut *visit).await?
            };
            out.insert(key, value);
        }
        Ok(out)
    }
    .boxed_local()
}

fn descend<'a, F, Fut, E>(
    value: Value,
    node: TraversalNode,
    visit: &'a mut F,
) -> LocalBoxFuture<'a, Result<Value, E>>
where
    F: FnMut(Entry, TraversalNode) -> Fut + 'a,
    Fut: Future<Output = Result<Option<Entry>, E>> + 'a,
    E: 'a,
{
    async move {
        match value {
            Value::Object(obj) => walk_object(obj, node, visit).await.map(Value::Object),
            Value::Array(items) => walk_array(items, node, visit).await.map(Value::Array),
            other => Ok(other),
        }
    }
    .boxed_local()
}

fn walk_array<'a, F, Fut, E>(
    items: Vec<Value>,
    parent: TraversalNode,
    visit: &'a mut F,
) -> LocalBoxFuture<'a, Result<Vec<Value>, E>>
where
    F: FnMut(Entry, TraversalNode) -> Fut + 'a,
    Fut: Future<Output = Result<Option<Entry>, E>> + 'a,
    E: 'a,
{
    async move {
        let mut out = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            let item = match item {
                Value::Object(obj) => {
                    let node = parent.child(PathSegment::Index(index));
                    Value::Object(walk_object(obj, node, &mut *visit).await?)
                }
                other => other,
            };
            out.push(item);
        }
        Ok(out)
    }
    .boxed_local()
}
