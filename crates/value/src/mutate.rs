//! Path-addressed writes.
//!
//! Segments are resolved the way JSON Pointer resolves them: a key segment
//! that spells a decimal index addresses an array element, and an index
//! segment on an object addresses the key with that decimal spelling.

use crate::error::MutationError;
use crate::path::{Path, PathSegment};
use crate::value::Value;

/// Writes addressed by a path from the receiver.
///
/// [`Value`] performs the write. Readonly wrappers reject every call with
/// [`MutationError::Frozen`], which lets callers exercise both through the same
/// interface.
pub trait ValueMut {
    /// Sets the value at `path`, returning the value it replaced.
    ///
    /// Object keys are created on demand; array slots may be replaced or
    /// appended at `len`. Intermediate containers must already exist.
    fn set_at(&mut self, path: &[PathSegment], value: Value) -> Result<Option<Value>, MutationError>;

    /// Removes the entry at `path`, returning it. Array elements after the
    /// removed one shift down.
    fn delete_at(&mut self, path: &[PathSegment]) -> Result<Option<Value>, MutationError>;

    /// Appends to the array at `path`, returning the new length.
    fn push_at(&mut self, path: &[PathSegment], value: Value) -> Result<usize, MutationError>;
}

impl ValueMut for Value {
    fn set_at(&mut self, path: &[PathSegment], value: Value) -> Result<Option<Value>, MutationError> {
        let (last, parent_path) = path.split_last().ok_or(MutationError::EmptyPath)?;
        let parent = resolve_mut(self, parent_path)?;
        match parent {
            Value::Object(obj) => Ok(obj.insert(object_key(last), value)),
            Value::Array(arr) => {
                let index = array_index(last).ok_or_else(|| not_found(path))?;
                match index.cmp(&arr.len()) {
                    std::cmp::Ordering::Less => Ok(Some(std::mem::replace(&mut arr[index], value))),
                    std::cmp::Ordering::Equal => {
                        arr.push(value);
                        Ok(None)
                    }
                    std::cmp::Ordering::Greater => Err(MutationError::OutOfBounds {
                        path: Path::from(path),
                    }),
                }
            }
            _ => Err(MutationError::NotContainer {
                path: Path::from(parent_path),
            }),
        }
    }

    fn delete_at(&mut self, path: &[PathSegment]) -> Result<Option<Value>, MutationError> {
        let (last, parent_path) = path.split_last().ok_or(MutationError::EmptyPath)?;
        let parent = resolve_mut(self, parent_path)?;
        match parent {
            Value::Object(obj) => Ok(obj.shift_remove(&object_key(last))),
            Value::Array(arr) => {
                let index = array_index(last).ok_or_else(|| not_found(path))?;
                if index >= arr.len() {
                    return Err(MutationError::OutOfBounds {
                        path: Path::from(path),
                    });
                }
                Ok(Some(arr.remove(index)))
            }
            _ => Err(MutationError::NotContainer {
                path: Path::from(parent_path),
            }),
        }
    }

    fn push_at(&mut self, path: &[PathSegment], value: Value) -> Result<usize, MutationError> {
        match resolve_mut(self, path)? {
            Value::Array(arr) => {
                arr.push(value);
                Ok(arr.len())
            }
            _ => Err(MutationError::NotContainer {
                path: Path::from(path),
            }),
        }
    }
}

fn resolve_mut<'a>(root: &'a mut Value, path: &[PathSegment]) -> Result<&'a mut Value, MutationError> {
    let mut current = root;
    for (depth, segment) in path.iter().enumerate() {
        let here = &path[..=depth];
        current = match current {
            Value::Object(obj) => obj.get_mut(&object_key(segment)).ok_or_else(|| not_found(here))?,
            Value::Array(arr) => array_index(segment)
                .and_then(|index| arr.get_mut(index))
                .ok_or_else(|| not_found(here))?,
            _ => {
                return Err(MutationError::NotContainer {
                    path: Path::from(&path[..depth]),
                })
            }
        };
    }
    Ok(current)
}

fn object_key(segment: &PathSegment) -> String {
    match segment {
        PathSegment::Key(key) => key.clone(),
        PathSegment::Index(index) => index.to_string(),
    }
}

fn array_index(segment: &PathSegment) -> Option<usize> {
    match segment {
        PathSegment::Index(index) => Some(*index),
        // Leading zeros are not indices.
        PathSegment::Key(key) if key == "0" || (!key.starts_with('0') && !key.is_empty()) => {
            key.parse().ok()
        }
        PathSegment::Key(_) => None,
    }
}

fn not_found(path: &[PathSegment]) -> MutationError {
    MutationError::NotFound {
        path: Path::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(k: &str) -> PathSegment {
        PathSegment::from(k)
    }

    fn sample() -> Value {
        Value::object([
            ("a", Value::object([("b", Value::from(1))])),
            ("list", Value::from(vec![Value::from(1), Value::from(2)])),
            ("n", Value::from(5)),
        ])
    }

    #[test]
    fn test_set_nested_key() {
        let mut value = sample();
        let old = value.set_at(&[key("a"), key("b")], Value::from(2)).unwrap();
        assert_eq!(old, Some(Value::from(1)));
        assert_eq!(value.get("a").and_then(|a| a.get("b")), Some(&Value::from(2)));
    }

    #[test]
    fn test_set_creates_key() {
        let mut value = sample();
        assert_eq!(value.set_at(&[key("a"), key("c")], Value::Null).unwrap(), None);
        assert_eq!(value.get("a").and_then(|a| a.get("c")), Some(&Value::Null));
    }

    #[test]
    fn test_set_array_slot_and_append() {
        let mut value = sample();
        value.set_at(&[key("list"), PathSegment::Index(0)], Value::from(9)).unwrap();
        value.set_at(&[key("list"), key("2")], Value::from(3)).unwrap();
        assert_eq!(
            value.get("list"),
            Some(&Value::from(vec![Value::from(9), Value::from(2), Value::from(3)]))
        );
        let err = value.set_at(&[key("list"), PathSegment::Index(7)], Value::Null).unwrap_err();
        assert!(matches!(err, MutationError::OutOfBounds { .. }));
    }

    #[test]
    fn test_missing_intermediate() {
        let mut value = sample();
        let err = value.set_at(&[key("x"), key("y")], Value::Null).unwrap_err();
        assert_eq!(err.to_string(), "NOT_FOUND: '/x'");
    }

    #[test]
    fn test_not_container() {
        let mut value = sample();
        let err = value.set_at(&[key("n"), key("y")], Value::Null).unwrap_err();
        assert_eq!(
            err,
            MutationError::NotContainer {
                path: Path::from(vec![key("n")])
            }
        );
    }

    #[test]
    fn test_empty_path() {
        let mut value = sample();
        assert_eq!(value.set_at(&[], Value::Null), Err(MutationError::EmptyPath));
        assert_eq!(value.delete_at(&[]), Err(MutationError::EmptyPath));
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut value = sample();
        assert_eq!(value.delete_at(&[key("a")]).unwrap().map(|v| v.kind()), Some(crate::Kind::PlainObject));
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["list", "n"]);
        assert_eq!(value.delete_at(&[key("missing")]).unwrap(), None);
    }

    #[test]
    fn test_delete_array_element() {
        let mut value = sample();
        assert_eq!(value.delete_at(&[key("list"), key("0")]).unwrap(), Some(Value::from(1)));
        assert_eq!(value.get("list"), Some(&Value::from(vec![Value::from(2)])));
    }

    #[test]
    fn test_push() {
        let mut value = sample();
        assert_eq!(value.push_at(&[key("list")], Value::from(3)).unwrap(), 3);
        assert!(value.push_at(&[key("a")], Value::Null).is_err());
        let mut root = Value::Array(vec![]);
        assert_eq!(root.push_at(&[], Value::Null).unwrap(), 1);
    }

    #[test]
    fn test_leading_zero_is_not_index() {
        let mut value = sample();
        let err = value.set_at(&[key("list"), key("01")], Value::Null).unwrap_err();
        assert!(matches!(err, MutationError::NotFound { .. }));
    }
}
