use objkit_value::{Kind, MutationError, Path, PathSegment, Value, ValueMut};
use std::rc::Rc;
use tracing::trace;

use crate::clone::clone;

/// A deep, immutable snapshot of a value.
///
/// The snapshot owns a private clone of the input; no mutable access to it is
/// ever handed out. Reads go through [`Readonly::get`], [`Readonly::index`],
/// [`Readonly::at`] and [`Readonly::as_value`]. Every write through
/// [`ValueMut`], on the snapshot or on any view into it, fails with
/// [`MutationError::Frozen`]. Functions inside the snapshot stay callable.
///
/// Cloning a `Readonly` is cheap and shares the snapshot.
#[derive(Debug, Clone)]
pub struct Readonly {
    root: Rc<Value>,
}

/// Builds a readonly snapshot of `value`.
///
/// The input is deep-cloned first (see [`clone`](crate::clone)), so it stays
/// mutable and independent of the snapshot.
///
/// # Examples
///
/// ```
/// use objkit::make_readonly;
/// use objkit::value::{MutationError, PathSegment, Value, ValueMut};
///
/// let mut config = Value::object([("db", Value::object([("port", Value::from(5432))]))]);
/// let mut frozen = make_readonly(&config);
///
/// let path = [PathSegment::from("db"), PathSegment::from("port")];
/// assert!(matches!(
///     frozen.set_at(&path, Value::from(1)),
///     Err(MutationError::Frozen { .. })
/// ));
///
/// config.set_at(&path, Value::from(1)).unwrap();
/// assert_eq!(frozen.at(&path).unwrap().as_value(), &Value::from(5432));
/// ```
pub fn make_readonly(value: &Value) -> Readonly {
    trace!(kind = %value.kind(), "freezing value");
    Readonly {
        root: Rc::new(clone(value)),
    }
}

impl Readonly {
    pub fn as_value(&self) -> &Value {
        &self.root
    }

    pub fn kind(&self) -> Kind {
        self.root.kind()
    }

    pub fn view(&self) -> ReadonlyRef<'_> {
        ReadonlyRef {
            value: &self.root,
            path: Path::root(),
        }
    }

    pub fn get(&self, key: &str) -> Option<ReadonlyRef<'_>> {
        self.view().get(key)
    }

    pub fn index(&self, index: usize) -> Option<ReadonlyRef<'_>> {
        self.view().index(index)
    }

    pub fn at(&self, path: &[PathSegment]) -> Option<ReadonlyRef<'_>> {
        self.view().at(path)
    }

    /// Returns an independent, mutable deep copy of the snapshot.
    pub fn thaw(&self) -> Value {
        clone(&self.root)
    }
}

impl AsRef<Value> for Readonly {
    fn as_ref(&self) -> &Value {
        &self.root
    }
}

impl PartialEq<Value> for Readonly {
    fn eq(&self, other: &Value) -> bool {
        self.root.as_ref() == other
    }
}

impl ValueMut for Readonly {
    fn set_at(&mut self, path: &[PathSegment], _value: Value) -> Result<Option<Value>, MutationError> {
        Err(frozen(&Path::root(), path))
    }

    fn delete_at(&mut self, path: &[PathSegment]) -> Result<Option<Value>, MutationError> {
        Err(frozen(&Path::root(), path))
    }

    fn push_at(&mut self, path: &[PathSegment], _value: Value) -> Result<usize, MutationError> {
        Err(frozen(&Path::root(), path))
    }
}

/// A borrowed view into a [`Readonly`] snapshot, remembering where it sits.
#[derive(Debug, Clone)]
pub struct ReadonlyRef<'a> {
    value: &'a Value,
    path: Path,
}

impl<'a> ReadonlyRef<'a> {
    pub fn as_value(&self) -> &'a Value {
        self.value
    }

    pub fn kind(&self) -> Kind {
        self.value.kind()
    }

    /// Location of this view from the snapshot root.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<ReadonlyRef<'a>> {
        let value = self.value.get(key)?;
        Some(ReadonlyRef {
            value,
            path: self.path.child(key),
        })
    }

    pub fn index(&self, index: usize) -> Option<ReadonlyRef<'a>> {
        let value = self.value.get_index(index)?;
        Some(ReadonlyRef {
            value,
            path: self.path.child(index),
        })
    }

    pub fn at(&self, path: &[PathSegment]) -> Option<ReadonlyRef<'a>> {
        path.iter().try_fold(self.clone(), |view, segment| match segment {
            PathSegment::Key(key) => view.get(key),
            PathSegment::Index(index) => view.index(*index),
        })
    }
}

impl ValueMut for ReadonlyRef<'_> {
    fn set_at(&mut self, path: &[PathSegment], _value: Value) -> Result<Option<Value>, MutationError> {
        Err(frozen(&self.path, path))
    }

    fn delete_at(&mut self, path: &[PathSegment]) -> Result<Option<Value>, MutationError> {
        Err(frozen(&self.path, path))
    }

    fn push_at(&mut self, path: &[PathSegment], _value: Value) -> Result<usize, MutationError> {
        Err(frozen(&self.path, path))
    }
}

fn frozen(base: &Path, path: &[PathSegment]) -> MutationError {
    let mut full = base.clone();
    for segment in path {
        full.push(segment.clone());
    }
    trace!(path = %full, "rejected write to readonly value");
    MutationError::Frozen { path: full }
}
