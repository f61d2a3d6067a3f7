use objkit_value::{Path, PathSegment, Value};
use std::cell::Cell;
use std::rc::Rc;

/// A key and its value, as handed to and returned from a traversal visitor.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub key: String,
    pub value: Value,
}

impl Entry {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Context for one visited key: where it sits and whether to descend into it.
///
/// A fresh node is created for every key. Clones share the skip flag, so an
/// asynchronous visitor may keep its copy across an await and still steer the
/// traversal.
#[derive(Debug, Clone)]
pub struct TraversalNode {
    path: Path,
    skip: Rc<Cell<bool>>,
}

impl TraversalNode {
    pub(crate) fn root() -> Self {
        Self {
            path: Path::root(),
            skip: Rc::new(Cell::new(false)),
        }
    }

    pub(crate) fn child(&self, segment: PathSegment) -> Self {
        Self {
            path: self.path.child(segment),
            skip: Rc::new(Cell::new(false)),
        }
    }

    /// Path from the traversal root to this key, including the key itself.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Stops the traversal from descending into this key's value.
    ///
    /// The (possibly rewritten) value is kept as it is below this key.
    pub fn skip_children(&self) {
        self.skip.set(true);
    }

    pub fn skips_children(&self) -> bool {
        self.skip.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_extends_path() {
        let root = TraversalNode::root();
        let a = root.child(PathSegment::from("a"));
        let a0 = a.child(PathSegment::Index(0));
        assert_eq!(root.depth(), 0);
        assert_eq!(a0.path().to_string(), "/a/0");
    }

    #[test]
    fn test_skip_flag_shared_between_clones_only() {
        let root = TraversalNode::root();
        let a = root.child(PathSegment::from("a"));
        let handle = a.clone();
        handle.skip_children();
        assert!(a.skips_children());
        assert!(!root.skips_children());
        assert!(!a.child(PathSegment::from("b")).skips_children());
    }

    #[test]
    fn test_entry_new() {
        assert_eq!(
            Entry::new("k", 1),
            Entry {
                key: "k".to_string(),
                value: Value::from(1)
            }
        );
    }
}
