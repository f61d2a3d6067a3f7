//! objkit - Deep clone, merge, readonly snapshots and tree rewriting.
//!
//! The engines operate on [`objkit_value::Value`] trees and never modify their
//! inputs:
//!
//! - [`clone`] copies the plain-object/array structure and shares every other
//!   kind of value.
//! - [`deep_merge`] folds several objects into a new one; arrays replace and
//!   special values are rebuilt.
//! - [`make_readonly`] produces a snapshot that rejects every write.
//! - [`traverse`], [`try_traverse`] and [`traverse_async`] rebuild a tree
//!   through a per-key visitor that may rename keys, replace values and prune
//!   descent.
//!
//! The [`clear_with`] family is the exception: it edits the caller's value in
//! place.
//!
//! # Example
//!
//! ```
//! use objkit::{deep_merge, make_readonly};
//! use objkit::value::{parse_json, Value, ValueMut, PathSegment};
//!
//! let defaults = parse_json(r#"{"log": {"level": "info", "targets": ["stdout"]}}"#).unwrap();
//! let local = parse_json(r#"{"log": {"level": "debug"}}"#).unwrap();
//!
//! let mut settings = make_readonly(&deep_merge([&defaults, &local]));
//! let level = [PathSegment::from("log"), PathSegment::from("level")];
//! assert_eq!(settings.at(&level).unwrap().as_value(), &Value::from("debug"));
//! assert!(settings.set_at(&level, Value::from("trace")).is_err());
//! ```

pub mod clear;
pub mod clone;
pub mod merge;
pub mod readonly;
pub mod traverse;

pub use objkit_value as value;

// Re-exports for convenience
pub use clear::{clear_null, clear_nullish, clear_undefined, clear_with, ClearOptions};
pub use clone::{clone, clone_object};
pub use merge::{copy_value, deep_merge, merge_two};
pub use readonly::{make_readonly, Readonly, ReadonlyRef};
pub use traverse::{traverse, traverse_async, try_traverse, Entry, TraversalNode};
