//! objkit-value - The dynamic value model shared by the objkit engines.
//!
//! A [`Value`] is a tree of plain objects and arrays whose leaves are
//! primitives, callables, opaque host objects, or one of the special built-ins
//! (dates, regular expressions, maps and sets). [`Kind`] classifies a value so
//! that the engines can dispatch on it exhaustively.
//!
//! # Example
//!
//! ```
//! use objkit_value::{classify, parse_json, Kind, Value};
//!
//! let value = parse_json(r#"{"tags": ["a", "b"], "count": 2}"#).unwrap();
//! assert_eq!(classify(&value), Kind::PlainObject);
//! assert_eq!(value.get("tags").map(Value::kind), Some(Kind::Array));
//! assert_eq!(value.get("count"), Some(&Value::from(2)));
//! ```

pub mod collections;
pub mod equal;
pub mod error;
pub mod handle;
pub mod json;
pub mod kind;
pub mod mutate;
pub mod path;
pub mod regexp;
pub mod value;

// Re-exports for convenience
pub use collections::{MapValue, SetValue};
pub use equal::{deep_equal, same_value_zero};
pub use error::{MutationError, ParseError, RegExpError};
pub use handle::{Function, Opaque};
pub use json::{parse_json, parse_json_or, to_json};
pub use kind::{
    classify, is_array, is_date, is_function, is_map, is_nullish, is_plain_object, is_regexp,
    is_reserved_key, is_set, Kind, RESERVED_KEYS,
};
pub use mutate::ValueMut;
pub use path::{Path, PathSegment};
pub use regexp::RegExp;
pub use value::{Object, Value};

pub use chrono::{DateTime, Utc};
