use std::fmt;

use crate::value::Value;

/// Keys that are never copied, merged or traversed.
pub const RESERVED_KEYS: [&str; 3] = ["__proto__", "constructor", "prototype"];

/// Returns `true` for `__proto__`, `constructor` and `prototype`.
///
/// ```
/// use objkit_value::is_reserved_key;
///
/// assert!(is_reserved_key("__proto__"));
/// assert!(!is_reserved_key("proto"));
/// ```
pub fn is_reserved_key(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

/// The kind of a [`Value`], as seen by the engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Undefined,
    Primitive,
    Array,
    PlainObject,
    Function,
    Date,
    RegExp,
    Map,
    Set,
    /// Class instances and other host objects, passed through untouched.
    Other,
}

impl Kind {
    /// Classifies a value. Total and side-effect free.
    ///
    /// The checks run in a fixed order: nullish values first, then arrays,
    /// callables, plain objects, the special built-ins, and finally primitives
    /// and opaque objects.
    pub fn of(value: &Value) -> Kind {
        match value {
            Value::Null => Kind::Null,
            Value::Undefined => Kind::Undefined,
            Value::Array(_) => Kind::Array,
            Value::Function(_) => Kind::Function,
            Value::Object(_) => Kind::PlainObject,
            Value::Date(_) => Kind::Date,
            Value::RegExp(_) => Kind::RegExp,
            Value::Map(_) => Kind::Map,
            Value::Set(_) => Kind::Set,
            Value::Bool(_) | Value::Number(_) | Value::String(_) => Kind::Primitive,
            Value::Opaque(_) => Kind::Other,
        }
    }

    /// Date, RegExp, Map or Set.
    pub fn is_special(self) -> bool {
        matches!(self, Kind::Date | Kind::RegExp | Kind::Map | Kind::Set)
    }

    /// Kinds the engines recurse into.
    pub fn is_container(self) -> bool {
        matches!(self, Kind::Array | Kind::PlainObject)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Undefined => "undefined",
            Kind::Primitive => "primitive",
            Kind::Array => "array",
            Kind::PlainObject => "plain-object",
            Kind::Function => "function",
            Kind::Date => "date",
            Kind::RegExp => "regexp",
            Kind::Map => "map",
            Kind::Set => "set",
            Kind::Other => "other",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn classify(value: &Value) -> Kind {
    Kind::of(value)
}

pub fn is_plain_object(value: &Value) -> bool {
    Kind::of(value) == Kind::PlainObject
}

pub fn is_array(value: &Value) -> bool {
    Kind::of(value) == Kind::Array
}

pub fn is_function(value: &Value) -> bool {
    Kind::of(value) == Kind::Function
}

pub fn is_date(value: &Value) -> bool {
    Kind::of(value) == Kind::Date
}

pub fn is_regexp(value: &Value) -> bool {
    Kind::of(value) == Kind::RegExp
}

pub fn is_map(value: &Value) -> bool {
    Kind::of(value) == Kind::Map
}

pub fn is_set(value: &Value) -> bool {
    Kind::of(value) == Kind::Set
}

/// `null` or `undefined`.
pub fn is_nullish(value: &Value) -> bool {
    matches!(Kind::of(value), Kind::Null | Kind::Undefined)
}
