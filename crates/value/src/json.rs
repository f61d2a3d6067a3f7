//! Conversions between [`Value`] and `serde_json::Value`, and safe parsing.

use chrono::SecondsFormat;
use serde_json::{Map, Number};

use crate::error::ParseError;
use crate::value::Value;

/// Largest integer an `f64` holds exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(arr) => Value::Array(arr.into_iter().map(Value::from).collect()),
            serde_json::Value::Object(obj) => {
                Value::Object(obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(value: &serde_json::Value) -> Self {
        Value::from(value.clone())
    }
}

/// Converts a value to JSON the way `JSON.stringify` would.
///
/// Returns `None` when the value itself has no JSON form (`undefined`,
/// functions, opaque objects). Inside objects such entries are dropped; inside
/// arrays they become `null`. Dates become RFC 3339 strings with millisecond
/// precision, non-finite numbers become `null`, and regular expressions, maps
/// and sets become `{}`.
///
/// # Examples
///
/// ```
/// use objkit_value::{to_json, Value};
/// use serde_json::json;
///
/// let value = Value::object([
///     ("a", Value::from(1)),
///     ("skip", Value::Undefined),
///     ("list", Value::from(vec![Value::Undefined, Value::Number(f64::NAN)])),
/// ]);
/// assert_eq!(to_json(&value), Some(json!({"a": 1, "list": [null, null]})));
/// assert_eq!(to_json(&Value::Undefined), None);
/// ```
pub fn to_json(value: &Value) -> Option<serde_json::Value> {
    let json = match value {
        Value::Undefined | Value::Function(_) | Value::Opaque(_) => return None,
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Number(n) => number_to_json(*n),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Array(arr) => serde_json::Value::Array(
            arr.iter()
                .map(|item| to_json(item).unwrap_or(serde_json::Value::Null))
                .collect(),
        ),
        Value::Object(obj) => {
            let mut out = Map::new();
            for (key, val) in obj {
                if let Some(json) = to_json(val) {
                    out.insert(key.clone(), json);
                }
            }
            serde_json::Value::Object(out)
        }
        Value::Date(at) => {
            serde_json::Value::String(at.to_rfc3339_opts(SecondsFormat::Millis, true))
        }
        Value::RegExp(_) | Value::Map(_) | Value::Set(_) => serde_json::Value::Object(Map::new()),
    };
    Some(json)
}

fn number_to_json(n: f64) -> serde_json::Value {
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        return serde_json::Value::Number(Number::from(n as i64));
    }
    Number::from_f64(n).map_or(serde_json::Value::Null, serde_json::Value::Number)
}

/// Parses JSON text into a [`Value`].
pub fn parse_json(text: &str) -> Result<Value, ParseError> {
    let json: serde_json::Value = serde_json::from_str(text)?;
    Ok(Value::from(json))
}

/// Parses JSON text, returning `fallback` when the text is not valid JSON.
///
/// ```
/// use objkit_value::{parse_json_or, Value};
///
/// assert_eq!(parse_json_or("[1]", Value::Null), Value::from(vec![Value::from(1)]));
/// assert_eq!(parse_json_or("{oops", Value::Null), Value::Null);
/// ```
pub fn parse_json_or(text: &str, fallback: Value) -> Value {
    parse_json(text).unwrap_or(fallback)
}
