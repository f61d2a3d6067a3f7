use objkit_value::Value;

/// Which entries [`clear_with`] removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearOptions {
    /// Remove `null` entries. Default is `true`.
    pub null: bool,
    /// Remove `undefined` entries. Default is `true`.
    pub undefined: bool,
    /// Descend into nested plain objects and arrays. Default is `true`.
    pub deep: bool,
}

impl Default for ClearOptions {
    fn default() -> Self {
        Self {
            null: true,
            undefined: true,
            deep: true,
        }
    }
}

impl ClearOptions {
    fn removes(&self, value: &Value) -> bool {
        match value {
            Value::Null => self.null,
            Value::Undefined => self.undefined,
            _ => false,
        }
    }
}

/// Removes nullish entries from `value` in place.
///
/// Object entries are removed with their keys, keeping the order of the rest;
/// array elements are removed and later elements shift down. The value itself
/// is never replaced, even when it is `null`.
///
/// # Examples
///
/// ```
/// use objkit::{clear_with, ClearOptions};
/// use objkit::value::Value;
///
/// let mut value = Value::object([
///     ("a", Value::Null),
///     ("b", Value::object([("c", Value::Undefined), ("d", Value::from(1))])),
/// ]);
/// clear_with(&mut value, &ClearOptions::default());
/// assert_eq!(value, Value::object([("b", Value::object([("d", Value::from(1))]))]));
/// ```
pub fn clear_with(value: &mut Value, options: &ClearOptions) {
    match value {
        Value::Object(obj) => {
            obj.retain(|_, v| !options.removes(v));
            if options.deep {
                for v in obj.values_mut() {
                    clear_with(v, options);
                }
            }
        }
        Value::Array(items) => {
            items.retain(|v| !options.removes(v));
            if options.deep {
                for v in items.iter_mut() {
                    clear_with(v, options);
                }
            }
        }
        _ => {}
    }
}

/// Removes `null` entries recursively.
pub fn clear_null(value: &mut Value) {
    clear_with(
        value,
        &ClearOptions {
            undefined: false,
            ..ClearOptions::default()
        },
    );
}

/// Removes `undefined` entries recursively.
pub fn clear_undefined(value: &mut Value) {
    clear_with(
        value,
        &ClearOptions {
            null: false,
            ..ClearOptions::default()
        },
    );
}

/// Removes `null` and `undefined` entries recursively.
pub fn clear_nullish(value: &mut Value) {
    clear_with(value, &ClearOptions::default());
}
