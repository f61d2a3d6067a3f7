use std::rc::Rc;

use crate::value::Value;

/// Performs a deep equality check between two values.
///
/// - Primitives compare by value (`NaN` is not equal to itself).
/// - Arrays compare element by element, objects key by key regardless of order.
/// - Dates compare by instant, regular expressions by source and flags, maps
///   and sets by their entries in order.
/// - Functions and opaque objects are only equal to themselves.
///
/// # Examples
///
/// ```
/// use objkit_value::{deep_equal, Value};
///
/// let a = Value::object([("foo", Value::from(vec![Value::from(1), Value::from(2)]))]);
/// let b = Value::object([("foo", Value::from(vec![Value::from(1), Value::from(2)]))]);
/// let c = Value::object([("foo", Value::from(vec![Value::from(1)]))]);
///
/// assert!(deep_equal(&a, &b));
/// assert!(!deep_equal(&a, &c));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) => true,
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,

        // Arrays
        (Value::Array(arr_a), Value::Array(arr_b)) => {
            arr_a.len() == arr_b.len() && arr_a.iter().zip(arr_b).all(|(x, y)| deep_equal(x, y))
        }

        // Objects
        (Value::Object(obj_a), Value::Object(obj_b)) => {
            if obj_a.len() != obj_b.len() {
                return false;
            }
            for (key, val_a) in obj_a {
                match obj_b.get(key) {
                    Some(val_b) => {
                        if !deep_equal(val_a, val_b) {
                            return false;
                        }
                    }
                    None => return false,
                }
            }
            true
        }

        (Value::Date(a), Value::Date(b)) => Rc::ptr_eq(a, b) || a == b,
        (Value::RegExp(a), Value::RegExp(b)) => Rc::ptr_eq(a, b) || a == b,
        (Value::Map(a), Value::Map(b)) => Rc::ptr_eq(a, b) || a == b,
        (Value::Set(a), Value::Set(b)) => Rc::ptr_eq(a, b) || a == b,

        (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
        (Value::Opaque(a), Value::Opaque(b)) => a.ptr_eq(b),

        // Different kinds are never equal
        _ => false,
    }
}

/// The SameValueZero comparison used for map keys and set members.
///
/// Like [`deep_equal`] except that `NaN` equals `NaN` and shared handles
/// compare by identity only.
pub fn same_value_zero(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => (a.is_nan() && b.is_nan()) || a == b,
        (Value::Date(_), Value::Date(_))
        | (Value::RegExp(_), Value::RegExp(_))
        | (Value::Map(_), Value::Map(_))
        | (Value::Set(_), Value::Set(_)) => a.ptr_eq(b),
        _ => deep_equal(a, b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RegExp, SetValue};
    use chrono::DateTime;

    fn arr(items: Vec<Value>) -> Value {
        Value::Array(items)
    }

    #[test]
    fn test_null_and_undefined_differ() {
        assert!(!deep_equal(&Value::Null, &Value::Undefined));
        assert!(deep_equal(&Value::Undefined, &Value::Undefined));
    }

    #[test]
    fn test_zero_and_false_not_equal() {
        assert!(!deep_equal(&Value::from(0), &Value::from(false)));
    }

    #[test]
    fn test_empty_string_and_null_not_equal() {
        assert!(!deep_equal(&Value::from(""), &Value::Null));
    }

    #[test]
    fn test_nan_not_deep_equal() {
        let nan = Value::Number(f64::NAN);
        assert!(!deep_equal(&nan, &nan));
        assert!(same_value_zero(&nan, &nan));
    }

    #[test]
    fn test_objects_ignore_key_order() {
        let a = Value::object([("a", Value::from(1)), ("b", Value::from("2"))]);
        let b = Value::object([("b", Value::from("2")), ("a", Value::from(1))]);
        assert!(deep_equal(&a, &b));
    }

    #[test]
    fn test_objects_extra_property() {
        let a = Value::object([("a", Value::from(1))]);
        let b = Value::object([("a", Value::from(1)), ("c", arr(vec![]))]);
        assert!(!deep_equal(&a, &b));
    }

    #[test]
    fn test_empty_object_and_array_not_equal() {
        assert!(!deep_equal(&Value::object::<&str, _>([]), &arr(vec![])));
    }

    #[test]
    fn test_arrays_different_length() {
        let a = arr(vec![Value::from(1), Value::from(2), Value::from(3)]);
        let b = arr(vec![Value::from(1), Value::from(2)]);
        assert!(!deep_equal(&a, &b));
    }

    #[test]
    fn test_dates_compare_by_instant() {
        let a = Value::date(DateTime::from_timestamp_millis(1000).unwrap());
        let b = Value::date(DateTime::from_timestamp_millis(1000).unwrap());
        let c = Value::date(DateTime::from_timestamp_millis(1001).unwrap());
        assert!(deep_equal(&a, &b));
        assert!(!deep_equal(&a, &c));
        assert!(!same_value_zero(&a, &b));
    }

    #[test]
    fn test_regexps_compare_by_source_and_flags() {
        let a = Value::regexp(RegExp::new("a+", "i").unwrap());
        let b = Value::regexp(RegExp::new("a+", "i").unwrap());
        let c = Value::regexp(RegExp::new("a+", "").unwrap());
        assert!(deep_equal(&a, &b));
        assert!(!deep_equal(&a, &c));
    }

    #[test]
    fn test_sets_compare_by_members() {
        let a = Value::set([Value::from(1), Value::from(2)].into_iter().collect::<SetValue>());
        let b = Value::set([Value::from(1), Value::from(2)].into_iter().collect::<SetValue>());
        assert!(deep_equal(&a, &b));
    }

    #[test]
    fn test_functions_compare_by_identity() {
        let f = Value::function(|_| Value::Null);
        let g = Value::function(|_| Value::Null);
        assert!(deep_equal(&f, &f.clone()));
        assert!(!deep_equal(&f, &g));
    }

    #[test]
    fn test_nested() {
        let make = || {
            Value::object([(
                "a",
                arr(vec![Value::object([("b", Value::from("c"))])]),
            )])
        };
        assert!(deep_equal(&make(), &make()));
    }
}
