//! Equality predicates of the runtime.
//!
//! `strict_equals` and `loose_equals` follow the runtime's `===` and `==`.
//! Neither treats NaN as equal to itself; callers that need NaN to match
//! combine them with [`is_nan_value`], or use [`same_value_zero`].

use alloc::rc::Rc;

use crate::{Value, coerce};

/// True only for a number that is NaN. No conversion is applied, so a
/// non-numeric string is not NaN here.
pub fn is_nan_value(value: &Value) -> bool {
    matches!(value, Value::Number(n) if n.is_nan())
}

/// Equality without type conversion.
///
/// # Edge Cases
///
/// - `NaN` is not equal to `NaN`
/// - `+0` equals `-0`
/// - Arrays and objects are equal only to themselves (same reference)
pub fn strict_equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => Rc::ptr_eq(x, y),
        (Value::Object(x), Value::Object(y)) => Rc::ptr_eq(x, y),
        _ => false,
    }
}

/// Equality with type conversion.
///
/// # Edge Cases
///
/// - `null == undefined`, but neither equals anything else (`null != 0`)
/// - A number compared to a string converts the string: `1 == "1"`
/// - Booleans convert to numbers first: `true == "1"`, `false == ""`
/// - An array or object compared to a number or string converts to its
///   primitive string: `[1, 2] == "1,2"`, `[] == 0`
/// - Two arrays/objects compare by reference, as with strict equality
/// - `NaN` is not equal to `NaN`
pub fn loose_equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined | Value::Null, Value::Undefined | Value::Null) => true,
        (Value::Undefined | Value::Null, _) | (_, Value::Undefined | Value::Null) => false,

        (Value::Number(x), Value::String(y)) => *x == coerce::string_to_number(y),
        (Value::String(x), Value::Number(y)) => coerce::string_to_number(x) == *y,

        (Value::Bool(_), Value::Bool(_)) => strict_equals(a, b),
        (Value::Bool(_), _) => loose_equals(&Value::Number(coerce::to_number(a)), b),
        (_, Value::Bool(_)) => loose_equals(a, &Value::Number(coerce::to_number(b))),

        (Value::Array(_) | Value::Object(_), Value::Number(_) | Value::String(_)) => {
            loose_equals(&Value::from(coerce::to_primitive(a)), b)
        }
        (Value::Number(_) | Value::String(_), Value::Array(_) | Value::Object(_)) => {
            loose_equals(a, &Value::from(coerce::to_primitive(b)))
        }

        _ => strict_equals(a, b),
    }
}

/// Strict equality, except that NaN equals NaN.
pub fn same_value_zero(a: &Value, b: &Value) -> bool {
    strict_equals(a, b) || (is_nan_value(a) && is_nan_value(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Object, seq};

    #[test]
    fn test_strict_equals() {
        assert!(strict_equals(&Value::from(1), &Value::from(1.0)));
        assert!(strict_equals(&Value::from(0.0), &Value::from(-0.0)));
        assert!(!strict_equals(&Value::nan(), &Value::nan()));
        assert!(!strict_equals(&Value::from(1), &Value::from("1")));
        assert!(!strict_equals(&Value::Null, &Value::Undefined));

        let shared = Value::from(seq![1]);
        assert!(strict_equals(&shared, &shared.clone()));
        assert!(!strict_equals(&shared, &Value::from(seq![1])));
    }

    #[test]
    fn test_loose_equals_nullish() {
        assert!(loose_equals(&Value::Null, &Value::Undefined));
        assert!(!loose_equals(&Value::Null, &Value::from(0)));
        assert!(!loose_equals(&Value::Undefined, &Value::from(false)));
        assert!(!loose_equals(&Value::Undefined, &Value::from("")));
    }

    #[test]
    fn test_loose_equals_coerces() {
        assert!(loose_equals(&Value::from(1), &Value::from("1")));
        assert!(loose_equals(&Value::from(" 2 "), &Value::from(2)));
        assert!(loose_equals(&Value::from(true), &Value::from("1")));
        assert!(loose_equals(&Value::from(false), &Value::from(0)));
        assert!(loose_equals(&Value::from(false), &Value::from("")));
        assert!(!loose_equals(&Value::from(true), &Value::from(2)));
        assert!(loose_equals(&Value::from(seq![1, 2]), &Value::from("1,2")));
        assert!(loose_equals(&Value::from(seq![]), &Value::from(0)));
        assert!(loose_equals(&Value::from(seq![]), &Value::from(false)));
        assert!(loose_equals(&Value::from(Object::new()), &Value::from("[object Object]")));
        assert!(!loose_equals(&Value::from(seq![1]), &Value::from(seq![1])));
        assert!(!loose_equals(&Value::from("a"), &Value::from("b")));
        assert!(!loose_equals(&Value::from("\u{85}1"), &Value::from(1)));
    }

    #[test]
    fn test_nan_predicates() {
        assert!(!loose_equals(&Value::nan(), &Value::nan()));
        assert!(is_nan_value(&Value::nan()));
        assert!(!is_nan_value(&Value::from("abc")));
        assert!(same_value_zero(&Value::nan(), &Value::nan()));
        assert!(same_value_zero(&Value::from(0.0), &Value::from(-0.0)));
    }
}
