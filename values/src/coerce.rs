//! Type conversions used by loose equality and string rendering.
//!
//! Only the conversions the array operations need are implemented:
//! to-number, to-string and to-primitive. Arrays and plain objects have no
//! user-defined conversion hooks, so to-primitive is always their string
//! form.

use alloc::{
    format,
    string::{String, ToString},
};

use crate::Value;

/// Converts a value to a number.
///
/// # Examples
/// - `undefined` → `NaN`
/// - `null` → `0`
/// - `true` → `1`
/// - `" 42 "` → `42`
/// - `[7]` → `7` (via its string form `"7"`)
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Undefined => f64::NAN,
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => *n,
        Value::String(s) => string_to_number(s),
        Value::Array(_) | Value::Object(_) => string_to_number(&to_primitive(value)),
    }
}

// NEL is Unicode whitespace but is not trimmed by numeric parsing.
fn is_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Parses a string as a numeric literal.
///
/// Surrounding whitespace is ignored and an empty string is `0`. Accepts
/// decimal literals with optional sign, fraction and exponent, the
/// `Infinity` spellings, and unsigned `0x`/`0o`/`0b` integers. Anything else
/// is `NaN`.
pub fn string_to_number(s: &str) -> f64 {
    let s = s.trim_matches(is_whitespace);
    if s.is_empty() {
        return 0.0;
    }
    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = s.strip_prefix(prefix) {
            return parse_radix(digits, radix);
        }
    }

    // `f64::from_str` also accepts "inf" and "nan" spellings, which are not
    // numeric literals here.
    let is_decimal = s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !is_decimal {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    let mut result = 0.0;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => result = result * f64::from(radix) + f64::from(d),
            None => return f64::NAN,
        }
    }
    result
}

/// Formats a number the way the runtime's number-to-string does.
///
/// # Examples
/// - `1.0` → `"1"`
/// - `-0.0` → `"0"`
/// - `0.5` → `"0.5"`
/// - `1e21` → `"1e+21"`
/// - `1.5e-7` → `"1.5e-7"`
pub fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    if n.is_infinite() {
        let name = if n > 0.0 { "Infinity" } else { "-Infinity" };
        return name.to_string();
    }

    let magnitude = if n < 0.0 { -n } else { n };
    if (1e-6..1e21).contains(&magnitude) {
        // Display on f64 is the shortest round-trip form without exponent.
        return format!("{n}");
    }

    let exponential = format!("{n:e}");
    match exponential.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => exponential,
    }
}

/// Converts a value to its primitive string form.
///
/// Arrays join their elements with `,`; holes, `undefined` and `null`
/// contribute empty strings. Plain objects are `"[object Object]"`.
/// Primitive values convert with [`to_string`].
pub fn to_primitive(value: &Value) -> String {
    match value {
        Value::Array(seq) => seq.join(","),
        Value::Object(_) => "[object Object]".to_string(),
        _ => to_string(value),
    }
}

/// Converts a value to a string.
pub fn to_string(value: &Value) -> String {
    match value {
        Value::Undefined => "undefined".to_string(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_to_string(*n),
        Value::String(s) => s.to_string(),
        Value::Array(_) | Value::Object(_) => to_primitive(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq;

    #[test]
    fn test_string_to_number() {
        assert_eq!(string_to_number(""), 0.0);
        assert_eq!(string_to_number("  \n"), 0.0);
        assert_eq!(string_to_number(" 42 "), 42.0);
        assert_eq!(string_to_number("-1.5e2"), -150.0);
        assert_eq!(string_to_number(".5"), 0.5);
        assert_eq!(string_to_number("0x1F"), 31.0);
        assert_eq!(string_to_number("0b101"), 5.0);
        assert_eq!(string_to_number("-Infinity"), f64::NEG_INFINITY);
        assert!(string_to_number("inf").is_nan());
        assert!(string_to_number("nan").is_nan());
        assert!(string_to_number("12px").is_nan());
        assert!(string_to_number("0x").is_nan());
        assert!(string_to_number("-0x10").is_nan());
    }

    #[test]
    fn test_string_to_number_whitespace_set() {
        assert_eq!(string_to_number("\u{FEFF}\u{A0}7\u{2028}\t"), 7.0);
        assert!(string_to_number("\u{85}1").is_nan());
        assert!(string_to_number("1\u{85}").is_nan());
    }

    #[test]
    fn test_number_to_string() {
        assert_eq!(number_to_string(1.0), "1");
        assert_eq!(number_to_string(-0.0), "0");
        assert_eq!(number_to_string(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(number_to_string(1e21), "1e+21");
        assert_eq!(number_to_string(123456789012345680000.0), "123456789012345680000");
        assert_eq!(number_to_string(1.5e-7), "1.5e-7");
        assert_eq!(number_to_string(0.000001), "0.000001");
        assert_eq!(number_to_string(f64::NAN), "NaN");
        assert_eq!(number_to_string(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_to_primitive_joins_arrays() {
        let nested = seq![1, _, Value::Null, seq![2, 3], "x"];
        assert_eq!(to_primitive(&Value::from(nested)), "1,,,2,3,x");
        assert_eq!(to_primitive(&Value::from(crate::Object::new())), "[object Object]");
    }

    #[test]
    fn test_to_number_of_references() {
        assert_eq!(to_number(&Value::from(seq![7])), 7.0);
        assert_eq!(to_number(&Value::from(seq![])), 0.0);
        assert!(to_number(&Value::from(seq![1, 2])).is_nan());
        assert_eq!(to_number(&Value::Bool(true)), 1.0);
        assert!(to_number(&Value::Undefined).is_nan());
    }
}
