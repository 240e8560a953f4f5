use alloc::{rc::Rc, string::String};
use core::fmt;

use crate::coerce;

use super::{Object, Sequence};

/// A dynamically typed value.
///
/// `Undefined` is the runtime's "no value" sentinel. It is distinct from a
/// hole: a [`Sequence`] slot holding `Undefined` is still present.
///
/// Arrays and objects are reference values. Cloning a `Value` shares the
/// referent, and [`strict_equals`](crate::equality::strict_equals) compares
/// them by identity.
///
/// # Example
///
/// ```
/// use protoseq_values::Value;
///
/// let v = Value::from(42);
/// assert_eq!(v.as_number(), Some(42.0));
/// assert_eq!(v.type_name(), "number");
/// ```
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(Rc<str>),
    Array(Rc<Sequence>),
    Object(Rc<Object>),
}

impl Value {
    /// Create a number value.
    pub fn number(value: f64) -> Self {
        Value::Number(value)
    }

    /// Create a string value.
    pub fn string(value: impl AsRef<str>) -> Self {
        Value::String(Rc::from(value.as_ref()))
    }

    /// Wrap a sequence as an array value.
    pub fn array(sequence: Sequence) -> Self {
        Value::Array(Rc::new(sequence))
    }

    /// Wrap an object as an object value.
    pub fn object(object: Object) -> Self {
        Value::Object(Rc::new(object))
    }

    pub fn nan() -> Self {
        Value::Number(f64::NAN)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Sequence> {
        match self {
            Value::Array(seq) => Some(seq.as_ref()),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) => Some(obj.as_ref()),
            _ => None,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// True for `undefined` and `null`, the two values that loosely equal
    /// `undefined`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    /// True for arrays and objects.
    pub fn is_reference(&self) -> bool {
        matches!(self, Value::Array(_) | Value::Object(_))
    }

    /// The name `typeof` would report, except that `null` is `"null"`.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) | Value::Object(_) => "object",
        }
    }
}

/// Structural comparison for host-side assertions.
///
/// NaN equals NaN and arrays/objects compare by contents. The runtime
/// equality rules live in [`crate::equality`].
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => Rc::ptr_eq(a, b) || a == b,
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b) || a == b,
            _ => false,
        }
    }
}

/// Renders the runtime's string conversion of the value.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => f.write_str(&coerce::number_to_string(*n)),
            Value::String(s) => f.write_str(s),
            Value::Array(_) | Value::Object(_) => f.write_str(&coerce::to_primitive(self)),
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::Number(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::string(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(Rc::from(value))
    }
}

impl From<Sequence> for Value {
    fn from(value: Sequence) -> Self {
        Value::array(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::object(value)
    }
}
