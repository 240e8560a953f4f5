use crate::Value;

/// Truthiness, as used by conditionals and by predicate callbacks.
///
/// Implemented for `bool` as well, so predicate callbacks can return a plain
/// Rust boolean instead of a [`Value`].
pub trait ToBoolean {
    fn to_boolean(&self) -> bool;
}

impl ToBoolean for bool {
    fn to_boolean(&self) -> bool {
        *self
    }
}

/// `undefined`, `null`, `false`, `±0`, `NaN` and `""` are falsy. Every array
/// and object is truthy, even an empty one.
impl ToBoolean for Value {
    fn to_boolean(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => !(*n == 0.0 || n.is_nan()),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}

impl<T: ToBoolean + ?Sized> ToBoolean for &T {
    fn to_boolean(&self) -> bool {
        (**self).to_boolean()
    }
}
