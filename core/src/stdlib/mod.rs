//! Standard library packages.
//!
//! - Array: iteration, reduction and append ([`array`])
//! - Array search: `includes`, `indexOf`, `lastIndexOf` ([`search`])
//! - Object: own-entry enumeration ([`object`])
//!
//! The packages are free functions taking the receiver as their first
//! argument. [`ArrayMethods`] exposes the array operations with method syntax
//! on [`Sequence`], the way they are called on an array in the runtime.

use crate::ExecutionError;
use protoseq_values::{Sequence, ToBoolean, Value};

pub mod array;
pub mod object;
pub mod search;

// Re-export for convenience
pub use array::{InitialValueCheck, every, filter, for_each, map, push, reduce, reduce_with, some};
pub use object::{entries, keys, values};
pub use search::{includes, index_of, last_index_of};

/// Array operations in method form.
///
/// # Example
///
/// ```
/// use protoseq_core::{ArrayMethods, ExecutionError};
/// use protoseq_core::values::{Value, seq};
///
/// let mut s = seq![3, 1, 2];
/// assert_eq!(s.push([4]), 4);
///
/// let total = s
///     .reduce(|acc, v, _, _| {
///         let sum = acc.as_number().unwrap_or(0.0) + v.as_number().unwrap_or(0.0);
///         Ok::<_, ExecutionError>(Value::from(sum))
///     }, None)
///     .unwrap();
/// assert_eq!(total, Value::from(10));
/// assert_eq!(s.index_of(&Value::from(2), None), Some(2));
/// ```
pub trait ArrayMethods {
    fn for_each<F, E>(&self, callback: F) -> Result<(), E>
    where
        F: FnMut(&Value, usize, &Sequence) -> Result<(), E>;

    fn map<F, R, E>(&self, callback: F) -> Result<Sequence, E>
    where
        F: FnMut(&Value, usize, &Sequence) -> Result<R, E>,
        R: Into<Value>;

    fn filter<F, R, E>(&self, callback: F) -> Result<Sequence, E>
    where
        F: FnMut(&Value, usize, &Sequence) -> Result<R, E>,
        R: ToBoolean;

    fn some<F, R, E>(&self, callback: F) -> Result<bool, E>
    where
        F: FnMut(&Value, usize, &Sequence) -> Result<R, E>,
        R: ToBoolean;

    fn every<F, R, E>(&self, callback: F) -> Result<bool, E>
    where
        F: FnMut(&Value, usize, &Sequence) -> Result<R, E>,
        R: ToBoolean;

    fn reduce<F, E>(&self, callback: F, initial: Option<Value>) -> Result<Value, E>
    where
        F: FnMut(Value, &Value, usize, &Sequence) -> Result<Value, E>,
        E: From<ExecutionError>;

    fn includes(&self, needle: &Value, start: Option<i64>) -> bool;

    fn index_of(&self, needle: &Value, start: Option<i64>) -> Option<usize>;

    fn last_index_of(&self, needle: &Value, start: Option<i64>) -> Option<usize>;

    /// Appends `values` and returns the new length.
    fn push<I>(&mut self, values: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<Value>;
}

impl ArrayMethods for Sequence {
    fn for_each<F, E>(&self, callback: F) -> Result<(), E>
    where
        F: FnMut(&Value, usize, &Sequence) -> Result<(), E>,
    {
        array::for_each(self, callback)
    }

    fn map<F, R, E>(&self, callback: F) -> Result<Sequence, E>
    where
        F: FnMut(&Value, usize, &Sequence) -> Result<R, E>,
        R: Into<Value>,
    {
        array::map(self, callback)
    }

    fn filter<F, R, E>(&self, callback: F) -> Result<Sequence, E>
    where
        F: FnMut(&Value, usize, &Sequence) -> Result<R, E>,
        R: ToBoolean,
    {
        array::filter(self, callback)
    }

    fn some<F, R, E>(&self, callback: F) -> Result<bool, E>
    where
        F: FnMut(&Value, usize, &Sequence) -> Result<R, E>,
        R: ToBoolean,
    {
        array::some(self, callback)
    }

    fn every<F, R, E>(&self, callback: F) -> Result<bool, E>
    where
        F: FnMut(&Value, usize, &Sequence) -> Result<R, E>,
        R: ToBoolean,
    {
        array::every(self, callback)
    }

    fn reduce<F, E>(&self, callback: F, initial: Option<Value>) -> Result<Value, E>
    where
        F: FnMut(Value, &Value, usize, &Sequence) -> Result<Value, E>,
        E: From<ExecutionError>,
    {
        array::reduce(self, callback, initial)
    }

    fn includes(&self, needle: &Value, start: Option<i64>) -> bool {
        search::includes(self, needle, start)
    }

    fn index_of(&self, needle: &Value, start: Option<i64>) -> Option<usize> {
        search::index_of(self, needle, start)
    }

    fn last_index_of(&self, needle: &Value, start: Option<i64>) -> Option<usize> {
        search::last_index_of(self, needle, start)
    }

    fn push<I>(&mut self, values: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        array::push(self, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use protoseq_values::seq;

    #[test]
    fn test_methods_delegate_to_packages() {
        let s = seq![1, _, 3];

        let doubled = s
            .map(|v, _, _| Ok::<_, ExecutionError>(v.as_number().unwrap_or(0.0) * 2.0))
            .unwrap();
        assert_eq!(doubled, seq![2, _, 6]);

        let big = s
            .filter(|v, _, _| Ok::<_, ExecutionError>(v.as_number().is_some_and(|n| n > 1.0)))
            .unwrap();
        assert_eq!(big, seq![3]);

        assert!(s.some(|v, _, _| Ok::<_, ExecutionError>(v.is_undefined())).unwrap());
        assert!(!s.every(|v, _, _| Ok::<_, ExecutionError>(v.as_number().is_some())).unwrap());
        assert!(s.includes(&Value::Undefined, None));
        assert_eq!(s.last_index_of(&Value::from(1), None), Some(0));
    }

    #[test]
    fn test_push_method() {
        let mut s = seq!["a"];

        assert_eq!(s.push(["b", "c"]), 3);
        assert_eq!(s, seq!["a", "b", "c"]);
    }
}
