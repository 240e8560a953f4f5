//! `Object` package: own-entry enumeration.
//!
//! Works on anything implementing [`OwnEntries`]: plain objects, and
//! sequences (whose keys are their present indices).
use protoseq_values::{OwnEntries, Sequence, Value};

/// The own enumerable keys of `container`, as a sequence of strings.
///
/// # Examples
/// - `keys({a: 1, b: 2})` → `["a", "b"]`
/// - `keys(["x", , "z"])` → `["0", "2"]`
pub fn keys(container: &impl OwnEntries) -> Sequence {
    container
        .own_enumerable_entries()
        .map(|(key, _)| Value::string(key))
        .collect()
}

/// The values of the own enumerable entries of `container`, in the same
/// order as [`keys`].
///
/// # Examples
/// - `values({a: 1, b: 2})` → `[1, 2]`
pub fn values(container: &impl OwnEntries) -> Sequence {
    container
        .own_enumerable_entries()
        .map(|(_, value)| value.clone())
        .collect()
}

/// The own enumerable entries of `container` as `[key, value]` pairs.
///
/// # Examples
/// - `entries({a: 1})` → `[["a", 1]]`
pub fn entries(container: &impl OwnEntries) -> Sequence {
    container
        .own_enumerable_entries()
        .map(|(key, value)| {
            let pair: Sequence = [Value::string(key), value.clone()].into_iter().collect();
            Value::from(pair)
        })
        .collect()
}

#[cfg(test)]
#[path = "object_test.rs"]
mod object_test;
