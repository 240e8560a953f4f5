//! `Array` package: per-element operations, reduction and append.
//!
//! Every callback receives `(element, index, sequence)`, where `sequence` is
//! the instance being traversed. Callbacks return `Result`; the first `Err`
//! aborts the traversal and is returned to the caller as-is.
use crate::{ExecutionError, traversal::{Presence, walk, walk_all}};
use protoseq_values::{Sequence, ToBoolean, Value};
use tracing::{debug, trace};

// ============================================================================
// Iteration
// ============================================================================

/// Calls `callback` for each element in ascending index order.
///
/// Holes are skipped, and so are stored `undefined` and `null` values
/// ([`Presence::Loose`]).
///
/// # Examples
/// - `forEach([1, , 3], f)` calls `f(1, 0)` and `f(3, 2)`
/// - `forEach([1, undefined, null], f)` calls only `f(1, 0)`
pub fn for_each<F, E>(seq: &Sequence, mut callback: F) -> Result<(), E>
where
    F: FnMut(&Value, usize, &Sequence) -> Result<(), E>,
{
    for (index, value) in walk(seq, 0, Presence::Loose) {
        callback(value, index, seq)?;
    }
    Ok(())
}

/// Builds a new sequence of the same length holding `callback`'s result for
/// each present element.
///
/// # Edge Cases
///
/// - Holes stay holes in the output; the callback is not called for them
/// - A stored `undefined` is present, so it is mapped
/// - The input is not modified
///
/// # Examples
/// - `map([1, 2, 3], x => x * 2)` → `[2, 4, 6]`
/// - `map([1, , 3], x => x * 2)` → `[2, , 6]`
pub fn map<F, R, E>(seq: &Sequence, mut callback: F) -> Result<Sequence, E>
where
    F: FnMut(&Value, usize, &Sequence) -> Result<R, E>,
    R: Into<Value>,
{
    let mut output = Sequence::with_len(seq.len());
    for (index, value) in walk(seq, 0, Presence::Strict) {
        let mapped = callback(value, index, seq)?;
        output.set(index, mapped.into());
    }
    Ok(output)
}

/// Builds a new sequence of the present elements for which `callback` is
/// truthy, renumbered from index 0.
///
/// # Examples
/// - `filter([1, 2, 3, 4], x => x % 2 == 0)` → `[2, 4]`
/// - `filter([1, , 3], () => true)` → `[1, 3]`
pub fn filter<F, R, E>(seq: &Sequence, mut callback: F) -> Result<Sequence, E>
where
    F: FnMut(&Value, usize, &Sequence) -> Result<R, E>,
    R: ToBoolean,
{
    let mut output = Sequence::new();
    for (index, value) in walk(seq, 0, Presence::Strict) {
        if callback(value, index, seq)?.to_boolean() {
            output.append(value.clone());
        }
    }
    Ok(output)
}

/// Returns `true` as soon as `callback` is truthy for some index.
///
/// Every index below `len` is tested, holes included; a hole is passed as
/// `undefined`. No index after the first match is visited.
///
/// # Examples
/// - `some([1, 5, 2], x => x > 4)` → `true` (stops at index 1)
/// - `some([], f)` → `false`
pub fn some<F, R, E>(seq: &Sequence, mut callback: F) -> Result<bool, E>
where
    F: FnMut(&Value, usize, &Sequence) -> Result<R, E>,
    R: ToBoolean,
{
    for (index, value) in walk_all(seq) {
        if callback(&value, index, seq)?.to_boolean() {
            trace!(index, "some: matched");
            return Ok(true);
        }
    }
    Ok(false)
}

/// Returns `false` as soon as `callback` is falsy for some index.
///
/// Like [`some`], every index is tested, holes included.
///
/// # Examples
/// - `every([2, 4, 5, 6], x => x % 2 == 0)` → `false` (stops at index 2)
/// - `every([], f)` → `true`
pub fn every<F, R, E>(seq: &Sequence, mut callback: F) -> Result<bool, E>
where
    F: FnMut(&Value, usize, &Sequence) -> Result<R, E>,
    R: ToBoolean,
{
    for (index, value) in walk_all(seq) {
        if !callback(&value, index, seq)?.to_boolean() {
            trace!(index, "every: mismatched");
            return Ok(false);
        }
    }
    Ok(true)
}

// ============================================================================
// Reduction
// ============================================================================

/// How `reduce` decides whether an initial value was supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitialValueCheck {
    /// `Some(v)` is supplied, whatever `v` is.
    #[default]
    Presence,
    /// `Some(v)` counts as supplied only when `v` is truthy, so an initial
    /// `0`, `false` or `""` is ignored. Matches older polyfills that tested
    /// the argument with a plain conditional.
    Truthiness,
}

/// Folds the present elements into an accumulator.
///
/// Equivalent to [`reduce_with`] with [`InitialValueCheck::Presence`].
///
/// # Examples
/// - `reduce([1, 100], max, 50)` → `100`
/// - `reduce([1, 100], max)` → `100`
/// - `reduce([50], max)` → `50`, without calling `max`
/// - `reduce([], f, v)` → `v`, without calling `f`
/// - `reduce([], f)` → [`ExecutionError::InvalidReduction`]
pub fn reduce<F, E>(seq: &Sequence, callback: F, initial: Option<Value>) -> Result<Value, E>
where
    F: FnMut(Value, &Value, usize, &Sequence) -> Result<Value, E>,
    E: From<ExecutionError>,
{
    reduce_with(seq, callback, initial, InitialValueCheck::Presence)
}

/// Folds the present elements into an accumulator, with an explicit rule for
/// recognising the initial value.
///
/// `callback` receives `(accumulator, element, index, sequence)` and returns
/// the next accumulator.
///
/// # Edge Cases
///
/// - Empty, no initial value: fails with [`ExecutionError::InvalidReduction`]
/// - Empty, with initial value: returns it, callback never called
/// - Length 1, no initial value: returns element 0, callback never called
/// - Otherwise the accumulator starts at the initial value (scan from index
///   0) or at element 0 (scan from index 1); holes are skipped
pub fn reduce_with<F, E>(
    seq: &Sequence,
    mut callback: F,
    initial: Option<Value>,
    check: InitialValueCheck,
) -> Result<Value, E>
where
    F: FnMut(Value, &Value, usize, &Sequence) -> Result<Value, E>,
    E: From<ExecutionError>,
{
    let initial = match check {
        InitialValueCheck::Presence => initial,
        InitialValueCheck::Truthiness => initial.filter(ToBoolean::to_boolean),
    };

    let (mut accumulator, start) = match initial {
        Some(value) => (value, 0),
        None if seq.is_empty() => {
            debug!("reduce of empty sequence with no initial value");
            return Err(ExecutionError::InvalidReduction.into());
        }
        None => (seq.lookup(0), 1),
    };
    trace!(start, len = seq.len(), "reduce: seeded accumulator");

    for (index, value) in walk(seq, start, Presence::Strict) {
        accumulator = callback(accumulator, value, index, seq)?;
    }
    Ok(accumulator)
}

// ============================================================================
// Append
// ============================================================================

/// Appends `values` in order at consecutive indices starting at `len`, and
/// returns the new length.
///
/// # Examples
/// - `push(["a", "b"], "c")` → `3`, sequence is now `["a", "b", "c"]`
/// - `push([1], 2, 3)` → `3`, sequence is now `[1, 2, 3]`
/// - `push([1, , ], 2)` → `3`; the trailing hole stays
pub fn push<I>(seq: &mut Sequence, values: I) -> usize
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    for value in values {
        seq.append(value.into());
    }
    seq.len()
}

#[cfg(test)]
#[path = "array_test.rs"]
mod array_test;
