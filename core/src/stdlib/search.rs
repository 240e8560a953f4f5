//! Search operations: `includes`, `indexOf` and `lastIndexOf`.
//!
//! All three take an optional start index that may be negative, meaning an
//! offset from the end. [`relative_start`] does that shared conversion; each
//! operation then applies its own out-of-range rule.
use protoseq_values::{
    Sequence, Value,
    equality::{is_nan_value, loose_equals, strict_equals},
};
use tracing::trace;

/// Converts a possibly negative start index to an absolute one by adding
/// `len` to negative values. The result may still be negative or `>= len`.
pub fn relative_start(len: usize, start: i64) -> i64 {
    let len = i64::try_from(len).unwrap_or(i64::MAX);
    if start < 0 { start.saturating_add(len) } else { start }
}

/// Resolves the start of an ascending search.
///
/// Returns `None` when the search is empty (`start >= len`). A start that is
/// still negative after adding `len` clamps to 0.
fn forward_start(len: usize, start: Option<i64>) -> Option<usize> {
    let start = relative_start(len, start.unwrap_or(0));
    let start = usize::try_from(start).unwrap_or(0);
    (start < len).then_some(start)
}

/// Resolves the start of a descending search.
///
/// Omitted, or `>= len`, starts at the last index. A start that is still
/// negative after adding `len` means there is nothing to search.
fn backward_start(len: usize, start: Option<i64>) -> Option<usize> {
    let last = len.checked_sub(1)?;
    let Some(start) = start else {
        return Some(last);
    };
    let start = usize::try_from(relative_start(len, start)).ok()?;
    Some(start.min(last))
}

/// Whether `needle` occurs in `seq`, comparing with loose equality except
/// that NaN matches NaN.
///
/// Holes read as `undefined`, so they match `undefined` and `null`.
///
/// # Edge Cases
///
/// - `start >= len` → `false`
/// - Negative `start` counts from the end; below `-len` it searches everything
///
/// # Examples
/// - `includes([1, 2, NaN], NaN)` → `true`
/// - `includes([1, 2, 3], "2")` → `true`
/// - `includes([1, 2, 3], 1, 1)` → `false`
pub fn includes(seq: &Sequence, needle: &Value, start: Option<i64>) -> bool {
    let Some(from) = forward_start(seq.len(), start) else {
        trace!(?start, len = seq.len(), "includes: start past end");
        return false;
    };
    let needle_is_nan = is_nan_value(needle);
    (from..seq.len()).any(|index| {
        let value = seq.lookup(index);
        loose_equals(&value, needle) || (needle_is_nan && is_nan_value(&value))
    })
}

/// The first index at or after `start` holding a value strictly equal to
/// `needle`, or `None` (the runtime's `-1`).
///
/// Holes are skipped. NaN is never found.
///
/// # Examples
/// - `indexOf([2, 9, 9], 9, 2)` → `2`
/// - `indexOf([2, 9, 9], 2, -1)` → `-1`
/// - `indexOf([2, 9, 9], 2, -3)` → `0`
/// - `indexOf([1, 2, NaN], NaN)` → `-1`
pub fn index_of(seq: &Sequence, needle: &Value, start: Option<i64>) -> Option<usize> {
    let from = forward_start(seq.len(), start)?;
    trace!(from, "indexOf: scanning");
    (from..seq.len()).find(|&index| {
        seq.get(index)
            .is_some_and(|value| strict_equals(value, needle))
    })
}

/// The last index at or before `start` holding a value loosely equal to
/// `needle`, or `None` (the runtime's `-1`).
///
/// Holes are skipped. NaN is never found.
///
/// # Edge Cases
///
/// - Omitted `start`, or `start >= len`, searches from the last index
/// - Negative `start` counts from the end; below `-len` nothing is searched
///
/// # Examples
/// - `lastIndexOf([2, 5, 9, 2], 2)` → `3`
/// - `lastIndexOf([2, 5, 9, 2], 2, -2)` → `0`
/// - `lastIndexOf([2, 5, 9, 2], 2, -6)` → `-1`
pub fn last_index_of(seq: &Sequence, needle: &Value, start: Option<i64>) -> Option<usize> {
    let from = backward_start(seq.len(), start)?;
    trace!(from, "lastIndexOf: scanning");
    (0..=from).rev().find(|&index| {
        seq.get(index)
            .is_some_and(|value| loose_equals(value, needle))
    })
}

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;
