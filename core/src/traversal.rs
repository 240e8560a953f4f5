//! Shared ascending walk over a [`Sequence`].
//!
//! Every per-element operation goes through this module so that hole
//! handling is decided in one place. There are two ways to walk:
//!
//! - [`walk`] visits only the indices whose slot passes a [`Presence`]
//!   policy, handing out the stored value by reference.
//! - [`walk_all`] visits every index below `len`, reading holes as
//!   `undefined`. `some` and `every` use this walk.

use protoseq_values::{Sequence, Slot, Value, equality::loose_equals};
use tracing::trace;

/// Which slots a [`walk`] visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presence {
    /// Skip holes and any present value that loosely equals `undefined`,
    /// so a stored `undefined` or `null` is skipped like a hole.
    Loose,
    /// Skip holes only. A stored `undefined` is visited.
    #[default]
    Strict,
}

/// Whether a walk under `presence` visits `index`.
///
/// Out-of-range indices are never visitable.
pub fn is_visitable(seq: &Sequence, index: usize, presence: Presence) -> bool {
    match (seq.slot(index), presence) {
        (Slot::Present(_), Presence::Strict) => true,
        (Slot::Present(value), Presence::Loose) => !loose_equals(value, &Value::Undefined),
        (Slot::Hole | Slot::OutOfRange, _) => false,
    }
}

/// Walks `seq` from `start` in ascending order, yielding `(index, value)` for
/// each slot `presence` accepts.
///
/// `len` is read once, when the walk starts.
pub fn walk(seq: &Sequence, start: usize, presence: Presence) -> Walk<'_> {
    Walk {
        seq,
        index: start,
        end: seq.len(),
        presence,
    }
}

/// Iterator returned by [`walk`].
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    seq: &'a Sequence,
    index: usize,
    end: usize,
    presence: Presence,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.end {
            let index = self.index;
            self.index += 1;
            if !is_visitable(self.seq, index, self.presence) {
                trace!(index, presence = ?self.presence, "skipping slot");
                continue;
            }
            if let Some(value) = self.seq.get(index) {
                return Some((index, value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.end.saturating_sub(self.index)))
    }
}

/// Walks every index of `seq` in ascending order, yielding the value an
/// element read would produce. Holes yield `undefined`.
pub fn walk_all(seq: &Sequence) -> impl Iterator<Item = (usize, Value)> + '_ {
    (0..seq.len()).map(move |index| (index, seq.lookup(index)))
}

#[cfg(test)]
#[path = "traversal_test.rs"]
mod traversal_test;
