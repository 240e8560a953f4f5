use alloc::{string::String, vec::Vec};

use super::Value;

/// The state of a single index of a [`Sequence`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slot<'a> {
    /// A stored value, which may itself be `undefined`.
    Present(&'a Value),
    /// An index below `len` that never had a value stored, or was deleted.
    Hole,
    /// An index at or past `len`.
    OutOfRange,
}

/// An integer-indexed container that may contain holes.
///
/// The length is the number of slots, present or not. Writing past the end
/// grows the sequence and fills the gap with holes, so `len` is always at
/// least one more than the largest index written.
///
/// # Examples
///
/// ```
/// use protoseq_values::{Sequence, Slot, Value};
///
/// let mut s = Sequence::from(vec![Value::from(1), Value::Undefined]);
/// s.set(3, Value::from(4));
///
/// assert_eq!(s.len(), 4);
/// assert!(s.is_present(1));
/// assert_eq!(s.slot(2), Slot::Hole);
/// assert_eq!(s.lookup(2), Value::Undefined);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sequence {
    slots: Vec<Option<Value>>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sequence of `len` holes.
    pub fn with_len(len: usize) -> Self {
        let mut slots = Vec::with_capacity(len);
        slots.resize(len, None);
        Self { slots }
    }

    /// Build a sequence from raw slots, `None` being a hole.
    pub fn from_slots(slots: Vec<Option<Value>>) -> Self {
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slot(&self, index: usize) -> Slot<'_> {
        match self.slots.get(index) {
            Some(Some(value)) => Slot::Present(value),
            Some(None) => Slot::Hole,
            None => Slot::OutOfRange,
        }
    }

    /// The stored value at `index`, if the slot is present.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Reads `index` the way an element access does: holes and out-of-range
    /// indices read as `undefined`.
    pub fn lookup(&self, index: usize) -> Value {
        self.get(index).cloned().unwrap_or_default()
    }

    /// Whether `index` holds a stored value. A stored `undefined` counts.
    pub fn is_present(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Number of present slots.
    pub fn count_present(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn iter_slots(&self) -> impl Iterator<Item = Slot<'_>> + '_ {
        self.slots.iter().map(|slot| match slot {
            Some(value) => Slot::Present(value),
            None => Slot::Hole,
        })
    }

    /// Iterates present slots as `(index, value)` in ascending order.
    pub fn iter_present(&self) -> impl Iterator<Item = (usize, &Value)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|value| (index, value)))
    }

    /// Stores `value` at `index`, growing the sequence with holes if needed.
    pub fn set(&mut self, index: usize, value: Value) {
        if index >= self.slots.len() {
            self.slots.resize(index + 1, None);
        }
        self.slots[index] = Some(value);
    }

    /// Turns `index` into a hole without changing the length.
    ///
    /// Returns the value that was stored there, if any.
    pub fn delete(&mut self, index: usize) -> Option<Value> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Truncates, or extends with holes, to exactly `len` slots.
    pub fn set_len(&mut self, len: usize) {
        self.slots.resize(len, None);
    }

    /// Stores `value` at index `len` and returns the new length.
    pub fn append(&mut self, value: Value) -> usize {
        self.slots.push(Some(value));
        self.slots.len()
    }

    /// Joins the string forms of all slots with `separator`.
    ///
    /// Holes, `undefined` and `null` contribute an empty string.
    pub fn join(&self, separator: &str) -> String {
        let mut out = String::new();
        for (index, slot) in self.slots.iter().enumerate() {
            if index > 0 {
                out.push_str(separator);
            }
            match slot {
                Some(value) if !value.is_nullish() => out.push_str(&crate::coerce::to_string(value)),
                _ => {}
            }
        }
        out
    }
}

impl From<Vec<Value>> for Sequence {
    fn from(values: Vec<Value>) -> Self {
        Self {
            slots: values.into_iter().map(Some).collect(),
        }
    }
}

impl FromIterator<Value> for Sequence {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().map(Some).collect(),
        }
    }
}

impl Extend<Value> for Sequence {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        self.slots.extend(iter.into_iter().map(Some));
    }
}
