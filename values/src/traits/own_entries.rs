use alloc::{borrow::Cow, string::ToString};

use crate::{Object, Sequence, Value};

/// A container that can list its own enumerable entries.
///
/// Entries come out in the container's own enumeration order. Inherited
/// entries are never included.
pub trait OwnEntries {
    fn own_enumerable_entries(&self) -> impl Iterator<Item = (Cow<'_, str>, &Value)>;
}

/// Own enumerable properties in insertion order.
impl OwnEntries for Object {
    fn own_enumerable_entries(&self) -> impl Iterator<Item = (Cow<'_, str>, &Value)> {
        self.own_properties()
            .filter(|(_, property)| property.enumerable)
            .map(|(key, property)| (Cow::Borrowed(key), &property.value))
    }
}

/// Present indices in ascending order, keyed by their decimal form. Holes
/// are not entries.
impl OwnEntries for Sequence {
    fn own_enumerable_entries(&self) -> impl Iterator<Item = (Cow<'_, str>, &Value)> {
        self.iter_present()
            .map(|(index, value)| (Cow::Owned(index.to_string()), value))
    }
}

impl<T: OwnEntries + ?Sized> OwnEntries for &T {
    fn own_enumerable_entries(&self) -> impl Iterator<Item = (Cow<'_, str>, &Value)> {
        (**self).own_enumerable_entries()
    }
}
