//! Dynamic value model for protoseq.
//!
//! Values follow the language types of a dynamically typed array runtime:
//! `undefined`, `null`, booleans, numbers, strings, and the two reference
//! kinds, arrays ([`Sequence`]) and plain objects ([`Object`]).
//!
//! [`coerce`] and [`equality`] hold the type conversions and the strict,
//! loose and SameValueZero comparisons the array operations use.
#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

// Exported so that `seq!` can refer to `alloc` types from any crate.
#[doc(hidden)]
pub mod shim {
    pub use alloc::vec::Vec;
}

pub mod coerce;
pub mod dynamic;
pub mod equality;
pub mod traits;

pub use dynamic::{Object, Property, Sequence, Slot, Value};
pub use traits::{OwnEntries, ToBoolean};

/// Builds a [`Sequence`] from a list of elements.
///
/// Each element is converted with `Value::from`. An `_` in element position
/// leaves a hole at that index.
///
/// ```
/// use protoseq_values::{seq, Slot, Value};
///
/// let s = seq![1, _, "three"];
/// assert_eq!(s.len(), 3);
/// assert_eq!(s.slot(1), Slot::Hole);
/// assert_eq!(s.lookup(2), Value::from("three"));
/// ```
#[macro_export]
macro_rules! seq {
    (@push $slots:ident;) => {};
    (@push $slots:ident; _ $(, $($rest:tt)*)?) => {
        $slots.push(::core::option::Option::None);
        $($crate::seq!(@push $slots; $($rest)*);)?
    };
    (@push $slots:ident; $elem:expr $(, $($rest:tt)*)?) => {
        $slots.push(::core::option::Option::Some($crate::Value::from($elem)));
        $($crate::seq!(@push $slots; $($rest)*);)?
    };
    () => {
        $crate::Sequence::new()
    };
    ($($elems:tt)+) => {{
        let mut slots = $crate::shim::Vec::new();
        $crate::seq!(@push slots; $($elems)+);
        $crate::Sequence::from_slots(slots)
    }};
}

static_assertions::assert_impl_all!(Value: Clone, core::fmt::Debug, core::fmt::Display, PartialEq);
static_assertions::assert_impl_all!(Sequence: Clone, Default, PartialEq, OwnEntries);
static_assertions::assert_impl_all!(Object: Clone, Default, PartialEq, OwnEntries);
