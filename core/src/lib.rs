//! Sequence iteration, reduction and search primitives.
//!
//! The operations here reproduce the observable contract of an array
//! runtime's built-in `forEach`, `map`, `filter`, `some`, `every`, `reduce`,
//! `includes`, `indexOf`, `lastIndexOf` and `push`, plus the own-entry
//! enumeration of `keys` and `values`. They work on the value model from
//! `protoseq-values`, which is re-exported as [`values`].
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

// This works on std and no_std and is harmless.
extern crate alloc;

#[doc(hidden)]
pub mod shim {
    pub use alloc::{string::String, vec::Vec};
}

#[allow(unused_imports)]
pub(crate) use shim::*;

pub mod error;
pub mod stdlib;
pub mod traversal;

pub use protoseq_values as values;

pub use error::{ErrorKind, ExecutionError};
pub use stdlib::{ArrayMethods, InitialValueCheck};
pub use traversal::Presence;
