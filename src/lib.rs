//! protoseq - array iteration and search primitives with exact runtime semantics
//!
//! # Overview
//!
//! protoseq reimplements the array primitives of a dynamically typed
//! runtime (`forEach`, `map`, `filter`, `some`, `every`, `reduce`,
//! `includes`, `indexOf`, `lastIndexOf`, `push`) and the own-entry
//! enumeration of `keys` and `values`, reproducing their traversal order,
//! hole skipping and equality rules. Typical uses are polyfills, teaching
//! material and sandboxed interpreters that cannot lean on a host's
//! built-ins.
//!
//! # Quick Start
//!
//! ```
//! use protoseq::prelude::*;
//!
//! // A sequence with a hole at index 1
//! let s = seq![1, _, 3];
//!
//! // map keeps the hole and never calls the callback for it
//! let doubled = s
//!     .map(|v, _, _| Ok::<_, ExecutionError>(v.as_number().unwrap_or(0.0) * 2.0))
//!     .unwrap();
//! assert_eq!(doubled, seq![2, _, 6]);
//!
//! // some/every visit holes, reading them as undefined
//! let has_undefined = s
//!     .some(|v, _, _| Ok::<_, ExecutionError>(v.is_undefined()))
//!     .unwrap();
//! assert!(has_undefined);
//!
//! // includes treats NaN as equal to NaN, indexOf does not
//! let nan = seq![f64::NAN];
//! assert!(nan.includes(&Value::nan(), None));
//! assert_eq!(nan.index_of(&Value::nan(), None), None);
//! ```
//!
//! # Errors
//!
//! Callbacks return `Result`, and the operations are generic over its error
//! type, so a callback's error reaches the caller unchanged. The only error
//! an operation raises on its own is [`ExecutionError::InvalidReduction`]:
//!
//! ```
//! use protoseq::prelude::*;
//!
//! let err = Sequence::new()
//!     .reduce(|acc, _, _, _| Ok::<_, ExecutionError>(acc), None)
//!     .unwrap_err();
//! assert_eq!(err, ExecutionError::InvalidReduction);
//! ```

// Re-export public API from protoseq_core
pub use protoseq_core::{ArrayMethods, ErrorKind, ExecutionError, InitialValueCheck, Presence};
pub use protoseq_core::{stdlib, traversal};

// Re-export the value model
pub use protoseq_values::{
    self as values, Object, OwnEntries, Property, Sequence, Slot, ToBoolean, Value, coerce,
    equality, seq,
};

/// The names most programs need, for glob import.
pub mod prelude {
    pub use protoseq_core::{ArrayMethods, ExecutionError};
    pub use protoseq_values::{Object, OwnEntries, Sequence, ToBoolean, Value, seq};
}
