//! Errors raised by the operations themselves.
//!
//! Callback failures are not represented here: operations are generic over
//! the callback's error type and hand it back unchanged. The
//! [`ExecutionError::Callback`] variant exists for callers that have no error
//! type of their own.

use crate::String;
use thiserror::Error;

/// Classification of an [`ExecutionError`], mirroring the runtime's error
/// constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The runtime would throw a `TypeError`.
    TypeError,
    /// Raised by a caller-supplied callback.
    Callback,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// `reduce` was called on an empty sequence without an initial value.
    #[error("TypeError: Reduce of empty array with no initial value")]
    InvalidReduction,

    /// A callback failed with the given message.
    #[error("{0}")]
    Callback(String),
}

impl ExecutionError {
    pub fn callback(message: impl Into<String>) -> Self {
        ExecutionError::Callback(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ExecutionError::InvalidReduction => ErrorKind::TypeError,
            ExecutionError::Callback(_) => ErrorKind::Callback,
        }
    }
}
