//! Error types for VM collection and lifecycle operations.

use crate::vm::MAX_NAME_LEN;
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for VM collection and lifecycle operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The collection holds no VMs.
    #[error("VM collection is empty")]
    Empty,

    /// No VM with the given ID exists in the collection.
    #[error("VM not found: {0}")]
    NotFound(i32),

    /// The VM is already running.
    #[error("VM {0} is already running")]
    AlreadyRunning(i32),

    /// The VM is not running, so it cannot be stopped.
    #[error("VM {0} is not running")]
    NotRunning(i32),

    /// The VM name exceeds the maximum length.
    #[error("VM name too long: {len} bytes (max {max})", max = MAX_NAME_LEN)]
    NameTooLong { len: usize },

    /// Maximum number of VMs limit reached.
    #[error("Maximum VM limit ({0}) reached")]
    AtCapacity(usize),
}

impl Error {
    /// Check if this error indicates a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Check if this error indicates a lifecycle state mismatch.
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Error::AlreadyRunning(_) | Error::NotRunning(_))
    }
}
