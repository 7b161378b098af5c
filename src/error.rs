//! Error types for ringstage.

use thiserror::Error;

/// Main error type for all buffer operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RingError {
    /// Buffer initialized with zero-length storage.
    #[error("buffer capacity must be non-zero")]
    InvalidCapacity,

    /// Non-overwriting add with insufficient space.
    ///
    /// The buffer is left completely unchanged - callers may retry
    /// once space is freed by draining.
    #[error("buffer full: need {needed} bytes, {free} free")]
    BufferFull {
        /// Bytes the rejected add needed.
        needed: usize,
        /// Free bytes at the time of the add.
        free: usize,
    },
}

/// Result type alias using RingError.
pub type Result<T> = std::result::Result<T, RingError>;
