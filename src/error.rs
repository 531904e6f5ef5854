//! Error type for heap operations
//!
//! All heap errors are usage errors detected at the API boundary before any
//! mutation takes place. They are reported as recoverable values so that an
//! interactive caller can surface them and keep going; none of them
//! terminates the process.

use std::fmt;

/// Error type for heap operations
///
/// Every variant is raised before the heap is touched, so a failed
/// operation always leaves the heap exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// Insert was called while the heap is at its configured capacity limit
    Overflow,
    /// Extract-max was called on an empty heap
    Underflow,
    /// Increase-key was called with a key smaller than the current key
    InvalidKey,
    /// The index is not in `0..len`
    IndexOutOfBounds,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Overflow => write!(f, "heap overflow: capacity limit reached"),
            HeapError::Underflow => write!(f, "heap underflow: heap is empty"),
            HeapError::InvalidKey => {
                write!(f, "new key is smaller than current key")
            }
            HeapError::IndexOutOfBounds => write!(f, "index out of bounds"),
        }
    }
}

impl std::error::Error for HeapError {}
