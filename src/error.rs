//! Error types for cell operations.
//!
//! Every operation on a [`SharedCell`](crate::SharedCell) checks its
//! [`Deadline`](crate::Deadline) once, before touching the lock. The errors here describe
//! why that entry check refused the call.

/// Errors that can occur when entering a cell operation
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CellError {
    /// The deadline instant had already passed when the operation was entered
    DeadlineExceeded,
    /// The deadline was cancelled explicitly before the operation was entered
    Cancelled,
}

impl std::fmt::Display for CellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellError::DeadlineExceeded => write!(f, "context deadline exceeded"),
            CellError::Cancelled => write!(f, "context canceled"),
        }
    }
}

impl std::error::Error for CellError {}

/// Result type for cell operations
pub type CellResult<T> = Result<T, CellError>;
