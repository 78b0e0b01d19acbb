//! Error types for Quiver operations

use thiserror::Error;

/// Core Quiver errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuiverError {
    /// The operation only accepts the sequence shape
    #[error("{operation} expects a sequence as its first argument")]
    SequenceRequired { operation: &'static str },
}

impl QuiverError {
    pub fn sequence_required(operation: &'static str) -> Self {
        QuiverError::SequenceRequired { operation }
    }
}

/// Result type for Quiver operations
pub type QuiverResult<T> = Result<T, QuiverError>;
