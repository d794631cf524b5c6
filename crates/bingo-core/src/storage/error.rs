//! Storage error types

use thiserror::Error;

/// Errors that can occur during card store operations
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// No record exists for this id
    #[error("card not found: {0}")]
    NotFound(String),

    /// The record exists but is not a well-formed card
    #[error("card {id} is corrupt: {reason}")]
    Corrupt { id: String, reason: String },

    /// Every generated id collided with an existing record
    #[error("could not allocate a free card id after {0} attempts")]
    IdExhausted(usize),

    /// Storage backend error (filesystem, etc.)
    #[error("storage backend error: {0}")]
    Backend(String),

    /// Serialization error while writing a record
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Backend(format!("IO: {}", err))
    }
}

/// Result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;
