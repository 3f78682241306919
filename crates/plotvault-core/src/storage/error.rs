//! Error types for the storage layer.

use thiserror::Error;

/// Errors that can occur while operating on a container file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Underlying database error.
    #[error("Container error: {0}")]
    Database(#[from] rusqlite::Error),

    /// The file exists but does not hold a plotvault container.
    #[error("Not a plotvault container: {0}")]
    InvalidFormat(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for storage operations.
pub type StorageResult<T> = std::result::Result<T, StorageError>;
