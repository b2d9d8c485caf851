//! Storage error types.

use thiserror::Error;

/// Error type for file store operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Invalid data format: Expected a non-empty list of dictionaries")]
    InvalidFormat,

    #[error("Invalid file name: '{0}'")]
    InvalidName(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
