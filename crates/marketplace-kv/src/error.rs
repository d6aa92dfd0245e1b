//! Key-value store error types.

use thiserror::Error;

/// Errors that can occur when talking to a key-value store.
#[derive(Error, Debug)]
pub enum KvError {
    /// Underlying I/O failure (file-backed stores).
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize or deserialize a stored value.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Key cannot be used with this store.
    #[error("Invalid key: {0:?}")]
    InvalidKey(String),

    /// Backend-specific failure.
    #[error("Store operation failed: {0}")]
    Store(String),
}

/// Result type for key-value operations.
pub type KvResult<T> = Result<T, KvError>;
