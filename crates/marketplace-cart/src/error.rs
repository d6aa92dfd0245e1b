//! Cart error types.

use marketplace_kv::KvError;
use thiserror::Error;

/// Errors that can occur in cart operations.
#[derive(Error, Debug)]
pub enum CartError {
    /// The persistence collaborator failed, or the persisted cart could not
    /// be decoded.
    #[error("Storage error: {0}")]
    Storage(#[from] KvError),

    /// The persisted cart lists the same product twice.
    #[error("Duplicate item in persisted cart: {0}")]
    DuplicateItem(String),

    /// Incrementing would overflow the quantity type.
    #[error("Quantity overflow for item: {0}")]
    QuantityOverflow(String),
}
