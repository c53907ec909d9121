//! Error types for the calstore ecosystem.

use thiserror::Error;

/// Errors that can occur in calstore operations.
///
/// Only the write path produces these: reads go through
/// [`Storage::load`](crate::storage::Storage::load), which falls back to a
/// default instead of erroring.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for calstore operations.
pub type StoreResult<T> = Result<T, StoreError>;
