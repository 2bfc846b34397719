//! Storage errors

/// Errors raised by a key-value store or while encoding values
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Underlying I/O failed
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Key cannot be mapped onto the store
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    /// Value could not be encoded
    #[error("failed to encode value: {0}")]
    Encode(#[from] serde_json::Error),
}
