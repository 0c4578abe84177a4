//! Error types shared across crates

use thiserror::Error;

/// Standard result type for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Failures of the client-persisted storage backing the token store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// No storage is reachable (no window, storage disabled by the browser, ...)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// A write was rejected, e.g. quota exceeded or private browsing mode
    #[error("Failed to write '{key}': {message}")]
    Write { key: String, message: String },
}

impl StorageError {
    /// Create a write error for the given key
    pub fn write(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Write {
            key: key.into(),
            message: message.into(),
        }
    }
}
