//! Domain Errors

use thiserror::Error;

/// Common result type for list and storage operations
pub type TodoResult<T> = Result<T, TodoError>;

#[derive(Debug, Error)]
pub enum TodoError {
    #[error("storage is not available")]
    StorageUnavailable,
    #[error("storage error: {0}")]
    Storage(String),
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("unsupported schema version {0}")]
    UnsupportedVersion(u32),
    #[error("invalid item id: {0:?}")]
    InvalidId(String),
    #[error("invalid stored entry: {0}")]
    InvalidEntry(String),
}
