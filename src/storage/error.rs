//! Error types for persistence

/// Failure reported by a key-value backend
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("write to '{key}' rejected: {reason}")]
    Rejected { key: String, reason: String },
}

/// Failure reading or writing forms through a store
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
