use thiserror::Error;

pub type Result<T> = std::result::Result<T, TaskboardError>;

#[derive(Debug, Error)]
pub enum TaskboardError {
    #[error("Board not found: {0}")]
    BoardNotFound(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Reasons an import document is rejected. Imports are all-or-nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("document is not valid JSON: {0}")]
    MalformedSyntax(String),

    #[error("document does not describe a board collection: {0}")]
    UnexpectedShape(String),
}

#[cfg(feature = "sqlite-storage")]
impl From<rusqlite::Error> for TaskboardError {
    fn from(err: rusqlite::Error) -> Self {
        TaskboardError::StorageError(err.to_string())
    }
}
