use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Host error: {0}")]
    HostError(#[from] HostError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Failures reported by the surrounding web client when queried for
/// ambient state (controller, router, action dispatch).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("service not ready: {0}")]
    NotReady(&'static str),

    #[error("{0}")]
    Failed(String),
}
