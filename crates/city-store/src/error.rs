use thiserror::Error;

/// Errors that can occur when interacting with a city store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A record with this name is already in the collection.
    #[error("City already exists: {0}")]
    CityAlreadyExists(String),

    /// No record with this name is in the collection.
    #[error("City not found: {0}")]
    CityNotFound(String),

    /// Reading or writing the backing file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for city store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
