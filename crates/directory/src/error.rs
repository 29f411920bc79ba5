//! Directory error types.

use city_store::StoreError;
use common::CityField;
use thiserror::Error;

/// Errors that can occur during directory operations.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// A required field was not supplied or was blank.
    #[error("All fields are required")]
    MissingFields,

    /// A numeric field could not be read as a number of the right kind.
    #[error("Invalid value for {field}")]
    InvalidNumber { field: CityField },

    /// A city with this name already exists.
    #[error("City already exists")]
    CityAlreadyExists(String),

    /// No city with this name exists.
    #[error("City not found")]
    CityNotFound(String),

    /// The underlying store failed.
    #[error("Store error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for DirectoryError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::CityAlreadyExists(name) => DirectoryError::CityAlreadyExists(name),
            StoreError::CityNotFound(name) => DirectoryError::CityNotFound(name),
            other => DirectoryError::Store(other),
        }
    }
}

/// Result type for directory operations.
pub type Result<T> = std::result::Result<T, DirectoryError>;
