//! Shared data model for the city directory.

pub mod types;

pub use types::{CityField, CityRecord, FieldValue, ParseFieldError};
