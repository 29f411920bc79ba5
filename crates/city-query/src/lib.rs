//! Query pipeline for the city list endpoint.
//!
//! A query runs four stages in a fixed order: search filtering, sorting,
//! pagination and optional field projection. Raw request parameters are
//! coerced into typed [`QueryOptions`] first; malformed values fall back to
//! defaults instead of failing.

pub mod engine;
pub mod options;
pub mod params;
pub mod projection;

pub use engine::QueryEngine;
pub use options::QueryOptions;
pub use params::QueryParams;
pub use projection::{CityView, FieldProjection, ProjectedCity};
