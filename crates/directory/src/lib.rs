//! City directory use cases.
//!
//! [`CityService`] is the single entry point used by the HTTP layer. It owns
//! a [`CityStore`](city_store::CityStore) and runs list queries through the
//! [`QueryEngine`](city_query::QueryEngine) over a snapshot of the store.

pub mod error;
pub mod payload;
pub mod service;

pub use error::{DirectoryError, Result};
pub use payload::{CityPayload, NumberInput};
pub use service::CityService;
