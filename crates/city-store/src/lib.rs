pub mod error;
pub mod file;
pub mod memory;
pub mod store;

pub use common::CityRecord;
pub use error::{Result, StoreError};
pub use file::JsonFileCityStore;
pub use memory::InMemoryCityStore;
pub use store::CityStore;
