//! City service providing the directory operations.

use city_query::{CityView, QueryEngine, QueryOptions, QueryParams};
use city_store::CityStore;
use common::CityRecord;

use crate::error::Result;
use crate::payload::CityPayload;

/// Service for managing the city directory.
///
/// Mutations go straight to the store, which enforces name uniqueness.
/// Queries read a snapshot of the store and run the query pipeline on it.
pub struct CityService<S: CityStore> {
    store: S,
    engine: QueryEngine,
}

impl<S: CityStore> CityService<S> {
    /// Creates a new city service over the given store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            engine: QueryEngine::new(),
        }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Adds a new city.
    #[tracing::instrument(skip(self, payload), fields(name = payload.name.as_deref()))]
    pub async fn create(&self, payload: CityPayload) -> Result<CityRecord> {
        let city = payload.into_record(None)?;
        self.store.insert(city.clone()).await?;

        metrics::counter!("cities_created_total").increment(1);
        tracing::info!(name = %city.name, "city added");
        Ok(city)
    }

    /// Replaces the city called `name` with the payload's values.
    ///
    /// A non-blank `name` in the payload renames the city; otherwise it
    /// keeps `name`.
    #[tracing::instrument(skip(self, payload))]
    pub async fn update(&self, name: &str, payload: CityPayload) -> Result<CityRecord> {
        let city = payload.into_record(Some(name))?;
        let city = self.store.replace(name, city).await?;

        metrics::counter!("cities_updated_total").increment(1);
        tracing::info!(name = %city.name, "city updated");
        Ok(city)
    }

    /// Removes the city called `name`.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, name: &str) -> Result<CityRecord> {
        let city = self.store.remove(name).await?;

        metrics::counter!("cities_deleted_total").increment(1);
        tracing::info!(name = %city.name, "city deleted");
        Ok(city)
    }

    /// Lists cities from raw request parameters.
    ///
    /// Malformed parameters fall back to their defaults; this only fails if
    /// the store cannot be read.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self, params: QueryParams) -> Result<Vec<CityView>> {
        self.query(&QueryOptions::from(params)).await
    }

    /// Runs a typed query over a snapshot of the store.
    pub async fn query(&self, options: &QueryOptions) -> Result<Vec<CityView>> {
        let snapshot = self.store.all().await?;
        let page = self.engine.execute(&snapshot, options);

        metrics::counter!("city_queries_total").increment(1);
        metrics::histogram!("city_query_results").record(page.len() as f64);
        tracing::debug!(total = snapshot.len(), returned = page.len(), "query executed");
        Ok(page)
    }
}
