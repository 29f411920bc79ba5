use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    CityRecord, Result,
    store::{CityStore, insert_into, position_of, remove_from, replace_in},
};

/// In-memory city store.
///
/// Cloning is cheap: clones share the same underlying collection.
#[derive(Clone, Default)]
pub struct InMemoryCityStore {
    cities: Arc<RwLock<Vec<CityRecord>>>,
}

impl InMemoryCityStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with records.
    ///
    /// Records are taken as given; name uniqueness is not checked.
    pub fn with_cities(cities: Vec<CityRecord>) -> Self {
        Self {
            cities: Arc::new(RwLock::new(cities)),
        }
    }

    /// Removes every record.
    pub async fn clear(&self) {
        self.cities.write().await.clear();
    }
}

#[async_trait]
impl CityStore for InMemoryCityStore {
    async fn all(&self) -> Result<Vec<CityRecord>> {
        Ok(self.cities.read().await.clone())
    }

    async fn find(&self, name: &str) -> Result<Option<CityRecord>> {
        let cities = self.cities.read().await;
        Ok(position_of(&cities, name).map(|i| cities[i].clone()))
    }

    async fn insert(&self, city: CityRecord) -> Result<()> {
        insert_into(&mut *self.cities.write().await, city)
    }

    async fn replace(&self, name: &str, city: CityRecord) -> Result<CityRecord> {
        replace_in(&mut self.cities.write().await, name, city)
    }

    async fn remove(&self, name: &str) -> Result<CityRecord> {
        remove_from(&mut *self.cities.write().await, name)
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.cities.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StoreError;

    fn oslo() -> CityRecord {
        CityRecord::new("Oslo", 709_000, "Norway", 59.91, 10.75)
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let store = InMemoryCityStore::new();
        store.insert(oslo()).await.unwrap();

        assert_eq!(store.find("Oslo").await.unwrap(), Some(oslo()));
        assert_eq!(store.find("oslo").await.unwrap(), None);
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_insert_fails() {
        let store = InMemoryCityStore::new();
        store.insert(oslo()).await.unwrap();

        let result = store.insert(oslo()).await;
        assert!(matches!(result, Err(StoreError::CityAlreadyExists(_))));
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_all_preserves_insertion_order() {
        let store = InMemoryCityStore::new();
        for name in ["Oslo", "Bergen", "Alta"] {
            store
                .insert(CityRecord::new(name, 1, "Norway", 60.0, 10.0))
                .await
                .unwrap();
        }

        let names: Vec<_> = store
            .all()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Oslo", "Bergen", "Alta"]);
    }

    #[tokio::test]
    async fn test_snapshot_is_detached() {
        let store = InMemoryCityStore::new();
        store.insert(oslo()).await.unwrap();

        let snapshot = store.all().await.unwrap();
        store.remove("Oslo").await.unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = InMemoryCityStore::new();
        let other = store.clone();
        store.insert(oslo()).await.unwrap();

        assert_eq!(other.count().await.unwrap(), 1);
        other.clear().await;
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_replace_and_remove() {
        let store = InMemoryCityStore::new();
        store.insert(oslo()).await.unwrap();

        let updated = CityRecord::new("Oslo", 720_000, "Norway", 59.91, 10.75);
        store.replace("Oslo", updated.clone()).await.unwrap();
        assert_eq!(store.find("Oslo").await.unwrap(), Some(updated));

        store.remove("Oslo").await.unwrap();
        assert!(matches!(
            store.remove("Oslo").await,
            Err(StoreError::CityNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_concurrent_duplicate_inserts() {
        let store = InMemoryCityStore::new();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.insert(oslo()).await })
            })
            .collect();

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(store.count().await.unwrap(), 1);
    }
}
