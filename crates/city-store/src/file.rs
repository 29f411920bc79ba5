use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    CityRecord, Result,
    store::{CityStore, insert_into, position_of, remove_from, replace_in},
};

/// City store backed by a JSON array file.
///
/// The collection is held in memory and the whole file is rewritten after
/// every successful mutation. A mutation that fails, including one whose
/// write fails, changes neither the file nor the in-memory collection.
#[derive(Clone)]
pub struct JsonFileCityStore {
    path: Arc<PathBuf>,
    cities: Arc<RwLock<Vec<CityRecord>>>,
}

impl JsonFileCityStore {
    /// Opens a store at `path`, loading any records already there.
    ///
    /// A missing file is treated as an empty collection; it is created on
    /// the first mutation.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let cities = match tokio::fs::read(&path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Vec::new(),
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        tracing::info!(path = %path.display(), count = cities.len(), "opened city file");

        Ok(Self {
            path: Arc::new(path),
            cities: Arc::new(RwLock::new(cities)),
        })
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Applies `mutate` to a copy of the collection, persists it and only
    /// then makes it current.
    async fn commit<T>(
        &self,
        mutate: impl FnOnce(&mut Vec<CityRecord>) -> Result<T>,
    ) -> Result<T> {
        let mut cities = self.cities.write().await;
        let mut next = cities.clone();
        let out = mutate(&mut next)?;

        if let Err(e) = write_atomically(&self.path, &next).await {
            tracing::error!(path = %self.path.display(), error = %e, "failed to persist cities");
            return Err(e);
        }

        *cities = next;
        Ok(out)
    }
}

async fn write_atomically(path: &Path, cities: &[CityRecord]) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(cities)?;

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    tokio::fs::write(&tmp, bytes).await?;
    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}

#[async_trait]
impl CityStore for JsonFileCityStore {
    async fn all(&self) -> Result<Vec<CityRecord>> {
        Ok(self.cities.read().await.clone())
    }

    async fn find(&self, name: &str) -> Result<Option<CityRecord>> {
        let cities = self.cities.read().await;
        Ok(position_of(&cities, name).map(|i| cities[i].clone()))
    }

    async fn insert(&self, city: CityRecord) -> Result<()> {
        self.commit(|cities| insert_into(cities, city)).await
    }

    async fn replace(&self, name: &str, city: CityRecord) -> Result<CityRecord> {
        self.commit(|cities| replace_in(cities, name, city)).await
    }

    async fn remove(&self, name: &str) -> Result<CityRecord> {
        self.commit(|cities| remove_from(cities, name)).await
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.cities.read().await.len())
    }
}
