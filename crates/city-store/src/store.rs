use async_trait::async_trait;

use crate::{CityRecord, Result, StoreError};

/// Core trait for city store implementations.
///
/// A city store owns the collection of city records. Names are unique
/// within a store: every mutation checks this under the same lock that
/// applies it. All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait CityStore: Send + Sync {
    /// Returns a snapshot of every record, in insertion order.
    async fn all(&self) -> Result<Vec<CityRecord>>;

    /// Looks up a record by its exact (case-sensitive) name.
    async fn find(&self, name: &str) -> Result<Option<CityRecord>>;

    /// Adds a new record.
    ///
    /// Fails with `CityAlreadyExists` if a record with the same name exists.
    async fn insert(&self, city: CityRecord) -> Result<()>;

    /// Replaces the record named `name` wholesale, keeping its position.
    ///
    /// `city.name` may differ from `name`, which renames the record. Fails
    /// with `CityNotFound` if `name` is absent, or `CityAlreadyExists` if the
    /// new name belongs to another record.
    async fn replace(&self, name: &str, city: CityRecord) -> Result<CityRecord>;

    /// Removes and returns the record named `name`.
    async fn remove(&self, name: &str) -> Result<CityRecord>;

    /// Returns the number of records.
    async fn count(&self) -> Result<usize>;
}

pub(crate) fn position_of(cities: &[CityRecord], name: &str) -> Option<usize> {
    cities.iter().position(|c| c.name == name)
}

pub(crate) fn insert_into(cities: &mut Vec<CityRecord>, city: CityRecord) -> Result<()> {
    if position_of(cities, &city.name).is_some() {
        return Err(StoreError::CityAlreadyExists(city.name));
    }
    cities.push(city);
    Ok(())
}

pub(crate) fn replace_in(
    cities: &mut [CityRecord],
    name: &str,
    city: CityRecord,
) -> Result<CityRecord> {
    let index =
        position_of(cities, name).ok_or_else(|| StoreError::CityNotFound(name.to_string()))?;

    if city.name != name && position_of(cities, &city.name).is_some() {
        return Err(StoreError::CityAlreadyExists(city.name));
    }

    cities[index] = city.clone();
    Ok(city)
}

pub(crate) fn remove_from(cities: &mut Vec<CityRecord>, name: &str) -> Result<CityRecord> {
    let index =
        position_of(cities, name).ok_or_else(|| StoreError::CityNotFound(name.to_string()))?;
    Ok(cities.remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cities() -> Vec<CityRecord> {
        vec![
            CityRecord::new("Paris", 2_148_000, "France", 48.85, 2.35),
            CityRecord::new("Lyon", 513_000, "France", 45.76, 4.83),
        ]
    }

    #[test]
    fn insert_rejects_duplicate_name() {
        let mut list = cities();
        let result = insert_into(&mut list, CityRecord::new("Paris", 1, "X", 1.0, 1.0));
        assert!(matches!(result, Err(StoreError::CityAlreadyExists(name)) if name == "Paris"));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn name_matching_is_case_sensitive() {
        let mut list = cities();
        insert_into(&mut list, CityRecord::new("paris", 1, "X", 1.0, 1.0)).unwrap();
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn replace_keeps_position() {
        let mut list = cities();
        let updated = CityRecord::new("Paris", 2_200_000, "France", 48.85, 2.35);
        replace_in(&mut list, "Paris", updated.clone()).unwrap();
        assert_eq!(list[0], updated);
    }

    #[test]
    fn replace_can_rename() {
        let mut list = cities();
        let renamed = CityRecord::new("Lutetia", 2_148_000, "France", 48.85, 2.35);
        replace_in(&mut list, "Paris", renamed).unwrap();
        assert_eq!(list[0].name, "Lutetia");
        assert!(position_of(&list, "Paris").is_none());
    }

    #[test]
    fn replace_rejects_rename_onto_existing() {
        let mut list = cities();
        let clash = CityRecord::new("Lyon", 1, "France", 1.0, 1.0);
        let result = replace_in(&mut list, "Paris", clash);
        assert!(matches!(result, Err(StoreError::CityAlreadyExists(_))));
        assert_eq!(list[0].name, "Paris");
    }

    #[test]
    fn replace_missing_is_not_found() {
        let mut list = cities();
        let result = replace_in(&mut list, "Nice", CityRecord::new("Nice", 1, "F", 1.0, 1.0));
        assert!(matches!(result, Err(StoreError::CityNotFound(name)) if name == "Nice"));
    }

    #[test]
    fn remove_returns_record() {
        let mut list = cities();
        let removed = remove_from(&mut list, "Lyon").unwrap();
        assert_eq!(removed.name, "Lyon");
        assert_eq!(list.len(), 1);
        assert!(matches!(
            remove_from(&mut list, "Lyon"),
            Err(StoreError::CityNotFound(_))
        ));
    }
}
