//! Request payloads for creating and updating cities.

use common::{CityField, CityRecord};
use serde::Deserialize;

use crate::error::{DirectoryError, Result};

/// A numeric field as submitted: either a JSON number or numeric text.
///
/// Browser forms submit every input as text, so both are accepted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumberInput {
    Number(serde_json::Number),
    Text(String),
}

impl NumberInput {
    fn is_blank(&self) -> bool {
        matches!(self, NumberInput::Text(s) if s.trim().is_empty())
    }

    fn as_f64(&self) -> Option<f64> {
        let value = match self {
            NumberInput::Number(n) => n.as_f64()?,
            NumberInput::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }

    /// Reads a non-negative whole number. `"1200"`, `1200` and `1200.0` all
    /// give 1200; fractions and negatives are rejected.
    fn as_count(&self) -> Option<u64> {
        if let NumberInput::Number(n) = self {
            if let Some(n) = n.as_u64() {
                return Some(n);
            }
        }
        if let NumberInput::Text(s) = self {
            if let Ok(n) = s.trim().parse::<u64>() {
                return Some(n);
            }
        }

        let value = self.as_f64()?;
        (value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64).then(|| value as u64)
    }
}

impl From<u64> for NumberInput {
    fn from(n: u64) -> Self {
        NumberInput::Number(n.into())
    }
}

impl From<f64> for NumberInput {
    fn from(x: f64) -> Self {
        serde_json::Number::from_f64(x)
            .map(NumberInput::Number)
            .unwrap_or_else(|| NumberInput::Text(x.to_string()))
    }
}

impl From<&str> for NumberInput {
    fn from(s: &str) -> Self {
        NumberInput::Text(s.to_string())
    }
}

/// Body of a create or update request. Every field is optional on the wire;
/// presence is checked when the payload is turned into a record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CityPayload {
    pub name: Option<String>,
    pub population: Option<NumberInput>,
    pub country: Option<String>,
    pub latitude: Option<NumberInput>,
    pub longitude: Option<NumberInput>,
}

impl CityPayload {
    /// Builds a payload with every field set.
    pub fn new(
        name: impl Into<String>,
        population: impl Into<NumberInput>,
        country: impl Into<String>,
        latitude: impl Into<NumberInput>,
        longitude: impl Into<NumberInput>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            population: Some(population.into()),
            country: Some(country.into()),
            latitude: Some(latitude.into()),
            longitude: Some(longitude.into()),
        }
    }

    /// Returns the supplied name, if it is not blank.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.trim().is_empty())
    }

    /// Converts the payload into a record.
    ///
    /// The payload's own name wins; `fallback_name` is used when it is
    /// absent or blank. Fails with `MissingFields` if any field is missing
    /// or blank, then with `InvalidNumber` if a numeric field does not parse.
    pub fn into_record(self, fallback_name: Option<&str>) -> Result<CityRecord> {
        let name = self
            .name()
            .or(fallback_name)
            .map(str::to_string)
            .ok_or(DirectoryError::MissingFields)?;

        let country = self
            .country
            .filter(|c| !c.trim().is_empty())
            .ok_or(DirectoryError::MissingFields)?;

        let population = required(self.population)?;
        let latitude = required(self.latitude)?;
        let longitude = required(self.longitude)?;

        Ok(CityRecord {
            name,
            population: population.as_count().ok_or(DirectoryError::InvalidNumber {
                field: CityField::Population,
            })?,
            country,
            latitude: latitude.as_f64().ok_or(DirectoryError::InvalidNumber {
                field: CityField::Latitude,
            })?,
            longitude: longitude.as_f64().ok_or(DirectoryError::InvalidNumber {
                field: CityField::Longitude,
            })?,
        })
    }
}

fn required(value: Option<NumberInput>) -> Result<NumberInput> {
    value
        .filter(|v| !v.is_blank())
        .ok_or(DirectoryError::MissingFields)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: serde_json::Value) -> CityPayload {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_numbers_and_numeric_text_are_accepted() {
        let payload = parse(serde_json::json!({
            "name": "Lima",
            "population": "9751000",
            "country": "Peru",
            "latitude": -12.0464,
            "longitude": "-77.0428"
        }));

        let city = payload.into_record(None).unwrap();
        assert_eq!(city.name, "Lima");
        assert_eq!(city.population, 9_751_000);
        assert_eq!(city.latitude, -12.0464);
        assert_eq!(city.longitude, -77.0428);
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let payload = parse(serde_json::json!({
            "name": "Lima",
            "population": 1,
            "latitude": 1,
            "longitude": 1
        }));
        assert!(matches!(
            payload.into_record(None),
            Err(DirectoryError::MissingFields)
        ));
    }

    #[test]
    fn test_blank_text_counts_as_missing() {
        let payload = CityPayload::new("Lima", "  ", "Peru", 1.0, 1.0);
        assert!(matches!(
            payload.into_record(None),
            Err(DirectoryError::MissingFields)
        ));

        let payload = CityPayload::new("Lima", 1u64, " ", 1.0, 1.0);
        assert!(matches!(
            payload.into_record(None),
            Err(DirectoryError::MissingFields)
        ));
    }

    #[test]
    fn test_null_counts_as_missing() {
        let payload = parse(serde_json::json!({
            "name": "Lima",
            "population": null,
            "country": "Peru",
            "latitude": 1,
            "longitude": 1
        }));
        assert!(matches!(
            payload.into_record(None),
            Err(DirectoryError::MissingFields)
        ));
    }

    #[test]
    fn test_zero_coordinates_are_valid() {
        let city = CityPayload::new("Null Island", 0u64, "Nowhere", 0.0, "0")
            .into_record(None)
            .unwrap();
        assert_eq!(city.latitude, 0.0);
        assert_eq!(city.longitude, 0.0);
        assert_eq!(city.population, 0);
    }

    #[test]
    fn test_population_must_be_whole() {
        for bad in ["12.5", "-3", "many"] {
            let payload = CityPayload::new("Lima", bad, "Peru", 1.0, 1.0);
            assert!(
                matches!(
                    payload.into_record(None),
                    Err(DirectoryError::InvalidNumber {
                        field: CityField::Population
                    })
                ),
                "population={bad:?}"
            );
        }

        let city = CityPayload::new("Lima", 1200.0, "Peru", 1.0, 1.0)
            .into_record(None)
            .unwrap();
        assert_eq!(city.population, 1200);
    }

    #[test]
    fn test_invalid_coordinate_is_rejected() {
        let payload = CityPayload::new("Lima", 1u64, "Peru", "north", 1.0);
        assert!(matches!(
            payload.into_record(None),
            Err(DirectoryError::InvalidNumber {
                field: CityField::Latitude
            })
        ));

        let payload = CityPayload::new("Lima", 1u64, "Peru", 1.0, "inf");
        assert!(matches!(
            payload.into_record(None),
            Err(DirectoryError::InvalidNumber {
                field: CityField::Longitude
            })
        ));
    }

    #[test]
    fn test_fallback_name() {
        let payload = parse(serde_json::json!({
            "population": 1,
            "country": "Peru",
            "latitude": 1,
            "longitude": 1
        }));
        let city = payload.clone().into_record(Some("Cusco")).unwrap();
        assert_eq!(city.name, "Cusco");

        assert!(matches!(
            payload.into_record(None),
            Err(DirectoryError::MissingFields)
        ));

        let city = CityPayload::new("Arequipa", 1u64, "Peru", 1.0, 1.0)
            .into_record(Some("Cusco"))
            .unwrap();
        assert_eq!(city.name, "Arequipa");
    }
}
