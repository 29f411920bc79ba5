use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single city entry in the directory.
///
/// The `name` is the natural identifier of a city; there is no separate key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    pub name: String,
    pub population: u64,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl CityRecord {
    /// Creates a new city record.
    pub fn new(
        name: impl Into<String>,
        population: u64,
        country: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            name: name.into(),
            population,
            country: country.into(),
            latitude,
            longitude,
        }
    }

    /// Returns the value of one field of this record.
    pub fn field(&self, field: CityField) -> FieldValue {
        match field {
            CityField::Name => FieldValue::Text(self.name.clone()),
            CityField::Population => FieldValue::Integer(self.population),
            CityField::Country => FieldValue::Text(self.country.clone()),
            CityField::Latitude => FieldValue::Float(self.latitude),
            CityField::Longitude => FieldValue::Float(self.longitude),
        }
    }
}

/// The fields of a [`CityRecord`], named as they appear in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CityField {
    Name,
    Population,
    Country,
    Latitude,
    Longitude,
}

impl CityField {
    /// All fields, in record order.
    pub const ALL: [CityField; 5] = [
        CityField::Name,
        CityField::Population,
        CityField::Country,
        CityField::Latitude,
        CityField::Longitude,
    ];

    /// Returns the JSON key of this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            CityField::Name => "name",
            CityField::Population => "population",
            CityField::Country => "country",
            CityField::Latitude => "latitude",
            CityField::Longitude => "longitude",
        }
    }
}

impl fmt::Display for CityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a [`CityField`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFieldError(pub String);

impl fmt::Display for ParseFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown city field: {}", self.0)
    }
}

impl std::error::Error for ParseFieldError {}

impl FromStr for CityField {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CityField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ParseFieldError(s.to_string()))
    }
}

/// The value of a single city field.
///
/// Ordering is total: text compares lexicographically, integers and floats
/// numerically (floats by IEEE total order). Values of different kinds never
/// meet in practice since each field has one kind; they are ordered
/// text < integer < float so the order stays total anyway.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Integer(u64),
    Float(f64),
}

impl FieldValue {
    /// Whether the value counts as present when projecting.
    ///
    /// Empty text, zero and NaN are treated as absent.
    pub fn is_present(&self) -> bool {
        match self {
            FieldValue::Text(s) => !s.is_empty(),
            FieldValue::Integer(n) => *n != 0,
            FieldValue::Float(x) => *x != 0.0 && !x.is_nan(),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            FieldValue::Text(_) => 0,
            FieldValue::Integer(_) => 1,
            FieldValue::Float(_) => 2,
        }
    }
}

impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FieldValue {}

impl PartialOrd for FieldValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FieldValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            (FieldValue::Integer(a), FieldValue::Integer(b)) => a.cmp(b),
            (FieldValue::Float(a), FieldValue::Float(b)) => a.total_cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}
