//! Field projection: restricting returned records to a chosen field subset.

use common::{CityField, CityRecord, FieldValue};
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// An ordered list of fields to keep in each returned record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldProjection {
    fields: Vec<CityField>,
}

impl FieldProjection {
    /// Creates a projection from a list of fields. Repeats are dropped.
    pub fn new(fields: impl IntoIterator<Item = CityField>) -> Self {
        let mut out = Vec::new();
        for field in fields {
            if !out.contains(&field) {
                out.push(field);
            }
        }
        Self { fields: out }
    }

    /// Parses a comma-separated field list such as `"name, population"`.
    ///
    /// Returns `None` for empty input, meaning "no projection". Entries are
    /// trimmed; unknown or empty entries are skipped, so a non-empty input
    /// with no known field yields an empty projection.
    pub fn parse(text: &str) -> Option<Self> {
        if text.is_empty() {
            return None;
        }

        let fields = text.split(',').filter_map(|entry| {
            let entry = entry.trim();
            match entry.parse::<CityField>() {
                Ok(field) => Some(field),
                Err(_) => {
                    tracing::debug!(field = entry, "ignoring unknown projection field");
                    None
                }
            }
        });

        Some(Self::new(fields))
    }

    /// Returns the projected fields in order.
    pub fn fields(&self) -> &[CityField] {
        &self.fields
    }

    /// Projects one record, keeping listed fields whose value is present.
    pub fn apply(&self, city: &CityRecord) -> ProjectedCity {
        let values = self
            .fields
            .iter()
            .map(|&field| (field, city.field(field)))
            .filter(|(_, value)| value.is_present())
            .collect();
        ProjectedCity { values }
    }
}

/// A city reduced to a subset of its fields, in projection order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedCity {
    values: Vec<(CityField, FieldValue)>,
}

impl ProjectedCity {
    /// Returns the value of `field`, if it was kept.
    pub fn get(&self, field: CityField) -> Option<&FieldValue> {
        self.values
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, value)| value)
    }

    /// Returns the kept fields in order.
    pub fn fields(&self) -> impl Iterator<Item = CityField> + '_ {
        self.values.iter().map(|(field, _)| *field)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Serialize for ProjectedCity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (field, value) in &self.values {
            map.serialize_entry(field.as_str(), value)?;
        }
        map.end()
    }
}

/// One entry of a query result: a full record, or a projected one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CityView {
    Full(CityRecord),
    Projected(ProjectedCity),
}
