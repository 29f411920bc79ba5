use common::{CityField, CityRecord};

use crate::options::QueryOptions;
use crate::projection::{CityView, FieldProjection};

/// Runs list queries over a snapshot of the city collection.
///
/// The engine holds no state and never mutates its input. Each stage is
/// exposed on its own; [`QueryEngine::execute`] chains them in the fixed
/// order filter, sort, paginate, project.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryEngine;

impl QueryEngine {
    pub fn new() -> Self {
        Self
    }

    /// Runs the full pipeline and returns the requested page.
    ///
    /// Never fails: an out-of-range page or a search with no match yields an
    /// empty result.
    pub fn execute(&self, cities: &[CityRecord], options: &QueryOptions) -> Vec<CityView> {
        let mut matched = self.filter(cities, &options.search);
        self.sort(&mut matched, options.sort);
        let page = self.paginate(&matched, options);
        self.project(page, options.projection.as_ref())
    }

    /// Keeps records whose name or country contains `search`, ignoring case.
    ///
    /// An empty search keeps everything. Duplicates in the input are kept.
    pub fn filter<'a>(&self, cities: &'a [CityRecord], search: &str) -> Vec<&'a CityRecord> {
        if search.is_empty() {
            return cities.iter().collect();
        }

        let needle = search.to_lowercase();
        cities
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&needle) || c.country.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Sorts ascending by `field` in its natural order.
    ///
    /// The sort is stable: records with equal keys keep their input order.
    /// `None` leaves the order untouched.
    pub fn sort(&self, cities: &mut [&CityRecord], field: Option<CityField>) {
        if let Some(field) = field {
            cities.sort_by_cached_key(|c| c.field(field));
        }
    }

    /// Returns the page's slice, clamped to the available records.
    pub fn paginate<'s, 'a>(
        &self,
        cities: &'s [&'a CityRecord],
        options: &QueryOptions,
    ) -> &'s [&'a CityRecord] {
        let (start, end) = options.page_bounds();
        let start = start.min(cities.len());
        let end = end.min(cities.len());
        &cities[start..end]
    }

    /// Maps each record to its output form.
    pub fn project(
        &self,
        cities: &[&CityRecord],
        projection: Option<&FieldProjection>,
    ) -> Vec<CityView> {
        match projection {
            Some(projection) => cities
                .iter()
                .map(|c| CityView::Projected(projection.apply(c)))
                .collect(),
            None => cities.iter().map(|&c| CityView::Full(c.clone())).collect(),
        }
    }
}
