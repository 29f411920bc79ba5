use common::CityField;

use crate::projection::FieldProjection;

/// Default 1-indexed page number.
pub const DEFAULT_PAGE: usize = 1;

/// Default page size.
pub const DEFAULT_LIMIT: usize = 10;

/// Typed options for a city list query.
///
/// Built either directly through the builder methods or by coercing raw
/// request parameters (see [`crate::QueryParams`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOptions {
    /// 1-indexed page number, never zero.
    pub page: usize,

    /// Page size, never zero.
    pub limit: usize,

    /// Field to sort ascending by. `None` keeps the input order.
    pub sort: Option<CityField>,

    /// Case-insensitive substring matched against name and country.
    pub search: String,

    /// Fields to keep in each result. `None` returns full records.
    pub projection: Option<FieldProjection>,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            sort: Some(CityField::Name),
            search: String::new(),
            projection: None,
        }
    }
}

impl QueryOptions {
    /// Creates options with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page number. Zero is replaced by the default.
    pub fn page(mut self, page: usize) -> Self {
        self.page = if page == 0 { DEFAULT_PAGE } else { page };
        self
    }

    /// Sets the page size. Zero is replaced by the default.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = if limit == 0 { DEFAULT_LIMIT } else { limit };
        self
    }

    /// Sorts by a field.
    pub fn sort_by(mut self, field: CityField) -> Self {
        self.sort = Some(field);
        self
    }

    /// Keeps the input order.
    pub fn unsorted(mut self) -> Self {
        self.sort = None;
        self
    }

    /// Sets the search term.
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Restricts results to the given fields.
    pub fn project(mut self, projection: FieldProjection) -> Self {
        self.projection = Some(projection);
        self
    }

    /// Half-open index range `[start, end)` of the requested page.
    ///
    /// A zero `page` set through the public field reads as the first page.
    pub fn page_bounds(&self) -> (usize, usize) {
        let start = self.page.saturating_sub(1).saturating_mul(self.limit);
        (start, start.saturating_add(self.limit))
    }
}
