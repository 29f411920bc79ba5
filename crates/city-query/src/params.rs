//! Raw list-query parameters and their coercion into [`QueryOptions`].

use common::CityField;
use serde::Deserialize;

use crate::options::{DEFAULT_LIMIT, DEFAULT_PAGE, QueryOptions};
use crate::projection::FieldProjection;

/// Query parameters as they arrive on the request, all optional text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort: Option<String>,
    pub search: Option<String>,
    pub projection: Option<String>,
}

impl QueryParams {
    /// Collects parameters from decoded key/value pairs.
    ///
    /// The first occurrence of each key wins and unknown keys are ignored, so
    /// a repeated key never discards the other parameters.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "page" => &mut params.page,
                "limit" => &mut params.limit,
                "sort" => &mut params.sort,
                "search" => &mut params.search,
                "projection" => &mut params.projection,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        params
    }
}

impl From<QueryParams> for QueryOptions {
    /// Coerces raw parameters, falling back to defaults on anything
    /// malformed. This never fails.
    fn from(params: QueryParams) -> Self {
        let sort = match params.sort.as_deref() {
            None => Some(CityField::Name),
            Some("") => None,
            Some(name) => match name.parse::<CityField>() {
                Ok(field) => Some(field),
                Err(_) => {
                    tracing::debug!(sort = name, "unknown sort field, keeping input order");
                    None
                }
            },
        };

        QueryOptions {
            page: positive_or(params.page.as_deref(), "page", DEFAULT_PAGE),
            limit: positive_or(params.limit.as_deref(), "limit", DEFAULT_LIMIT),
            sort,
            search: params.search.unwrap_or_default(),
            projection: params.projection.as_deref().and_then(FieldProjection::parse),
        }
    }
}

fn positive_or(raw: Option<&str>, name: &'static str, default: usize) -> usize {
    let Some(raw) = raw else {
        return default;
    };

    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => n,
        _ => {
            tracing::debug!(param = name, value = raw, default, "invalid value, using default");
            default
        }
    }
}
