//! City CRUD and list endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use city_query::{CityView, QueryParams};
use city_store::CityStore;
use common::CityRecord;
use directory::{CityPayload, CityService};
use serde::Serialize;

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<S: CityStore> {
    pub city_service: CityService<S>,
}

// -- Response types --

#[derive(Serialize)]
pub struct CityResponse {
    pub message: &'static str,
    pub city: CityRecord,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

// -- Handlers --

/// POST /api/cities — add a new city.
#[tracing::instrument(skip(state, payload))]
pub async fn create<S: CityStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    payload: Result<Json<CityPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<CityResponse>), ApiError> {
    let Json(payload) = payload?;
    let city = state.city_service.create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(CityResponse {
            message: "City added successfully",
            city,
        }),
    ))
}

/// PUT /api/cities/{name} — replace a city's details.
#[tracing::instrument(skip(state, payload))]
pub async fn update<S: CityStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(name): Path<String>,
    payload: Result<Json<CityPayload>, JsonRejection>,
) -> Result<Json<CityResponse>, ApiError> {
    let Json(payload) = payload?;
    let city = state.city_service.update(&name, payload).await?;

    Ok(Json(CityResponse {
        message: "City updated successfully",
        city,
    }))
}

/// DELETE /api/cities/{name} — remove a city.
#[tracing::instrument(skip(state))]
pub async fn delete<S: CityStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(name): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.city_service.delete(&name).await?;

    Ok(Json(MessageResponse {
        message: "City deleted successfully",
    }))
}

/// GET /api/cities — list cities with search, sort, pagination and projection.
///
/// Parameters are read pair by pair: a repeated key keeps its first value and
/// a query string that cannot be decoded at all is treated as empty.
#[tracing::instrument(skip(state, pairs))]
pub async fn list<S: CityStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<CityView>>, ApiError> {
    let params = match pairs {
        Ok(Query(pairs)) => QueryParams::from_pairs(pairs),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "ignoring undecodable query string");
            QueryParams::default()
        }
    };

    let cities = state.city_service.list(params).await?;
    Ok(Json(cities))
}
