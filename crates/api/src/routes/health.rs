//! Health check endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use city_store::CityStore;
use serde::Serialize;

use super::cities::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub cities: Option<usize>,
}

/// GET /health — reports liveness and, when the store answers, its size.
pub async fn check<S: CityStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Json<HealthResponse> {
    let cities = state.city_service.store().count().await.ok();
    Json(HealthResponse {
        status: "ok",
        cities,
    })
}
