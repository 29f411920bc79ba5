//! HTTP API server with observability for the city directory.
//!
//! Provides REST endpoints to add, update, delete and list cities, with
//! structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, put};
use city_store::CityStore;
use directory::CityService;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::cities::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: CityStore + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check::<S>))
        .route(
            "/api/cities",
            get(routes::cities::list::<S>).post(routes::cities::create::<S>),
        )
        .route(
            "/api/cities/{name}",
            put(routes::cities::update::<S>).delete(routes::cities::delete::<S>),
        )
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the application state around a city store.
pub fn create_default_state<S: CityStore + 'static>(store: S) -> Arc<AppState<S>> {
    Arc::new(AppState {
        city_service: CityService::new(store),
    })
}
