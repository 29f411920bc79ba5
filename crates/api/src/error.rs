//! API error types with HTTP response mapping.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use directory::DirectoryError;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Bad request from the client.
    BadRequest(String),
    /// Directory operation error.
    Directory(DirectoryError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Directory(err) => directory_error_to_response(err),
        };

        let body = serde_json::json!({ "message": message });
        (status, axum::Json(body)).into_response()
    }
}

fn directory_error_to_response(err: DirectoryError) -> (StatusCode, String) {
    match &err {
        DirectoryError::MissingFields
        | DirectoryError::InvalidNumber { .. }
        | DirectoryError::CityAlreadyExists(_) => (StatusCode::BAD_REQUEST, err.to_string()),
        DirectoryError::CityNotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
        DirectoryError::Store(_) => {
            tracing::error!(error = %err, "city store failure");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        ApiError::Directory(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
