//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use sensordash_domain::error::{NotFoundError, SensorError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`SensorError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(SensorError);

impl From<SensorError> for ApiError {
    fn from(err: SensorError) -> Self {
        Self(err)
    }
}

impl From<NotFoundError> for ApiError {
    fn from(err: NotFoundError) -> Self {
        Self(SensorError::NotFound(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            SensorError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            SensorError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            SensorError::Source(err) => {
                tracing::error!(error = %err, "sensor source error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            SensorError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
