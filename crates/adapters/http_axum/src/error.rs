//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use parkhub_domain::error::{ParkHubError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`ParkHubError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(ParkHubError);

impl From<ParkHubError> for ApiError {
    fn from(err: ParkHubError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            ParkHubError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ParkHubError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            ParkHubError::Storage(err) => {
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
