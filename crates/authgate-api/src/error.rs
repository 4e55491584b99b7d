//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use authgate_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// When the error response was produced.
    pub timestamp: DateTime<Utc>,
    /// HTTP status code, duplicated in the body for log scraping.
    pub status: u16,
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// HTTP-layer wrapper around the domain error.
///
/// Handlers return this type; `?` on any `AppError`-producing call
/// converts through the `From` impl.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error = self.0;
        let status = match error.kind {
            ErrorKind::Validation | ErrorKind::DuplicateIdentity => StatusCode::BAD_REQUEST,
            ErrorKind::InvalidCredentials
            | ErrorKind::TokenExpired
            | ErrorKind::TokenMalformed
            | ErrorKind::TokenWrongKind
            | ErrorKind::TokenRevoked
            | ErrorKind::MissingToken
            | ErrorKind::PasswordMismatch
            | ErrorKind::UnknownSubject => StatusCode::UNAUTHORIZED,
            ErrorKind::Forbidden => StatusCode::FORBIDDEN,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Configuration | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Server faults carry internal detail; log it and return a
        // generic message instead.
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %error, "Internal server error");
            "An internal error occurred".to_string()
        } else {
            error.message.clone()
        };

        let body = ApiErrorResponse {
            timestamp: Utc::now(),
            status: status.as_u16(),
            error: error.kind.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}
