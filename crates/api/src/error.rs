//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server-side errors to
//! Sentry before responding to the client. All route handlers return
//! `Result<T, AppError>`; every error body is `{"detail": "<message>"}`.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::ServiceError;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog or order operation failed.
    #[error("{0}")]
    Service(#[from] ServiceError),

    /// Request body is missing, malformed, or lacks required fields.
    ///
    /// Keeps axum's status: 422 for a well-formed body of the wrong shape,
    /// 400 for invalid JSON, 415 for a missing JSON content type.
    #[error("{}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),

    /// A path segment could not be extracted (e.g. invalid UTF-8).
    #[error("{}", .0.body_text())]
    InvalidPath(#[from] PathRejection),

    /// No route matches the request path.
    #[error("Not Found")]
    RouteNotFound,
}

/// JSON error body.
#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

impl AppError {
    fn is_server_error(&self) -> bool {
        matches!(self, Self::Service(ServiceError::Repository(_)))
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::Service(err) => match err {
                ServiceError::ProductNotFound(_) | ServiceError::OrderNotFound(_) => {
                    StatusCode::NOT_FOUND
                }
                ServiceError::OutOfStock { .. } => StatusCode::BAD_REQUEST,
                ServiceError::InvalidOrder(_) | ServiceError::TotalOutOfRange(_) => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                ServiceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::InvalidBody(rejection) => rejection.status(),
            Self::InvalidPath(rejection) => rejection.status(),
            Self::RouteNotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if self.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        let status = self.status();

        // Don't expose internal error details to clients
        let detail = if self.is_server_error() {
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
