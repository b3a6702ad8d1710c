//! Axum-specific error types and mappings.
//!
//! Maps `CoreError` to HTTP status codes and response bodies. Lookups that
//! miss answer 404 with an empty body and duplicate creations answer 409
//! with a plain-text body; every other failure carries a JSON body.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pokedex_core::CoreError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Body of a 409 response.
pub const CONFLICT_BODY: &str = "Already exists";

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Conflict (resource already exists).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl HttpError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::NotFound(_) => status.into_response(),
            Self::Conflict(_) => (status, CONFLICT_BODY).into_response(),
            Self::BadRequest(message) => json_error(status, message),
            Self::Internal(message) => {
                error!(error = %message, "Request failed");
                json_error(status, message)
            }
        }
    }
}

fn json_error(status: StatusCode, error: String) -> Response {
    let body = ErrorBody {
        error,
        status: status.as_u16(),
    };
    (status, axum::Json(body)).into_response()
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound(msg) => Self::NotFound(msg),
            CoreError::Conflict(msg) => Self::Conflict(msg),
            CoreError::Validation(msg) => Self::BadRequest(msg),
            CoreError::Repository(repo_err) => Self::Internal(format!("Storage: {repo_err}")),
            CoreError::ExternalService(msg) => Self::Internal(format!("Remote catalog: {msg}")),
            CoreError::Internal(msg) => Self::Internal(msg),
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}
