//! Error Taxonomy
//!
//! All failures that cross a component boundary are expressed as a `RelayError`.
//! Handlers translate them into an HTTP status plus a JSON `{"error": ...}` body;
//! nothing past startup is allowed to take the process down.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Failure categories of the relay.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Broker or store unreachable. Fatal at startup, 500 on an ingestion trigger.
    #[error("connection failed: {0}")]
    Connection(String),
    /// Unparseable date range. Reported as 400, never retried.
    #[error("invalid date parameter: {0}")]
    Validation(String),
    /// A single record could not be inserted. Never surfaces over HTTP; the
    /// consumer answers with a negative acknowledgment instead.
    #[error("failed to persist log record: {0}")]
    Persistence(String),
    /// Query or delete against the store failed. Reported as 500.
    #[error("storage operation failed: {0}")]
    Storage(String),
}

/// JSON body sent alongside any non-2xx status.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl RelayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::Validation(_) => StatusCode::BAD_REQUEST,
            RelayError::Connection(_) | RelayError::Persistence(_) | RelayError::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}
