use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use std::sync::Arc;

use super::service::query_logs;
use crate::error::RelayError;
use crate::storage::store::LogStore;

/// GET /logs/:date_from/:date_to — records in the half-open range.
pub async fn handle_get_logs(
    Path((date_from, date_to)): Path<(String, String)>,
    Extension(store): Extension<Arc<dyn LogStore>>,
) -> Response {
    match query_logs(store.as_ref(), &date_from, &date_to).await {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(e @ RelayError::Validation(_)) => {
            tracing::warn!("Rejected log query: {}", e);
            e.into_response()
        }
        Err(e) => {
            tracing::error!("Failed to query logs: {}", e);
            e.into_response()
        }
    }
}
