use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde::Serialize;
use std::sync::Arc;

use super::store::LogStore;

#[derive(Debug, Serialize)]
pub struct PurgeResponse {
    pub message: String,
}

/// DELETE /logs — unconditionally removes every stored record.
/// Purging an empty collection is a success, not an error.
pub async fn handle_delete_logs(Extension(store): Extension<Arc<dyn LogStore>>) -> Response {
    match store.delete_all().await {
        Ok(()) => {
            tracing::info!("Purged log collection");
            (
                StatusCode::OK,
                Json(PurgeResponse {
                    message: "Logs deleted successfully".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to delete logs: {}", e);
            e.into_response()
        }
    }
}
