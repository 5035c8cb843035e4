use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use std::sync::Arc;

use super::consumer::{begin_consuming, ConsumerRegistry};
use super::types::TransferResponse;
use crate::config::RelayConfig;
use crate::storage::store::LogStore;

/// POST /logs — starts relaying messages from the configured queue.
///
/// Responds as soon as the consumer is attached; it never waits for a message
/// to arrive. Broker connect or channel failures come back as a 500.
pub async fn handle_transfer_logs(
    Extension(config): Extension<Arc<RelayConfig>>,
    Extension(store): Extension<Arc<dyn LogStore>>,
    Extension(registry): Extension<Arc<ConsumerRegistry>>,
) -> Response {
    match begin_consuming(&config, store, registry).await {
        Ok(()) => (
            StatusCode::OK,
            Json(TransferResponse {
                message: "Logs transfer in progress".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to start log transfer: {}", e);
            e.into_response()
        }
    }
}
