//! Ingestion Data Types

use serde::Serialize;

/// Response returned as soon as the consumer is attached (or found to be
/// already attached). The trigger never waits for messages to arrive.
#[derive(Debug, Serialize)]
pub struct TransferResponse {
    pub message: String,
}
