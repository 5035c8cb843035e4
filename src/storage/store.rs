//! The `LogStore` trait — the seam between the relay and its persistence backend.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::types::LogRecord;
use crate::error::RelayError;

/// Operations the relay needs from a log collection.
///
/// No uniqueness constraint: duplicate payloads with different timestamps are
/// valid and expected.
#[async_trait]
pub trait LogStore: Send + Sync {
    /// Appends one record. Failures map to `RelayError::Persistence` so the
    /// consumer can decide between ack and nack.
    async fn insert(&self, record: LogRecord) -> Result<(), RelayError>;

    /// Returns every record with `from <= timestamp < to`, in store order.
    /// An empty result is not an error.
    async fn query_range(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<LogRecord>, RelayError>;

    /// Removes every record unconditionally. Succeeds on an empty collection.
    async fn delete_all(&self) -> Result<(), RelayError>;
}
