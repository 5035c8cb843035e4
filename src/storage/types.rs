//! Storage Data Types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single persisted log entry.
///
/// The payload is an opaque string; no schema is imposed on it. The timestamp is
/// assigned when the record is persisted, not when the producer published the
/// message, so query ranges reflect ingestion time. Records are immutable once
/// written and only ever removed by the bulk purge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub log: String,
    pub timestamp: DateTime<Utc>,
}

impl LogRecord {
    /// Builds a record stamped with the current time.
    pub fn new(log: String) -> Self {
        Self {
            log,
            timestamp: Utc::now(),
        }
    }
}
