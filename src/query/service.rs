//! Range validation and retrieval.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::error::RelayError;
use crate::storage::store::LogStore;
use crate::storage::types::LogRecord;

/// Parses a path parameter into a UTC timestamp.
///
/// Accepts RFC 3339, a naive datetime (`YYYY-MM-DDTHH:MM:SS`, read as UTC),
/// or a bare date (UTC midnight).
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, RelayError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Ok(naive.and_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    Err(RelayError::Validation(raw.to_string()))
}

/// Validates both bounds and fetches every record in `[date_from, date_to)`.
///
/// An inverted or empty window is not an error; it just matches nothing.
pub async fn query_logs(
    store: &dyn LogStore,
    date_from: &str,
    date_to: &str,
) -> Result<Vec<LogRecord>, RelayError> {
    let from = parse_timestamp(date_from)?;
    let to = parse_timestamp(date_to)?;

    store.query_range(from, to).await
}
