//! Storage Module Tests
//!
//! Validates the half-open range semantics and the purge behavior against the
//! in-memory backend, plus the purge handler's status translation.
//!
//! *Note: the MongoDB backend carries the same contract and is exercised
//! against a live store in deployment, not here.*

#[cfg(test)]
mod tests {
    use crate::error::RelayError;
    use crate::storage::handlers::handle_delete_logs;
    use crate::storage::memory::MemoryLogStore;
    use crate::storage::store::LogStore;
    use crate::storage::types::LogRecord;
    use async_trait::async_trait;
    use axum::Extension;
    use axum::http::StatusCode;
    use chrono::{DateTime, Utc};
    use std::sync::Arc;

    fn record_at(log: &str, ts: &str) -> LogRecord {
        LogRecord {
            log: log.to_string(),
            timestamp: ts.parse::<DateTime<Utc>>().unwrap(),
        }
    }

    fn ts(raw: &str) -> DateTime<Utc> {
        raw.parse().unwrap()
    }

    // ============================================================
    // RANGE QUERY TESTS
    // ============================================================

    #[tokio::test]
    async fn test_query_range_is_half_open() {
        let store = MemoryLogStore::new();
        store
            .insert(record_at("at start", "2024-01-01T00:00:00Z"))
            .await
            .unwrap();
        store
            .insert(record_at("at end", "2024-01-02T00:00:00Z"))
            .await
            .unwrap();

        let records = store
            .query_range(ts("2024-01-01T00:00:00Z"), ts("2024-01-02T00:00:00Z"))
            .await
            .unwrap();

        // Start bound inclusive, end bound exclusive
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].log, "at start");
    }

    #[tokio::test]
    async fn test_query_january_window_returns_first_two() {
        let store = MemoryLogStore::new();
        store
            .insert(record_at("first", "2024-01-01T00:00:00Z"))
            .await
            .unwrap();
        store
            .insert(record_at("second", "2024-01-15T00:00:00Z"))
            .await
            .unwrap();
        store
            .insert(record_at("third", "2024-02-01T00:00:00Z"))
            .await
            .unwrap();

        let records = store
            .query_range(ts("2024-01-01T00:00:00Z"), ts("2024-02-01T00:00:00Z"))
            .await
            .unwrap();

        let logs: Vec<&str> = records.iter().map(|r| r.log.as_str()).collect();
        assert_eq!(logs, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_query_empty_result_is_not_an_error() {
        let store = MemoryLogStore::new();

        let records = store
            .query_range(ts("2024-01-01T00:00:00Z"), ts("2024-02-01T00:00:00Z"))
            .await
            .unwrap();

        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_log_text_is_valid() {
        let store = MemoryLogStore::new();
        store
            .insert(record_at("same line", "2024-01-01T10:00:00Z"))
            .await
            .unwrap();
        store
            .insert(record_at("same line", "2024-01-01T11:00:00Z"))
            .await
            .unwrap();

        let records = store
            .query_range(ts("2024-01-01T00:00:00Z"), ts("2024-01-02T00:00:00Z"))
            .await
            .unwrap();

        assert_eq!(records.len(), 2);
    }

    // ============================================================
    // PURGE TESTS
    // ============================================================

    #[tokio::test]
    async fn test_delete_all_then_query_returns_empty() {
        let store = MemoryLogStore::new();
        store
            .insert(record_at("one", "2024-01-01T00:00:00Z"))
            .await
            .unwrap();
        store
            .insert(record_at("two", "2024-06-01T00:00:00Z"))
            .await
            .unwrap();

        store.delete_all().await.unwrap();

        let records = store
            .query_range(ts("2000-01-01T00:00:00Z"), ts("2100-01-01T00:00:00Z"))
            .await
            .unwrap();
        assert!(records.is_empty());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_delete_all_on_empty_store_succeeds() {
        let store = MemoryLogStore::new();
        assert!(store.delete_all().await.is_ok());
    }

    // ============================================================
    // PURGE HANDLER TESTS
    // ============================================================

    struct BrokenStore;

    #[async_trait]
    impl LogStore for BrokenStore {
        async fn insert(&self, _record: LogRecord) -> Result<(), RelayError> {
            Err(RelayError::Persistence("store offline".to_string()))
        }

        async fn query_range(
            &self,
            _from: DateTime<Utc>,
            _to: DateTime<Utc>,
        ) -> Result<Vec<LogRecord>, RelayError> {
            Err(RelayError::Storage("store offline".to_string()))
        }

        async fn delete_all(&self) -> Result<(), RelayError> {
            Err(RelayError::Storage("store offline".to_string()))
        }
    }

    #[tokio::test]
    async fn test_delete_handler_returns_200_on_empty_collection() {
        let store: Arc<dyn LogStore> = Arc::new(MemoryLogStore::new());

        let response = handle_delete_logs(Extension(store)).await;

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_delete_handler_returns_500_on_store_failure() {
        let store: Arc<dyn LogStore> = Arc::new(BrokenStore);

        let response = handle_delete_logs(Extension(store)).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
