//! In-memory `LogStore`.
//!
//! A plain `Vec` behind an `RwLock`. Backs the unit tests and is good enough
//! for local runs without a real document store.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::store::LogStore;
use super::types::LogRecord;
use crate::error::RelayError;

#[derive(Default)]
pub struct MemoryLogStore {
    records: RwLock<Vec<LogRecord>>,
}

impl MemoryLogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl LogStore for MemoryLogStore {
    async fn insert(&self, record: LogRecord) -> Result<(), RelayError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| RelayError::Persistence("store lock poisoned".to_string()))?;
        records.push(record);
        Ok(())
    }

    async fn query_range(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<LogRecord>, RelayError> {
        let records = self
            .records
            .read()
            .map_err(|_| RelayError::Storage("store lock poisoned".to_string()))?;

        Ok(records
            .iter()
            .filter(|r| r.timestamp >= from && r.timestamp < to)
            .cloned()
            .collect())
    }

    async fn delete_all(&self) -> Result<(), RelayError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| RelayError::Storage("store lock poisoned".to_string()))?;
        records.clear();
        Ok(())
    }
}
