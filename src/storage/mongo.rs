//! MongoDB-backed `LogStore`.
//!
//! One collection, no indexes managed here. Timestamps are stored as BSON
//! datetimes (millisecond precision) so the range filter runs server-side.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Bson, Document};
use mongodb::{Client, Collection};

use super::store::LogStore;
use super::types::LogRecord;
use crate::error::RelayError;

pub struct MongoLogStore {
    collection: Collection<Document>,
}

impl MongoLogStore {
    /// Connects and pings the server so a dead store is caught at startup
    /// rather than on the first insert.
    pub async fn connect(
        uri: &str,
        db_name: &str,
        collection_name: &str,
    ) -> Result<Self, RelayError> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(|e| RelayError::Connection(format!("failed to connect to MongoDB: {}", e)))?;

        let database = client.database(db_name);
        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| RelayError::Connection(format!("MongoDB ping failed: {}", e)))?;

        Ok(Self {
            collection: database.collection(collection_name),
        })
    }
}

fn bson_timestamp(ts: DateTime<Utc>) -> Bson {
    Bson::DateTime(mongodb::bson::DateTime::from_millis(ts.timestamp_millis()))
}

fn record_from_document(doc: &Document) -> Option<LogRecord> {
    let log = doc.get_str("log").ok()?.to_string();
    let millis = doc.get_datetime("timestamp").ok()?.timestamp_millis();
    let timestamp = DateTime::from_timestamp_millis(millis)?;
    Some(LogRecord { log, timestamp })
}

#[async_trait]
impl LogStore for MongoLogStore {
    async fn insert(&self, record: LogRecord) -> Result<(), RelayError> {
        let doc = doc! {
            "log": &record.log,
            "timestamp": bson_timestamp(record.timestamp),
        };

        self.collection
            .insert_one(doc)
            .await
            .map_err(|e| RelayError::Persistence(e.to_string()))?;
        Ok(())
    }

    async fn query_range(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<LogRecord>, RelayError> {
        let filter = doc! {
            "timestamp": {
                "$gte": bson_timestamp(from),
                "$lt": bson_timestamp(to),
            }
        };

        let mut cursor = self
            .collection
            .find(filter)
            .await
            .map_err(|e| RelayError::Storage(e.to_string()))?;

        let mut records = Vec::new();
        while let Some(doc) = cursor
            .try_next()
            .await
            .map_err(|e| RelayError::Storage(e.to_string()))?
        {
            match record_from_document(&doc) {
                Some(record) => records.push(record),
                None => tracing::warn!("Skipping malformed document in log collection"),
            }
        }

        Ok(records)
    }

    async fn delete_all(&self) -> Result<(), RelayError> {
        self.collection
            .delete_many(doc! {})
            .await
            .map_err(|e| RelayError::Storage(e.to_string()))?;
        Ok(())
    }
}
