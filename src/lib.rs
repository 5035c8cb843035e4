//! Log Relay Service Library
//!
//! Relays messages from an AMQP queue into a time-indexed document collection
//! and serves them back over HTTP.
//!
//! ## Architecture Modules
//! - **`config`**: environment-derived runtime settings (broker, store, bind
//!   address) assembled into one explicit `RelayConfig`.
//! - **`error`**: the `RelayError` taxonomy and its mapping to HTTP responses.
//! - **`storage`**: the `LogStore` seam with MongoDB and in-memory backends,
//!   plus the bulk purge endpoint.
//! - **`ingestion`**: the queue consumer — attach on demand, persist each
//!   delivery with an ingestion timestamp, ack on success, nack on failure.
//! - **`query`**: date validation and half-open time-range retrieval.

pub mod config;
pub mod error;
pub mod ingestion;
pub mod query;
pub mod storage;
