//! Ingestion Module
//!
//! Bridges the message broker to the persistent store.
//!
//! ## Workflow
//! 1. **Trigger**: a POST to `/logs` asks the service to start consuming.
//! 2. **Attach**: connect to the broker, open a channel, declare the durable
//!    queue, and register a consumer. Failures here surface on the trigger.
//! 3. **Relay**: each delivery is persisted with an ingestion timestamp, then
//!    acknowledged; a failed insert is negatively acknowledged so the broker
//!    can redeliver. A failed message is never acknowledged.
//!
//! Triggering is idempotent: at most one consumer per queue is kept alive,
//! tracked by the `ConsumerRegistry`.

pub mod consumer;
pub mod handlers;
pub mod types;
