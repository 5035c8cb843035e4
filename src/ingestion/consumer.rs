//! Queue Consumer
//!
//! The consume-and-persist relay loop and its acknowledgment contract.
//!
//! ## Contract
//! - A delivery is acknowledged only after its record is persisted.
//! - A failed insert results in a negative acknowledgment with requeue, so the
//!   broker redelivers or dead-letters per its policy. Nothing is dropped
//!   silently.
//! - `begin_consuming` reports connect/channel/declare failures synchronously;
//!   once the loop is spawned, failures are observable only through logs and
//!   negative acknowledgments.

use dashmap::DashMap;
use futures::StreamExt;
use lapin::options::{
    BasicAckOptions, BasicConsumeOptions, BasicNackOptions, QueueDeclareOptions,
};
use lapin::types::FieldTable;
use lapin::{Connection, ConnectionProperties, Consumer};
use std::sync::Arc;

use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::storage::store::LogStore;
use crate::storage::types::LogRecord;

/// What the relay loop tells the broker about one delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// Record persisted; the broker may discard the message.
    Ack,
    /// Persistence failed; the broker should redeliver or dead-letter.
    Nack,
}

/// Tracks which queues currently have a live consumer attached.
///
/// Repeated triggers against the same queue reuse the existing consumer
/// instead of stacking new connections. When a consumer loop ends (broker
/// connection lost), its queue is released so a later trigger can re-attach.
#[derive(Default)]
pub struct ConsumerRegistry {
    active: DashMap<String, ()>,
}

impl ConsumerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims a queue for a new consumer. Returns false if one is already
    /// attached.
    pub(crate) fn try_claim(&self, queue: &str) -> bool {
        self.active.insert(queue.to_string(), ()).is_none()
    }

    pub(crate) fn release(&self, queue: &str) {
        self.active.remove(queue);
    }

    pub fn is_active(&self, queue: &str) -> bool {
        self.active.contains_key(queue)
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}

/// Decides ack or nack for a single delivery by persisting it.
///
/// The payload is decoded as text (lossily, so a mangled message still lands
/// in the store rather than vanishing) and stamped with the current time:
/// query ranges reflect ingestion time, not publish time.
pub async fn handle_delivery(store: &dyn LogStore, payload: &[u8]) -> DeliveryOutcome {
    let log = String::from_utf8_lossy(payload).into_owned();
    tracing::debug!("Received log from queue: {}", log);

    match store.insert(LogRecord::new(log)).await {
        Ok(()) => DeliveryOutcome::Ack,
        Err(e) => {
            tracing::error!("Failed to persist log record: {}", e);
            DeliveryOutcome::Nack
        }
    }
}

/// Attaches a consumer to the configured queue and spawns the relay loop.
///
/// Returns as soon as the consumer is registered with the broker; message
/// handling continues in the background for the life of the process. If a
/// consumer is already attached to the queue this is a no-op success.
pub async fn begin_consuming(
    config: &RelayConfig,
    store: Arc<dyn LogStore>,
    registry: Arc<ConsumerRegistry>,
) -> Result<(), RelayError> {
    let queue = config.queue.clone();

    if !registry.try_claim(&queue) {
        tracing::info!("Consumer already attached to queue {}, reusing it", queue);
        return Ok(());
    }

    let (connection, consumer) = match attach(config, &queue).await {
        Ok(pair) => pair,
        Err(e) => {
            registry.release(&queue);
            return Err(e);
        }
    };

    tracing::info!("Consuming logs from queue {}", queue);

    tokio::spawn(async move {
        // The connection must outlive the consumer stream; it moves into this
        // task and is dropped only after the loop ends.
        run_relay_loop(consumer, store, &queue).await;
        drop(connection);
        registry.release(&queue);
        tracing::warn!("Consumer for queue {} stopped", queue);
    });

    Ok(())
}

/// Connection, channel, durable queue declare, consumer registration. Every
/// failure on this path surfaces to the triggering request.
async fn attach(config: &RelayConfig, queue: &str) -> Result<(Connection, Consumer), RelayError> {
    let connection = Connection::connect(&config.amqp_url(), ConnectionProperties::default())
        .await
        .map_err(|e| RelayError::Connection(format!("failed to connect to broker: {}", e)))?;

    let channel = connection
        .create_channel()
        .await
        .map_err(|e| RelayError::Connection(format!("failed to open channel: {}", e)))?;

    channel
        .queue_declare(
            queue,
            QueueDeclareOptions {
                durable: true,
                ..Default::default()
            },
            FieldTable::default(),
        )
        .await
        .map_err(|e| RelayError::Connection(format!("failed to declare queue {}: {}", queue, e)))?;

    let consumer = channel
        .basic_consume(
            queue,
            "log-relay",
            BasicConsumeOptions::default(),
            FieldTable::default(),
        )
        .await
        .map_err(|e| {
            RelayError::Connection(format!("failed to start consuming {}: {}", queue, e))
        })?;

    Ok((connection, consumer))
}

async fn run_relay_loop(mut consumer: Consumer, store: Arc<dyn LogStore>, queue: &str) {
    while let Some(delivery) = consumer.next().await {
        let delivery = match delivery {
            Ok(d) => d,
            Err(e) => {
                tracing::error!("Broker delivery error on queue {}: {}", queue, e);
                continue;
            }
        };

        match handle_delivery(store.as_ref(), &delivery.data).await {
            DeliveryOutcome::Ack => {
                if let Err(e) = delivery.ack(BasicAckOptions::default()).await {
                    tracing::error!("Failed to ack message on queue {}: {}", queue, e);
                }
            }
            DeliveryOutcome::Nack => {
                let options = BasicNackOptions {
                    requeue: true,
                    ..Default::default()
                };
                if let Err(e) = delivery.nack(options).await {
                    tracing::error!("Failed to nack message on queue {}: {}", queue, e);
                }
            }
        }
    }
}
