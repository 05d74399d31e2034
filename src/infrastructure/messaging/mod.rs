// src/infrastructure/messaging/mod.rs
//! Author deletion queue on a Redis Stream.
//!
//! One stream, one consumer group. Entries carry a single `payload` field
//! holding the JSON encoded `AuthorDeletionMessage`. An entry is acknowledged
//! once it has been handled (including "author not found"); failures leave it
//! pending so another poll can reclaim it, up to `max_deliveries` times.
mod consumer;
mod handler;
mod redis_stream;

pub use consumer::{AuthorDeletionConsumer, QueueError};
pub use handler::{AuthorDeletionHandler, Disposition};
pub use redis_stream::{RedisAuthorDeletionQueue, create_consumer_pool, create_pool};

use std::time::Duration;

pub const DEFAULT_QUEUE_NAME: &str = "author-deletion-queue";
pub const DEFAULT_GROUP_NAME: &str = "author-deletion-workers";
pub(crate) const PAYLOAD_FIELD: &str = "payload";

/// Milliseconds for Redis arguments, saturating at `u64::MAX`.
pub(crate) fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StreamSettings {
    pub stream: String,
    pub group: String,
    pub consumer: String,
    pub batch_size: usize,
    pub block: Duration,
    pub claim_idle: Duration,
    pub max_deliveries: u64,
    /// Approximate stream length cap for `XADD MAXLEN ~`; 0 disables trimming.
    pub max_len: usize,
}

impl Default for StreamSettings {
    fn default() -> Self {
        Self {
            stream: DEFAULT_QUEUE_NAME.into(),
            group: DEFAULT_GROUP_NAME.into(),
            consumer: format!("consumer-{}", uuid::Uuid::new_v4()),
            batch_size: 16,
            block: Duration::from_secs(5),
            claim_idle: Duration::from_secs(60),
            max_deliveries: 5,
            max_len: 0,
        }
    }
}
