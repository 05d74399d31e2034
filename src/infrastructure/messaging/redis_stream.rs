// src/infrastructure/messaging/redis_stream.rs
use super::{PAYLOAD_FIELD, StreamSettings};
use crate::application::{
    ApplicationResult, dto::AuthorDeletionMessage, error::ApplicationError,
    ports::messaging::AuthorDeletionPublisher,
};
use async_trait::async_trait;
use deadpool_redis::{Config as DeadpoolConfig, Manager, Pool, Runtime};
use redis::AsyncConnectionConfig;
use std::time::Duration;

/// Extra time granted on top of `BLOCK` before a consumer read counts as timed out.
const BLOCK_RESPONSE_MARGIN: Duration = Duration::from_secs(5);

/// Create a Redis pool from a URL (e.g. redis://:password@host:6379/0).
/// Connections are opened lazily on first use.
pub fn create_pool(url: &str) -> ApplicationResult<Pool> {
    DeadpoolConfig::from_url(url)
        .create_pool(Some(Runtime::Tokio1))
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))
}

/// Pool for the consumer. `XREADGROUP ... BLOCK` holds the reply for up to
/// `settings.block`, so the response timeout must outlast it; otherwise the
/// client gives up while the server still delivers into the abandoned read.
pub fn create_consumer_pool(url: &str, settings: &StreamSettings) -> ApplicationResult<Pool> {
    let connection = AsyncConnectionConfig::new()
        .set_response_timeout(Some(settings.block + BLOCK_RESPONSE_MARGIN));
    let manager = Manager::new_with_config(url, connection)
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

    Pool::builder(manager)
        .runtime(Runtime::Tokio1)
        .build()
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))
}

/// Producer side of the queue: appends one stream entry per request.
#[derive(Clone)]
pub struct RedisAuthorDeletionQueue {
    pool: Pool,
    stream: String,
    max_len: usize,
}

impl RedisAuthorDeletionQueue {
    pub fn new(pool: Pool, settings: &StreamSettings) -> Self {
        Self {
            pool,
            stream: settings.stream.clone(),
            max_len: settings.max_len,
        }
    }
}

#[async_trait]
impl AuthorDeletionPublisher for RedisAuthorDeletionQueue {
    async fn publish(&self, message: &AuthorDeletionMessage) -> ApplicationResult<()> {
        let payload = message
            .to_json()
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        let mut cmd = redis::cmd("XADD");
        cmd.arg(&self.stream);
        if self.max_len > 0 {
            cmd.arg("MAXLEN").arg("~").arg(self.max_len);
        }
        cmd.arg("*").arg(PAYLOAD_FIELD).arg(payload);

        let entry_id: String = cmd
            .query_async(&mut conn)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        tracing::debug!(
            stream = %self.stream,
            entry_id = %entry_id,
            author_id = message.author_id,
            "author deletion message published"
        );
        Ok(())
    }
}
