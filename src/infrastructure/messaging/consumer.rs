// src/infrastructure/messaging/consumer.rs
use super::{AuthorDeletionHandler, Disposition, PAYLOAD_FIELD, StreamSettings, millis};
use deadpool_redis::{Connection, Pool, PoolError};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::watch;

const RETRY_BACKOFF: Duration = Duration::from_secs(2);

type StreamEntry = (String, Vec<(String, String)>);
type ReadGroupReply = Option<Vec<(String, Vec<StreamEntry>)>>;
type PendingEntry = (String, String, u64, u64);

#[derive(Debug, Error)]
pub enum QueueError {
    #[error("redis pool error: {0}")]
    Pool(#[from] PoolError),
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),
}

impl QueueError {
    fn is_missing_group(&self) -> bool {
        matches!(self, Self::Redis(err) if err.to_string().contains("NOGROUP"))
    }
}

/// Reads the deletion stream through a consumer group and feeds entries to
/// the handler. Each poll first reclaims entries that stayed pending longer
/// than `claim_idle`, then reads new ones.
pub struct AuthorDeletionConsumer {
    pool: Pool,
    settings: StreamSettings,
    handler: AuthorDeletionHandler,
}

impl AuthorDeletionConsumer {
    pub fn new(pool: Pool, settings: StreamSettings, handler: AuthorDeletionHandler) -> Self {
        Self {
            pool,
            settings,
            handler,
        }
    }

    /// Run until `shutdown` flips to true or its sender is dropped.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        tracing::info!(
            stream = %self.settings.stream,
            group = %self.settings.group,
            consumer = %self.settings.consumer,
            "author deletion consumer started"
        );

        let mut group_ready = false;
        loop {
            if *shutdown.borrow() {
                break;
            }

            let outcome = tokio::select! {
                _ = shutdown.changed() => break,
                outcome = self.step(group_ready) => outcome,
            };

            match outcome {
                Ok(processed) => {
                    group_ready = true;
                    if processed > 0 {
                        tracing::debug!(processed, "author deletion batch handled");
                    }
                }
                Err(err) => {
                    if err.is_missing_group() {
                        group_ready = false;
                    }
                    tracing::warn!(error = %err, "author deletion consumer poll failed; backing off");
                    tokio::select! {
                        _ = shutdown.changed() => break,
                        _ = tokio::time::sleep(RETRY_BACKOFF) => {}
                    }
                }
            }
        }

        tracing::info!(consumer = %self.settings.consumer, "author deletion consumer stopped");
    }

    async fn step(&self, group_ready: bool) -> Result<usize, QueueError> {
        if !group_ready {
            self.ensure_group().await?;
        }
        self.poll_once().await
    }

    /// Create the consumer group (and the stream) if missing. Starting at id
    /// `0` keeps entries published before the first consumer came up.
    pub async fn ensure_group(&self) -> Result<(), QueueError> {
        let mut conn = self.pool.get().await?;
        let created: redis::RedisResult<String> = redis::cmd("XGROUP")
            .arg("CREATE")
            .arg(&self.settings.stream)
            .arg(&self.settings.group)
            .arg("0")
            .arg("MKSTREAM")
            .query_async(&mut conn)
            .await;

        match created {
            Ok(_) => {
                tracing::info!(
                    stream = %self.settings.stream,
                    group = %self.settings.group,
                    "consumer group created"
                );
                Ok(())
            }
            Err(err) if err.to_string().contains("BUSYGROUP") => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    /// Handle one batch of reclaimed and new entries; returns how many were handled.
    pub async fn poll_once(&self) -> Result<usize, QueueError> {
        let mut conn = self.pool.get().await?;
        let mut handled = self.reclaim_stale(&mut conn).await?;

        let reply: ReadGroupReply = redis::cmd("XREADGROUP")
            .arg("GROUP")
            .arg(&self.settings.group)
            .arg(&self.settings.consumer)
            .arg("COUNT")
            .arg(self.settings.batch_size)
            .arg("BLOCK")
            .arg(millis(self.settings.block))
            .arg("STREAMS")
            .arg(&self.settings.stream)
            .arg(">")
            .query_async(&mut conn)
            .await?;

        for (_, entries) in reply.unwrap_or_default() {
            for (id, fields) in entries {
                self.process_entry(&mut conn, &id, &fields).await?;
                handled += 1;
            }
        }

        Ok(handled)
    }

    async fn reclaim_stale(&self, conn: &mut Connection) -> Result<usize, QueueError> {
        let idle_ms = millis(self.settings.claim_idle);
        let pending: Vec<PendingEntry> = redis::cmd("XPENDING")
            .arg(&self.settings.stream)
            .arg(&self.settings.group)
            .arg("IDLE")
            .arg(idle_ms)
            .arg("-")
            .arg("+")
            .arg(self.settings.batch_size)
            .query_async(&mut *conn)
            .await?;

        let mut retry_ids = Vec::with_capacity(pending.len());
        for (id, owner, _, deliveries) in pending {
            if deliveries >= self.settings.max_deliveries {
                tracing::error!(
                    entry_id = %id,
                    owner = %owner,
                    deliveries,
                    "dropping author deletion message after repeated failures"
                );
                self.ack(conn, &id).await?;
            } else {
                retry_ids.push(id);
            }
        }

        if retry_ids.is_empty() {
            return Ok(0);
        }

        let claimed: Vec<StreamEntry> = redis::cmd("XCLAIM")
            .arg(&self.settings.stream)
            .arg(&self.settings.group)
            .arg(&self.settings.consumer)
            .arg(idle_ms)
            .arg(&retry_ids)
            .query_async(&mut *conn)
            .await?;

        for (id, fields) in &claimed {
            tracing::info!(entry_id = %id, "retrying reclaimed author deletion message");
            self.process_entry(conn, id, fields).await?;
        }

        Ok(claimed.len())
    }

    async fn process_entry(
        &self,
        conn: &mut Connection,
        id: &str,
        fields: &[(String, String)],
    ) -> Result<Disposition, QueueError> {
        let disposition = match fields.iter().find(|(name, _)| name == PAYLOAD_FIELD) {
            Some((_, payload)) => self.handler.handle(payload).await,
            None => {
                tracing::error!(entry_id = %id, "stream entry has no payload field; dropping");
                Disposition::Ack
            }
        };

        if disposition == Disposition::Ack {
            self.ack(conn, id).await?;
        }
        Ok(disposition)
    }

    async fn ack(&self, conn: &mut Connection, id: &str) -> Result<(), QueueError> {
        let _: i64 = redis::cmd("XACK")
            .arg(&self.settings.stream)
            .arg(&self.settings.group)
            .arg(id)
            .query_async(&mut *conn)
            .await?;
        Ok(())
    }
}
