use crate::application::{ApplicationResult, dto::AuthorDeletionMessage};
use async_trait::async_trait;

/// Producer side of the author deletion queue.
#[async_trait]
pub trait AuthorDeletionPublisher: Send + Sync {
    async fn publish(&self, message: &AuthorDeletionMessage) -> ApplicationResult<()>;
}
