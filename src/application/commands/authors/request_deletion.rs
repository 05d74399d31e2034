use super::AuthorCommandService;
use crate::application::{dto::AuthorDeletionMessage, error::ApplicationResult};

pub struct RequestAuthorDeletionCommand {
    pub author_id: i64,
}

impl AuthorCommandService {
    /// Queue a cascading delete. The author is not looked up here; the
    /// consumer reports unknown ids when it processes the message.
    pub async fn request_author_deletion(
        &self,
        command: RequestAuthorDeletionCommand,
    ) -> ApplicationResult<AuthorDeletionMessage> {
        let message = AuthorDeletionMessage::new(command.author_id, self.clock.now());
        self.publisher.publish(&message).await?;

        tracing::info!(
            author_id = message.author_id,
            request_id = %message.request_id,
            "author deletion requested"
        );
        Ok(message)
    }
}
