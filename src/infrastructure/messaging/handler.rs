// src/infrastructure/messaging/handler.rs
use crate::application::{
    commands::authors::{AuthorCommandService, DeleteAuthorCommand},
    dto::AuthorDeletionMessage,
    error::ApplicationError,
};
use crate::domain::errors::DomainError;
use std::sync::Arc;

/// What the consumer does with a stream entry after handling it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Acknowledge; the entry will not be delivered again.
    Ack,
    /// Leave pending so it is reclaimed after the idle timeout.
    Retry,
}

/// Turns one queued payload into a cascading delete.
#[derive(Clone)]
pub struct AuthorDeletionHandler {
    commands: Arc<AuthorCommandService>,
}

impl AuthorDeletionHandler {
    pub fn new(commands: Arc<AuthorCommandService>) -> Self {
        Self { commands }
    }

    pub async fn handle(&self, payload: &str) -> Disposition {
        let message = match AuthorDeletionMessage::from_json(payload) {
            Ok(message) => message,
            Err(err) => {
                tracing::error!(error = %err, "dropping malformed author deletion message");
                return Disposition::Ack;
            }
        };

        let result = self
            .commands
            .delete_author_and_documents(DeleteAuthorCommand {
                id: message.author_id,
            })
            .await;

        match result {
            Ok(deletion) => {
                tracing::info!(
                    author_id = deletion.author_id,
                    documents_removed = deletion.documents_removed,
                    request_id = %message.request_id,
                    "author deletion message processed"
                );
                Disposition::Ack
            }
            Err(err) if err.is_not_found() => {
                tracing::warn!(
                    author_id = message.author_id,
                    request_id = %message.request_id,
                    error = %err,
                    "author deletion skipped: author not found"
                );
                Disposition::Ack
            }
            Err(
                err @ (ApplicationError::Validation(_)
                | ApplicationError::Domain(
                    DomainError::Validation(_) | DomainError::InvalidField { .. },
                )),
            ) => {
                tracing::error!(
                    author_id = message.author_id,
                    request_id = %message.request_id,
                    error = %err,
                    "dropping author deletion message that can never succeed"
                );
                Disposition::Ack
            }
            Err(err) => {
                tracing::error!(
                    author_id = message.author_id,
                    request_id = %message.request_id,
                    error = %err,
                    "author deletion failed; message left pending"
                );
                Disposition::Retry
            }
        }
    }
}
