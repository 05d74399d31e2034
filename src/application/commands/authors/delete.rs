// src/application/commands/authors/delete.rs
use super::AuthorCommandService;
use crate::{
    application::{dto::CascadeDeletionDto, error::ApplicationResult, lookup},
    domain::errors::DomainError,
};

pub struct DeleteAuthorCommand {
    pub id: i64,
}

impl AuthorCommandService {
    /// Synchronous delete behind `DELETE /api/authors/{id}`.
    pub async fn delete_author(
        &self,
        command: DeleteAuthorCommand,
    ) -> ApplicationResult<CascadeDeletionDto> {
        let deletion = self.remove_with_documents(command.id).await?;
        tracing::info!(
            author_id = deletion.author_id,
            documents_removed = deletion.documents_removed,
            "author deleted"
        );
        Ok(deletion)
    }

    /// Cascading delete run by the queue consumer.
    ///
    /// Redelivered messages hit an author that is already gone; that surfaces
    /// as `NotFound` and leaves the store untouched.
    pub async fn delete_author_and_documents(
        &self,
        command: DeleteAuthorCommand,
    ) -> ApplicationResult<CascadeDeletionDto> {
        let deletion = self.remove_with_documents(command.id).await?;
        tracing::info!(
            author_id = deletion.author_id,
            documents_removed = deletion.documents_removed,
            "author and documents deleted"
        );
        Ok(deletion)
    }

    async fn remove_with_documents(&self, raw_id: i64) -> ApplicationResult<CascadeDeletionDto> {
        let id = lookup::author_id(raw_id)?;

        if !self.read_repo.exists(id).await? {
            return Err(lookup::author_not_found(id));
        }

        // The row can still vanish between the check and the transaction when
        // the synchronous and queued paths race on the same id.
        let deletion = self
            .write_repo
            .delete_with_documents(id)
            .await
            .map_err(|err| match err {
                DomainError::NotFound(_) => lookup::author_not_found(id),
                other => other.into(),
            })?;

        Ok(deletion.into())
    }
}
