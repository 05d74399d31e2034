use super::DocumentCommandService;
use crate::{
    application::{error::ApplicationResult, lookup},
    domain::errors::DomainError,
};

pub struct DeleteDocumentCommand {
    pub id: i64,
}

impl DocumentCommandService {
    pub async fn delete_document(&self, command: DeleteDocumentCommand) -> ApplicationResult<()> {
        let id = lookup::document_id(command.id)?;

        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| lookup::document_not_found(id))?;

        self.write_repo.delete(id).await.map_err(|err| match err {
            DomainError::NotFound(_) => lookup::document_not_found(id),
            other => other.into(),
        })?;

        tracing::info!(document_id = %id, "document deleted");
        Ok(())
    }
}
