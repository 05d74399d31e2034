use super::{DocumentCommandService, service::validate_content};
use crate::{
    application::{dto::DocumentDto, error::ApplicationResult, lookup},
    domain::document::DocumentUpdate,
};

pub struct UpdateDocumentCommand {
    pub id: i64,
    pub title: String,
    pub body: String,
}

impl DocumentCommandService {
    /// Replace title and body. Author and references keep their values.
    pub async fn update_document(
        &self,
        command: UpdateDocumentCommand,
    ) -> ApplicationResult<DocumentDto> {
        let (title, body) = validate_content(command.title, command.body)?;
        let id = lookup::document_id(command.id)?;

        let mut document = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| lookup::document_not_found(id))?;

        document.set_content(title, body);
        let updated = self
            .write_repo
            .update(DocumentUpdate::from(&document))
            .await?;

        tracing::info!(document_id = %updated.id, "document updated");
        Ok(updated.into())
    }
}
