use super::{DocumentCommandService, service::validate_content};
use crate::{
    application::{dto::DocumentDto, error::ApplicationResult, lookup},
    domain::{document::NewDocument, errors::DomainError},
};

pub struct CreateDocumentCommand {
    pub title: String,
    pub body: String,
    pub author_id: Option<i64>,
    pub references: Vec<String>,
}

impl DocumentCommandService {
    pub async fn create_document(
        &self,
        command: CreateDocumentCommand,
    ) -> ApplicationResult<DocumentDto> {
        let CreateDocumentCommand {
            title,
            body,
            author_id,
            references,
        } = command;

        let (title, body) = validate_content(title, body)?;

        let author_id = match author_id {
            Some(raw) => {
                let id = lookup::author_id(raw)?;
                if !self.author_repo.exists(id).await? {
                    return Err(lookup::author_not_found(id));
                }
                Some(id)
            }
            None => None,
        };

        let created = self
            .write_repo
            .insert(NewDocument {
                title,
                body,
                author_id,
                references,
            })
            .await
            .map_err(|err| match (err, author_id) {
                // author removed after the existence check
                (DomainError::NotFound(_), Some(id)) => lookup::author_not_found(id),
                (other, _) => other.into(),
            })?;

        tracing::info!(
            document_id = %created.id,
            author_id = ?created.author_id.map(i64::from),
            "document created"
        );
        Ok(created.into())
    }
}
