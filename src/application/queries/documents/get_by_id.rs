use super::DocumentQueryService;
use crate::application::{dto::DocumentDto, error::ApplicationResult, lookup};

pub struct GetDocumentByIdQuery {
    pub id: i64,
}

impl DocumentQueryService {
    pub async fn get_document_by_id(
        &self,
        query: GetDocumentByIdQuery,
    ) -> ApplicationResult<DocumentDto> {
        let id = lookup::document_id(query.id)?;
        let document = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| lookup::document_not_found(id))?;
        Ok(document.into())
    }
}
