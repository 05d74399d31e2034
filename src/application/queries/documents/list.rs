use super::DocumentQueryService;
use crate::application::{dto::DocumentDto, error::ApplicationResult};

impl DocumentQueryService {
    pub async fn list_documents(&self) -> ApplicationResult<Vec<DocumentDto>> {
        let documents = self.read_repo.list().await?;
        Ok(documents.into_iter().map(Into::into).collect())
    }
}
