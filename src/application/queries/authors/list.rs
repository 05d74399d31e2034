use super::AuthorQueryService;
use crate::application::{dto::AuthorDto, error::ApplicationResult};

impl AuthorQueryService {
    pub async fn list_authors(&self) -> ApplicationResult<Vec<AuthorDto>> {
        let authors = self.read_repo.list().await?;
        Ok(authors.into_iter().map(Into::into).collect())
    }
}
