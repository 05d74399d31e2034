use super::AuthorQueryService;
use crate::application::{dto::AuthorDto, error::ApplicationResult, lookup};

pub struct GetAuthorByIdQuery {
    pub id: i64,
}

impl AuthorQueryService {
    pub async fn get_author_by_id(&self, query: GetAuthorByIdQuery) -> ApplicationResult<AuthorDto> {
        let id = lookup::author_id(query.id)?;
        let author = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| lookup::author_not_found(id))?;
        Ok(author.into())
    }
}
