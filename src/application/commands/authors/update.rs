use super::{AuthorCommandService, service::validate_names};
use crate::{
    application::{dto::AuthorDto, error::ApplicationResult, lookup},
    domain::author::AuthorUpdate,
};

pub struct UpdateAuthorCommand {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

impl AuthorCommandService {
    pub async fn update_author(&self, command: UpdateAuthorCommand) -> ApplicationResult<AuthorDto> {
        let UpdateAuthorCommand {
            id,
            first_name,
            last_name,
        } = command;

        let (first_name, last_name) = validate_names(first_name, last_name)?;
        let id = lookup::author_id(id)?;

        let mut author = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| lookup::author_not_found(id))?;

        author.rename(first_name, last_name);
        let updated = self.write_repo.update(AuthorUpdate::from(&author)).await?;

        tracing::info!(author_id = %updated.id, "author updated");
        Ok(updated.into())
    }
}
