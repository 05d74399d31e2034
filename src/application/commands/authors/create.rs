use super::{AuthorCommandService, service::validate_names};
use crate::{
    application::{dto::AuthorDto, error::ApplicationResult},
    domain::author::NewAuthor,
};

pub struct CreateAuthorCommand {
    pub first_name: String,
    pub last_name: String,
}

impl AuthorCommandService {
    pub async fn create_author(&self, command: CreateAuthorCommand) -> ApplicationResult<AuthorDto> {
        let (first_name, last_name) = validate_names(command.first_name, command.last_name)?;

        let created = self
            .write_repo
            .insert(NewAuthor {
                first_name,
                last_name,
            })
            .await?;

        tracing::info!(author_id = %created.id, "author created");
        Ok(created.into())
    }
}
