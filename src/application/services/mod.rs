// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{authors::AuthorCommandService, documents::DocumentCommandService},
        dto::{ApiCredentials, AuthenticatedUser},
        error::ApplicationError,
        ports::{messaging::AuthorDeletionPublisher, security::PasswordHasher, time::Clock},
        queries::{authors::AuthorQueryService, documents::DocumentQueryService},
    },
    domain::{
        author::{AuthorReadRepository, AuthorWriteRepository},
        document::{DocumentReadRepository, DocumentWriteRepository},
    },
};

pub struct ApplicationServices {
    pub author_commands: Arc<AuthorCommandService>,
    pub author_queries: Arc<AuthorQueryService>,
    pub document_commands: Arc<DocumentCommandService>,
    pub document_queries: Arc<DocumentQueryService>,
    password_hasher: Arc<dyn PasswordHasher>,
    credentials: ApiCredentials,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        author_write_repo: Arc<dyn AuthorWriteRepository>,
        author_read_repo: Arc<dyn AuthorReadRepository>,
        document_write_repo: Arc<dyn DocumentWriteRepository>,
        document_read_repo: Arc<dyn DocumentReadRepository>,
        deletion_publisher: Arc<dyn AuthorDeletionPublisher>,
        password_hasher: Arc<dyn PasswordHasher>,
        credentials: ApiCredentials,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let author_commands = Arc::new(AuthorCommandService::new(
            Arc::clone(&author_write_repo),
            Arc::clone(&author_read_repo),
            Arc::clone(&deletion_publisher),
            Arc::clone(&clock),
        ));
        let author_queries = Arc::new(AuthorQueryService::new(Arc::clone(&author_read_repo)));

        let document_commands = Arc::new(DocumentCommandService::new(
            Arc::clone(&document_write_repo),
            Arc::clone(&document_read_repo),
            Arc::clone(&author_read_repo),
        ));
        let document_queries =
            Arc::new(DocumentQueryService::new(Arc::clone(&document_read_repo)));

        Self {
            author_commands,
            author_queries,
            document_commands,
            document_queries,
            password_hasher,
            credentials,
        }
    }

    /// Check HTTP Basic credentials against the configured account.
    ///
    /// Unknown usernames and wrong passwords produce the same error so the
    /// response does not reveal which part was wrong.
    pub async fn authenticate_basic(
        &self,
        username: &str,
        password: &str,
    ) -> ApplicationResult<AuthenticatedUser> {
        if username != self.credentials.username {
            return Err(ApplicationError::unauthorized("invalid credentials"));
        }

        self.password_hasher
            .verify(password, &self.credentials.password_hash)
            .await?;

        Ok(AuthenticatedUser {
            username: username.to_owned(),
        })
    }
}
