// src/application/commands/authors/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult, FieldErrors},
        ports::{messaging::AuthorDeletionPublisher, time::Clock},
    },
    domain::author::{AuthorReadRepository, AuthorWriteRepository, FirstName, LastName},
};

pub struct AuthorCommandService {
    pub(super) write_repo: Arc<dyn AuthorWriteRepository>,
    pub(super) read_repo: Arc<dyn AuthorReadRepository>,
    pub(super) publisher: Arc<dyn AuthorDeletionPublisher>,
    pub(super) clock: Arc<dyn Clock>,
}

impl AuthorCommandService {
    pub fn new(
        write_repo: Arc<dyn AuthorWriteRepository>,
        read_repo: Arc<dyn AuthorReadRepository>,
        publisher: Arc<dyn AuthorDeletionPublisher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            publisher,
            clock,
        }
    }
}

/// Validate both names, reporting every failing field at once.
pub(super) fn validate_names(
    first_name: String,
    last_name: String,
) -> ApplicationResult<(FirstName, LastName)> {
    match (FirstName::new(first_name), LastName::new(last_name)) {
        (Ok(first), Ok(last)) => Ok((first, last)),
        (first, last) => {
            let mut errors = FieldErrors::default();
            errors.record(&first);
            errors.record(&last);
            Err(ApplicationError::Validation(errors))
        }
    }
}
