// src/application/commands/documents/service.rs
use std::sync::Arc;

use crate::{
    application::error::{ApplicationError, ApplicationResult, FieldErrors},
    domain::{
        author::AuthorReadRepository,
        document::{DocumentBody, DocumentReadRepository, DocumentTitle, DocumentWriteRepository},
    },
};

pub struct DocumentCommandService {
    pub(super) write_repo: Arc<dyn DocumentWriteRepository>,
    pub(super) read_repo: Arc<dyn DocumentReadRepository>,
    pub(super) author_repo: Arc<dyn AuthorReadRepository>,
}

impl DocumentCommandService {
    pub fn new(
        write_repo: Arc<dyn DocumentWriteRepository>,
        read_repo: Arc<dyn DocumentReadRepository>,
        author_repo: Arc<dyn AuthorReadRepository>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            author_repo,
        }
    }
}

pub(super) fn validate_content(
    title: String,
    body: String,
) -> ApplicationResult<(DocumentTitle, DocumentBody)> {
    match (DocumentTitle::new(title), DocumentBody::new(body)) {
        (Ok(title), Ok(body)) => Ok((title, body)),
        (title, body) => {
            let mut errors = FieldErrors::default();
            errors.record(&title);
            errors.record(&body);
            Err(ApplicationError::Validation(errors))
        }
    }
}
