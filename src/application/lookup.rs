// src/application/lookup.rs
//! Identifier parsing shared by command and query services. Ids that can
//! never exist are reported the same way as ids that do not exist.
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::{author::AuthorId, document::DocumentId};
use std::fmt::Display;

pub(crate) fn author_id(raw: i64) -> ApplicationResult<AuthorId> {
    AuthorId::new(raw).map_err(|_| author_not_found(raw))
}

pub(crate) fn author_not_found(id: impl Display) -> ApplicationError {
    ApplicationError::not_found(format!("Author not found with id: {id}"))
}

pub(crate) fn document_id(raw: i64) -> ApplicationResult<DocumentId> {
    DocumentId::new(raw).map_err(|_| document_not_found(raw))
}

pub(crate) fn document_not_found(id: impl Display) -> ApplicationError {
    ApplicationError::not_found(format!("Document not found with id: {id}"))
}
