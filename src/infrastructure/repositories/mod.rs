// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_author;
mod postgres_document;

pub use error::map_sqlx;
pub use postgres_author::{PostgresAuthorReadRepository, PostgresAuthorWriteRepository};
pub use postgres_document::{PostgresDocumentReadRepository, PostgresDocumentWriteRepository};
