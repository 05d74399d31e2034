use crate::domain::author::entity::{Author, AuthorUpdate, CascadeDeletion, NewAuthor};
use crate::domain::author::value_objects::AuthorId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait AuthorWriteRepository: Send + Sync {
    async fn insert(&self, author: NewAuthor) -> DomainResult<Author>;
    async fn update(&self, update: AuthorUpdate) -> DomainResult<Author>;
    /// Delete the author and all documents referencing it in one transaction.
    /// Returns `DomainError::NotFound` when no author row was removed.
    async fn delete_with_documents(&self, id: AuthorId) -> DomainResult<CascadeDeletion>;
}

#[async_trait]
pub trait AuthorReadRepository: Send + Sync {
    async fn find_by_id(&self, id: AuthorId) -> DomainResult<Option<Author>>;
    async fn exists(&self, id: AuthorId) -> DomainResult<bool>;
    async fn list(&self) -> DomainResult<Vec<Author>>;
}
