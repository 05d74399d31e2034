use crate::domain::document::entity::{Document, DocumentUpdate, NewDocument};
use crate::domain::document::value_objects::DocumentId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait DocumentWriteRepository: Send + Sync {
    async fn insert(&self, document: NewDocument) -> DomainResult<Document>;
    async fn update(&self, update: DocumentUpdate) -> DomainResult<Document>;
    async fn delete(&self, id: DocumentId) -> DomainResult<()>;
}

#[async_trait]
pub trait DocumentReadRepository: Send + Sync {
    async fn find_by_id(&self, id: DocumentId) -> DomainResult<Option<Document>>;
    async fn list(&self) -> DomainResult<Vec<Document>>;
}
