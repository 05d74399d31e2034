// src/infrastructure/repositories/postgres_document.rs
use super::map_sqlx;
use crate::domain::author::AuthorId;
use crate::domain::document::{
    Document, DocumentBody, DocumentId, DocumentReadRepository, DocumentTitle, DocumentUpdate,
    DocumentWriteRepository, NewDocument,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresDocumentWriteRepository {
    pool: PgPool,
}

impl PostgresDocumentWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresDocumentReadRepository {
    pool: PgPool,
}

impl PostgresDocumentReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct DocumentRow {
    id: i64,
    title: String,
    body: String,
    author_id: Option<i64>,
    reference_list: Vec<String>,
}

impl TryFrom<DocumentRow> for Document {
    type Error = DomainError;

    fn try_from(row: DocumentRow) -> Result<Self, Self::Error> {
        Ok(Document {
            id: DocumentId::new(row.id)?,
            title: DocumentTitle::new(row.title)?,
            body: DocumentBody::new(row.body)?,
            author_id: row.author_id.map(AuthorId::new).transpose()?,
            references: row.reference_list,
        })
    }
}

#[async_trait]
impl DocumentWriteRepository for PostgresDocumentWriteRepository {
    async fn insert(&self, document: NewDocument) -> DomainResult<Document> {
        let NewDocument {
            title,
            body,
            author_id,
            references,
        } = document;

        let row = sqlx::query_as::<_, DocumentRow>(
            "INSERT INTO documents (title, body, author_id, reference_list)
             VALUES ($1, $2, $3, $4)
             RETURNING id, title, body, author_id, reference_list",
        )
        .bind(title.as_str())
        .bind(body.as_str())
        .bind(author_id.map(i64::from))
        .bind(references)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Document::try_from(row)
    }

    async fn update(&self, update: DocumentUpdate) -> DomainResult<Document> {
        let DocumentUpdate { id, title, body } = update;

        let row = sqlx::query_as::<_, DocumentRow>(
            "UPDATE documents SET title = $1, body = $2
             WHERE id = $3
             RETURNING id, title, body, author_id, reference_list",
        )
        .bind(title.as_str())
        .bind(body.as_str())
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("document not found".into()))?;

        Document::try_from(row)
    }

    async fn delete(&self, id: DocumentId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM documents WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("document not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentReadRepository for PostgresDocumentReadRepository {
    async fn find_by_id(&self, id: DocumentId) -> DomainResult<Option<Document>> {
        let row = sqlx::query_as::<_, DocumentRow>(
            "SELECT id, title, body, author_id, reference_list
             FROM documents WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Document::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Document>> {
        let rows = sqlx::query_as::<_, DocumentRow>(
            "SELECT id, title, body, author_id, reference_list
             FROM documents ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Document::try_from).collect()
    }
}
