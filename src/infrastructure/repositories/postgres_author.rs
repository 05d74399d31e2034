// src/infrastructure/repositories/postgres_author.rs
use super::map_sqlx;
use crate::domain::author::{
    Author, AuthorId, AuthorReadRepository, AuthorUpdate, AuthorWriteRepository,
    CascadeDeletion, FirstName, LastName, NewAuthor,
};
use crate::domain::document::DocumentId;
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

const OWNED_DOCUMENT_IDS: &str = "COALESCE((SELECT array_agg(d.id ORDER BY d.id) FROM documents d WHERE d.author_id = a.id), ARRAY[]::BIGINT[]) AS document_ids";

#[derive(Clone)]
pub struct PostgresAuthorWriteRepository {
    pool: PgPool,
}

impl PostgresAuthorWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresAuthorReadRepository {
    pool: PgPool,
}

impl PostgresAuthorReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AuthorRow {
    id: i64,
    first_name: String,
    last_name: String,
    document_ids: Vec<i64>,
}

impl TryFrom<AuthorRow> for Author {
    type Error = DomainError;

    fn try_from(row: AuthorRow) -> Result<Self, Self::Error> {
        Ok(Author {
            id: AuthorId::new(row.id)?,
            first_name: FirstName::new(row.first_name)?,
            last_name: LastName::new(row.last_name)?,
            document_ids: row
                .document_ids
                .into_iter()
                .map(DocumentId::new)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

#[async_trait]
impl AuthorWriteRepository for PostgresAuthorWriteRepository {
    async fn insert(&self, author: NewAuthor) -> DomainResult<Author> {
        let NewAuthor {
            first_name,
            last_name,
        } = author;

        let row = sqlx::query_as::<_, AuthorRow>(
            "INSERT INTO authors (first_name, last_name)
             VALUES ($1, $2)
             RETURNING id, first_name, last_name, ARRAY[]::BIGINT[] AS document_ids",
        )
        .bind(first_name.as_str())
        .bind(last_name.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Author::try_from(row)
    }

    async fn update(&self, update: AuthorUpdate) -> DomainResult<Author> {
        let AuthorUpdate {
            id,
            first_name,
            last_name,
        } = update;

        let sql = format!(
            "WITH a AS (
                 UPDATE authors SET first_name = $1, last_name = $2
                 WHERE id = $3
                 RETURNING id, first_name, last_name
             )
             SELECT a.id, a.first_name, a.last_name, {OWNED_DOCUMENT_IDS} FROM a"
        );

        let row = sqlx::query_as::<_, AuthorRow>(&sql)
            .bind(first_name.as_str())
            .bind(last_name.as_str())
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("author not found".into()))?;

        Author::try_from(row)
    }

    async fn delete_with_documents(&self, id: AuthorId) -> DomainResult<CascadeDeletion> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let documents = sqlx::query("DELETE FROM documents WHERE author_id = $1")
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let authors = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        if authors.rows_affected() == 0 {
            tx.rollback().await.map_err(map_sqlx)?;
            return Err(DomainError::NotFound("author not found".into()));
        }

        tx.commit().await.map_err(map_sqlx)?;

        Ok(CascadeDeletion {
            author_id: id,
            documents_removed: documents.rows_affected(),
        })
    }
}

#[async_trait]
impl AuthorReadRepository for PostgresAuthorReadRepository {
    async fn find_by_id(&self, id: AuthorId) -> DomainResult<Option<Author>> {
        let sql = format!(
            "SELECT a.id, a.first_name, a.last_name, {OWNED_DOCUMENT_IDS}
             FROM authors a WHERE a.id = $1"
        );

        let row = sqlx::query_as::<_, AuthorRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Author::try_from).transpose()
    }

    async fn exists(&self, id: AuthorId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM authors WHERE id = $1)")
            .bind(i64::from(id))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn list(&self) -> DomainResult<Vec<Author>> {
        let sql = format!(
            "SELECT a.id, a.first_name, a.last_name, {OWNED_DOCUMENT_IDS}
             FROM authors a ORDER BY a.id"
        );

        let rows = sqlx::query_as::<_, AuthorRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Author::try_from).collect()
    }
}
