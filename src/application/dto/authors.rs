use crate::domain::author::{Author, CascadeDeletion};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDto {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "John")]
    pub first_name: String,
    #[schema(example = "Doe")]
    pub last_name: String,
    /// Identifiers of the documents owned by this author, ascending.
    pub document_ids: Vec<i64>,
}

impl From<Author> for AuthorDto {
    fn from(author: Author) -> Self {
        Self {
            id: author.id.into(),
            first_name: author.first_name.into_inner(),
            last_name: author.last_name.into_inner(),
            document_ids: author.document_ids.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CascadeDeletionDto {
    pub author_id: i64,
    pub documents_removed: u64,
}

impl From<CascadeDeletion> for CascadeDeletionDto {
    fn from(value: CascadeDeletion) -> Self {
        Self {
            author_id: value.author_id.into(),
            documents_removed: value.documents_removed,
        }
    }
}
