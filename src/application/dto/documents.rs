use crate::domain::document::Document;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDto {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Spring Boot Guide")]
    pub title: String,
    #[schema(example = "This is a comprehensive guide.")]
    pub body: String,
    pub author_id: Option<i64>,
    #[schema(example = json!(["reference1", "reference2"]))]
    pub references: Vec<String>,
}

impl From<Document> for DocumentDto {
    fn from(document: Document) -> Self {
        Self {
            id: document.id.into(),
            title: document.title.into_inner(),
            body: document.body.into_inner(),
            author_id: document.author_id.map(Into::into),
            references: document.references,
        }
    }
}
