// src/domain/document/entity.rs
use crate::domain::author::AuthorId;
use crate::domain::document::value_objects::{DocumentBody, DocumentId, DocumentTitle};

#[derive(Debug, Clone)]
pub struct Document {
    pub id: DocumentId,
    pub title: DocumentTitle,
    pub body: DocumentBody,
    pub author_id: Option<AuthorId>,
    pub references: Vec<String>,
}

impl Document {
    pub fn set_content(&mut self, title: DocumentTitle, body: DocumentBody) {
        self.title = title;
        self.body = body;
    }
}

#[derive(Debug, Clone)]
pub struct NewDocument {
    pub title: DocumentTitle,
    pub body: DocumentBody,
    pub author_id: Option<AuthorId>,
    pub references: Vec<String>,
}

/// Content update. Author and references are not part of it.
#[derive(Debug, Clone)]
pub struct DocumentUpdate {
    pub id: DocumentId,
    pub title: DocumentTitle,
    pub body: DocumentBody,
}

impl From<&Document> for DocumentUpdate {
    fn from(document: &Document) -> Self {
        Self {
            id: document.id,
            title: document.title.clone(),
            body: document.body.clone(),
        }
    }
}
