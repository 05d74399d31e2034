// src/domain/author/entity.rs
use crate::domain::author::value_objects::{AuthorId, FirstName, LastName};
use crate::domain::document::DocumentId;

#[derive(Debug, Clone)]
pub struct Author {
    pub id: AuthorId,
    pub first_name: FirstName,
    pub last_name: LastName,
    /// Owned documents, ascending by id.
    pub document_ids: Vec<DocumentId>,
}

impl Author {
    pub fn rename(&mut self, first_name: FirstName, last_name: LastName) {
        self.first_name = first_name;
        self.last_name = last_name;
    }
}

#[derive(Debug, Clone)]
pub struct NewAuthor {
    pub first_name: FirstName,
    pub last_name: LastName,
}

#[derive(Debug, Clone)]
pub struct AuthorUpdate {
    pub id: AuthorId,
    pub first_name: FirstName,
    pub last_name: LastName,
}

impl From<&Author> for AuthorUpdate {
    fn from(author: &Author) -> Self {
        Self {
            id: author.id,
            first_name: author.first_name.clone(),
            last_name: author.last_name.clone(),
        }
    }
}

/// Result of removing an author together with every document it owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CascadeDeletion {
    pub author_id: AuthorId,
    pub documents_removed: u64,
}
