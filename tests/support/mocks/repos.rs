// tests/support/mocks/repos.rs
use async_trait::async_trait;
use documan::domain::{
    author::{
        Author, AuthorId, AuthorReadRepository, AuthorUpdate, AuthorWriteRepository,
        CascadeDeletion, FirstName, LastName, NewAuthor,
    },
    document::{
        Document, DocumentBody, DocumentId, DocumentReadRepository, DocumentTitle, DocumentUpdate,
        DocumentWriteRepository, NewDocument,
    },
    errors::{DomainError, DomainResult},
};
use std::collections::BTreeMap;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
};

#[derive(Clone)]
struct AuthorRow {
    first_name: String,
    last_name: String,
}

#[derive(Clone)]
struct DocumentRow {
    title: String,
    body: String,
    author_id: Option<i64>,
    references: Vec<String>,
}

#[derive(Default)]
struct State {
    authors: BTreeMap<i64, AuthorRow>,
    documents: BTreeMap<i64, DocumentRow>,
    next_author_id: i64,
    next_document_id: i64,
}

/* -------------------------------- InMemoryStore -------------------------------- */

/// 4 つのリポジトリトレイトをまとめて実装するインメモリストア。
/// クローンは同じ状態を共有する。著者の削除は所有ドキュメントも削除する。
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<State>>,
    fail_writes: Arc<AtomicBool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 書き込み系の操作を永続化エラーで失敗させる
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn author_count(&self) -> usize {
        self.state.lock().unwrap().authors.len()
    }

    pub fn document_count(&self) -> usize {
        self.state.lock().unwrap().documents.len()
    }

    pub fn has_author(&self, id: i64) -> bool {
        self.state.lock().unwrap().authors.contains_key(&id)
    }

    pub fn has_document(&self, id: i64) -> bool {
        self.state.lock().unwrap().documents.contains_key(&id)
    }

    /// Seed an author directly, bypassing the services.
    pub fn seed_author(&self, first_name: &str, last_name: &str) -> i64 {
        let mut state = self.state.lock().unwrap();
        state.next_author_id += 1;
        let id = state.next_author_id;
        state.authors.insert(
            id,
            AuthorRow {
                first_name: first_name.into(),
                last_name: last_name.into(),
            },
        );
        id
    }

    pub fn seed_document(&self, title: &str, author_id: Option<i64>) -> i64 {
        let mut state = self.state.lock().unwrap();
        state.next_document_id += 1;
        let id = state.next_document_id;
        state.documents.insert(
            id,
            DocumentRow {
                title: title.into(),
                body: "seeded document body".into(),
                author_id,
                references: Vec::new(),
            },
        );
        id
    }

    fn check_writable(&self) -> DomainResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            Err(DomainError::Persistence("database unavailable".into()))
        } else {
            Ok(())
        }
    }
}

fn author_from(state: &State, id: i64, row: &AuthorRow) -> Author {
    Author {
        id: AuthorId(id),
        first_name: FirstName::new(row.first_name.clone()).unwrap(),
        last_name: LastName::new(row.last_name.clone()).unwrap(),
        document_ids: state
            .documents
            .iter()
            .filter(|(_, doc)| doc.author_id == Some(id))
            .map(|(doc_id, _)| DocumentId(*doc_id))
            .collect(),
    }
}

fn document_from(id: i64, row: &DocumentRow) -> Document {
    Document {
        id: DocumentId(id),
        title: DocumentTitle::new(row.title.clone()).unwrap(),
        body: DocumentBody::new(row.body.clone()).unwrap(),
        author_id: row.author_id.map(AuthorId),
        references: row.references.clone(),
    }
}

#[async_trait]
impl AuthorWriteRepository for InMemoryStore {
    async fn insert(&self, author: NewAuthor) -> DomainResult<Author> {
        self.check_writable()?;
        let mut state = self.state.lock().unwrap();
        state.next_author_id += 1;
        let id = state.next_author_id;
        let row = AuthorRow {
            first_name: author.first_name.into_inner(),
            last_name: author.last_name.into_inner(),
        };
        state.authors.insert(id, row.clone());
        Ok(author_from(&state, id, &row))
    }

    async fn update(&self, update: AuthorUpdate) -> DomainResult<Author> {
        self.check_writable()?;
        let mut state = self.state.lock().unwrap();
        let id = update.id.0;
        let row = state
            .authors
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound("author not found".into()))?;
        row.first_name = update.first_name.into_inner();
        row.last_name = update.last_name.into_inner();
        let row = row.clone();
        Ok(author_from(&state, id, &row))
    }

    async fn delete_with_documents(&self, id: AuthorId) -> DomainResult<CascadeDeletion> {
        self.check_writable()?;
        let mut state = self.state.lock().unwrap();
        if state.authors.remove(&id.0).is_none() {
            return Err(DomainError::NotFound("author not found".into()));
        }
        let before = state.documents.len();
        state.documents.retain(|_, doc| doc.author_id != Some(id.0));
        Ok(CascadeDeletion {
            author_id: id,
            documents_removed: (before - state.documents.len()) as u64,
        })
    }
}

#[async_trait]
impl AuthorReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: AuthorId) -> DomainResult<Option<Author>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .authors
            .get(&id.0)
            .map(|row| author_from(&state, id.0, row)))
    }

    async fn exists(&self, id: AuthorId) -> DomainResult<bool> {
        Ok(self.state.lock().unwrap().authors.contains_key(&id.0))
    }

    async fn list(&self) -> DomainResult<Vec<Author>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .authors
            .iter()
            .map(|(id, row)| author_from(&state, *id, row))
            .collect())
    }
}

#[async_trait]
impl DocumentWriteRepository for InMemoryStore {
    async fn insert(&self, document: NewDocument) -> DomainResult<Document> {
        self.check_writable()?;
        let mut state = self.state.lock().unwrap();
        if let Some(author_id) = document.author_id {
            if !state.authors.contains_key(&author_id.0) {
                return Err(DomainError::NotFound("author not found".into()));
            }
        }
        state.next_document_id += 1;
        let id = state.next_document_id;
        let row = DocumentRow {
            title: document.title.into_inner(),
            body: document.body.into_inner(),
            author_id: document.author_id.map(|a| a.0),
            references: document.references,
        };
        state.documents.insert(id, row.clone());
        Ok(document_from(id, &row))
    }

    async fn update(&self, update: DocumentUpdate) -> DomainResult<Document> {
        self.check_writable()?;
        let mut state = self.state.lock().unwrap();
        let id = update.id.0;
        let row = state
            .documents
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound("document not found".into()))?;
        row.title = update.title.into_inner();
        row.body = update.body.into_inner();
        Ok(document_from(id, row))
    }

    async fn delete(&self, id: DocumentId) -> DomainResult<()> {
        self.check_writable()?;
        let mut state = self.state.lock().unwrap();
        state
            .documents
            .remove(&id.0)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("document not found".into()))
    }
}

#[async_trait]
impl DocumentReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: DocumentId) -> DomainResult<Option<Document>> {
        let state = self.state.lock().unwrap();
        Ok(state.documents.get(&id.0).map(|row| document_from(id.0, row)))
    }

    async fn list(&self) -> DomainResult<Vec<Document>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .documents
            .iter()
            .map(|(id, row)| document_from(*id, row))
            .collect())
    }
}
