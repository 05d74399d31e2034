use std::sync::Arc;

use crate::domain::document::DocumentReadRepository;

pub struct DocumentQueryService {
    pub(super) read_repo: Arc<dyn DocumentReadRepository>,
}

impl DocumentQueryService {
    pub fn new(read_repo: Arc<dyn DocumentReadRepository>) -> Self {
        Self { read_repo }
    }
}
