mod get_by_id;
mod list;
mod service;

pub use get_by_id::GetDocumentByIdQuery;
pub use service::DocumentQueryService;
