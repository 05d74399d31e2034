mod create;
mod delete;
mod service;
mod update;

pub use create::CreateDocumentCommand;
pub use delete::DeleteDocumentCommand;
pub use service::DocumentCommandService;
pub use update::UpdateDocumentCommand;
