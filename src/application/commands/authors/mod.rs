// src/application/commands/authors/mod.rs
mod create;
mod delete;
mod request_deletion;
mod service;
mod update;

pub use create::CreateAuthorCommand;
pub use delete::DeleteAuthorCommand;
pub use request_deletion::RequestAuthorDeletionCommand;
pub use service::AuthorCommandService;
pub use update::UpdateAuthorCommand;
