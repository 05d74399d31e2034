pub mod auth;
pub mod authors;
pub mod documents;
pub mod messaging;

pub use auth::{ApiCredentials, AuthenticatedUser};
pub use authors::{AuthorDto, CascadeDeletionDto};
pub use documents::DocumentDto;
pub use messaging::AuthorDeletionMessage;
