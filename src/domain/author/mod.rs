pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Author, AuthorUpdate, CascadeDeletion, NewAuthor};
pub use repository::{AuthorReadRepository, AuthorWriteRepository};
pub use value_objects::{AuthorId, FirstName, LastName};
