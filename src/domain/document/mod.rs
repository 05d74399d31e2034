pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Document, DocumentUpdate, NewDocument};
pub use repository::{DocumentReadRepository, DocumentWriteRepository};
pub use value_objects::{DocumentBody, DocumentId, DocumentTitle};
