pub mod authors;
pub mod documents;
