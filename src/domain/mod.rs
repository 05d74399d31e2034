pub mod author;
pub mod document;
pub mod errors;
mod text;
