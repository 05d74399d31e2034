// src/presentation/http/controllers/mod.rs
pub mod authors;
pub mod documents;
