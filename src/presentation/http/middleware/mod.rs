// src/presentation/http/middleware/mod.rs
pub mod basic_auth;
pub mod rate_limit;

pub use basic_auth::require_basic_auth;
pub use rate_limit::rate_limit_layer;
