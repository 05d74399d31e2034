// src/application/ports/security.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
    /// Succeeds when `password` matches `expected_hash`, otherwise
    /// returns `ApplicationError::Unauthorized`.
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()>;
}
