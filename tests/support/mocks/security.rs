// tests/support/mocks/security.rs
use async_trait::async_trait;
use documan::application::{
    ApplicationResult, error::ApplicationError, ports::security::PasswordHasher,
};

/// Argon2 を使わない高速なハッシャ。ハッシュは `plain:<password>` 形式。
#[derive(Clone, Copy, Default)]
pub struct PlainPasswordHasher;

impl PlainPasswordHasher {
    pub fn hash_of(password: &str) -> String {
        format!("plain:{password}")
    }
}

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(Self::hash_of(password))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if Self::hash_of(password) == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}
