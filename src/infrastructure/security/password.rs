// src/infrastructure/security/password.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::security::PasswordHasher,
};
use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use async_trait::async_trait;

/// Argon2id hashing for the HTTP Basic account. Work runs on the blocking
/// pool since each call costs tens of milliseconds.
#[derive(Default, Clone)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    /// Reject configured hashes that are not valid PHC strings.
    pub fn validate_phc(hash: &str) -> ApplicationResult<()> {
        PasswordHash::new(hash)
            .map(|_| ())
            .map_err(|err| ApplicationError::infrastructure(format!("invalid password hash: {err}")))
    }
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|err| ApplicationError::infrastructure(err.to_string()))
        })
        .await
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        let password = password.to_owned();
        let expected_hash = expected_hash.to_owned();
        tokio::task::spawn_blocking(move || -> ApplicationResult<()> {
            let parsed = PasswordHash::new(&expected_hash)
                .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .map_err(|_| ApplicationError::unauthorized("invalid credentials"))
        })
        .await
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_then_verify_accepts_only_the_original_password() {
        let hasher = Argon2PasswordHasher;
        let hash = hasher.hash("s3cret-pass").await.unwrap();

        assert!(Argon2PasswordHasher::validate_phc(&hash).is_ok());
        assert!(hasher.verify("s3cret-pass", &hash).await.is_ok());
        assert!(matches!(
            hasher.verify("wrong", &hash).await,
            Err(ApplicationError::Unauthorized(_))
        ));
    }

    #[tokio::test]
    async fn malformed_hash_is_an_infrastructure_error() {
        let hasher = Argon2PasswordHasher;
        assert!(matches!(
            hasher.verify("anything", "not-a-phc-string").await,
            Err(ApplicationError::Infrastructure(_))
        ));
        assert!(Argon2PasswordHasher::validate_phc("not-a-phc-string").is_err());
    }
}
