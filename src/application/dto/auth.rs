use std::fmt;

/// Username and Argon2 PHC hash accepted for HTTP Basic authentication.
#[derive(Clone)]
pub struct ApiCredentials {
    pub username: String,
    pub password_hash: String,
}

impl fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("username", &self.username)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub username: String,
}
