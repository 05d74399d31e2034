// src/bin/hash_password.rs
//! Print an Argon2 PHC hash for BASIC_AUTH_PASSWORD_HASH.
//!
//! Usage: `cargo run --bin hash_password -- <password>` (or pipe it on stdin).
use anyhow::{Context, Result, bail};
use documan::{
    application::ports::security::PasswordHasher, infrastructure::security::password::Argon2PasswordHasher,
};
use std::io::{self, BufRead};

#[tokio::main]
async fn main() -> Result<()> {
    let password = match std::env::args().nth(1) {
        Some(arg) => arg,
        None => io::stdin()
            .lock()
            .lines()
            .next()
            .context("expected a password argument or a line on stdin")??,
    };
    if password.is_empty() {
        bail!("password must not be empty");
    }

    let hash = Argon2PasswordHasher.hash(&password).await?;
    println!("{hash}");
    Ok(())
}
