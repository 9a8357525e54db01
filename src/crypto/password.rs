// Password hashing for member credentials.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("password hashing failed: {0}")]
pub struct PasswordError(String);

/// Argon2id with the crate's default cost parameters. Call sites never tune this.
fn hasher() -> Argon2<'static> {
    Argon2::default()
}

/// Hashes a plaintext password into a PHC string safe for storage.
///
/// A fresh random salt is generated per call, so hashing the same plaintext twice
/// yields two different strings.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    hasher()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PasswordError(e.to_string()))
}

/// Returns `true` iff `password` is the plaintext that produced `password_hash`.
///
/// Accepts the Argon2 PHC strings written by [`hash_password`] and the `$2a$`/`$2b$`/`$2y$`
/// bcrypt hashes stored by earlier deployments. Malformed hashes are a mismatch.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    if is_bcrypt_hash(password_hash) {
        return bcrypt::verify(password, password_hash).unwrap_or(false);
    }

    let Ok(parsed) = PasswordHash::new(password_hash) else {
        return false;
    };
    hasher()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

fn is_bcrypt_hash(hash: &str) -> bool {
    ["$2a$", "$2b$", "$2y$"].iter().any(|p| hash.starts_with(p))
}

/// [`hash_password`] on the blocking pool, keeping the async workers free.
pub async fn hash_password_blocking(password: &str) -> Result<String, PasswordError> {
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| PasswordError(e.to_string()))?
}

/// [`verify_password`] on the blocking pool. A failed task counts as a mismatch.
pub async fn verify_password_blocking(password: &str, password_hash: &str) -> bool {
    let password = password.to_owned();
    let password_hash = password_hash.to_owned();
    match tokio::task::spawn_blocking(move || verify_password(&password, &password_hash)).await {
        Ok(matched) => matched,
        Err(e) => {
            tracing::error!(error = %e, "password verification task failed");
            false
        }
    }
}
