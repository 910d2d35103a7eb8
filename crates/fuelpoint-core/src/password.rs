//! Password hashing for back-office accounts.
//!
//! Single home for hash/verify so every caller uses the same KDF and
//! parameters. Output is a PHC string (`$argon2id$...`) carrying the salt and
//! parameters, so stored hashes survive parameter upgrades.

use anyhow::anyhow;
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

/// Hash a plaintext password with argon2id and a fresh random salt.
pub fn hash(password: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow!("hash password: {e}"))?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC string.
///
/// A wrong password returns `Ok(false)`; a malformed stored hash is an error.
pub fn verify(password: &str, phc: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(phc).map_err(|e| anyhow!("parse password hash: {e}"))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
