//! Argon2id password hashing.
//!
//! Hashes carry their own salt and parameters in PHC string format, so two
//! hashes of the same password differ while both verify. The work factor is
//! the argon2 default, tunable through the PHC parameters without touching
//! verification.

use crate::auth::AuthError;
use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;

/// Hash a password with a fresh random salt.
///
/// # Errors
///
/// Returns `AuthError::InvalidInput` for an empty password.
pub fn hash(plaintext: &str) -> Result<String, AuthError> {
    if plaintext.is_empty() {
        return Err(AuthError::InvalidInput("Empty password".to_string()));
    }

    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Internal(format!("password hashing failed: {e}")))
}

/// Verify a password against a stored hash.
///
/// A malformed or corrupt hash is a verification failure, never an error.
#[must_use]
pub fn verify(plaintext: &str, hash: &str) -> bool {
    PasswordHash::new(hash).is_ok_and(|parsed| {
        Argon2::default()
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok()
    })
}
