//! The authentication workflow: admin bootstrap, login, registration.
//!
//! Each operation is request-scoped and stateless aside from the shared
//! [`UserStore`]; the store and the signing secret are the only shared state.

use crate::{
    auth::{password, token::TokenIssuer, AuthError},
    users::{Role, StoreError, User, UserStore},
};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info};
use uuid::Uuid;

/// Ensure the administrator account exists. Idempotent, safe to call on
/// every process start: if the email is taken the call is a no-op and the
/// existing account is never overwritten.
///
/// # Errors
///
/// Returns an error if hashing fails or the store is unreachable.
pub async fn bootstrap_admin<S: UserStore + ?Sized>(
    store: &S,
    email: &str,
    password: &SecretString,
) -> Result<(), AuthError> {
    if store.find_by_email(email).await?.is_some() {
        debug!(email, "admin account already exists");
        return Ok(());
    }

    let admin = User::new(
        random_id(),
        email,
        "Administrator",
        password::hash(password.expose_secret())?,
        Role::Admin,
    );

    match store.save(&admin).await {
        Ok(_) => {
            info!(email, "admin account created");
            Ok(())
        }
        // Lost a bootstrap race against another process, the account exists
        Err(StoreError::DuplicateEmail) => Ok(()),
        Err(err) => Err(err.into()),
    }
}

/// Verify credentials and issue a session token.
///
/// # Errors
///
/// Unknown email and wrong password both return [`AuthError::Authentication`]
/// with the same message, so failures do not reveal whether the account
/// exists.
pub async fn login<S: UserStore + ?Sized>(
    store: &S,
    tokens: &TokenIssuer,
    email: &str,
    password: &str,
) -> Result<String, AuthError> {
    let Some(user) = store.find_by_email(email).await? else {
        return Err(AuthError::Authentication);
    };

    if !password::verify(password, &user.password_hash) {
        return Err(AuthError::Authentication);
    }

    tokens.issue(&user)
}

/// Create an account and issue a session token for it.
///
/// The role is always [`Role::User`]; callers cannot influence it. The
/// duplicate-email check is backed by the store's uniqueness guarantee, so a
/// concurrent registration for the same email cannot slip through.
///
/// # Errors
///
/// Returns [`AuthError::InvalidInput`] for a taken email or an empty
/// password.
pub async fn register<S: UserStore + ?Sized>(
    store: &S,
    tokens: &TokenIssuer,
    email: &str,
    password: &str,
    name: &str,
) -> Result<String, AuthError> {
    if store.find_by_email(email).await?.is_some() {
        return Err(AuthError::InvalidInput("Email already registered".to_string()));
    }

    let user = User::new(
        random_id(),
        email,
        name,
        password::hash(password)?,
        Role::User,
    );

    // StoreError::DuplicateEmail maps to the same InvalidInput as the check
    // above, covering the race between the lookup and the insert
    let user = store.save(&user).await?;

    debug!(email, "account created");

    tokens.issue(&user)
}

/// Fresh unique identifier. Utility for the boundary, not a security
/// primitive.
#[must_use]
pub fn random_id() -> Uuid {
    Uuid::new_v4()
}
