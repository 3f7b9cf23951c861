//! Stateless session tokens.
//!
//! Tokens are HS256 JWTs carrying subject id, role, issued-at and expiry,
//! signed with the server-held secret. They are never stored server-side and
//! there is no revocation list. Every failure mode on the way in, bad
//! signature, expired, malformed, collapses to [`AuthError::TokenInvalid`].
//! The HMAC comparison inside `jsonwebtoken` is constant time.

use crate::{
    auth::AuthError,
    users::{Role, User},
};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Subject, the account id.
    pub sub: Uuid,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and verifies session tokens with a fixed TTL. Built once at
/// startup, read-only afterwards.
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl_seconds: i64,
}

impl TokenIssuer {
    #[must_use]
    pub fn new(secret: &SecretString, ttl_seconds: u64) -> Self {
        let secret = secret.expose_secret().as_bytes();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            ttl_seconds: i64::try_from(ttl_seconds).unwrap_or(i64::MAX),
        }
    }

    /// Issue a signed token for an account.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Internal` if signing fails.
    pub fn issue(&self, user: &User) -> Result<String, AuthError> {
        let now = OffsetDateTime::now_utc().unix_timestamp();
        let claims = Claims {
            sub: user.id,
            role: user.role,
            iat: now,
            exp: now + self.ttl_seconds,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AuthError::Internal(format!("token signing failed: {e}")))
    }

    /// Verify a token and return its claims.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenInvalid` for any invalid token, the cause is
    /// deliberately not distinguished.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| AuthError::TokenInvalid)
    }
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: u64 = 3600;

    fn secret() -> SecretString {
        SecretString::from("test-signing-secret".to_string())
    }

    fn test_user(role: Role) -> User {
        User::new(
            Uuid::new_v4(),
            "pilot@skydrop.dev",
            "Pilot",
            "$argon2id$v=19$stub".to_string(),
            role,
        )
    }

    #[test]
    fn test_issue_and_verify_round_trip() -> Result<(), AuthError> {
        let issuer = TokenIssuer::new(&secret(), TTL);
        let user = test_user(Role::Admin);

        let token = issuer.issue(&user)?;
        let claims = issuer.verify(&token)?;

        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.exp - claims.iat, TTL as i64);

        Ok(())
    }

    #[test]
    fn test_expired_token_rejected() {
        let issuer = TokenIssuer::new(&secret(), TTL);
        let now = OffsetDateTime::now_utc().unix_timestamp();
        let claims = Claims {
            sub: Uuid::new_v4(),
            role: Role::User,
            iat: now - 120,
            exp: now - 60,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret().expose_secret().as_bytes()),
        )
        .unwrap();

        assert!(matches!(
            issuer.verify(&token),
            Err(AuthError::TokenInvalid)
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() -> Result<(), AuthError> {
        let issuer = TokenIssuer::new(&secret(), TTL);
        let other = TokenIssuer::new(&SecretString::from("other-secret".to_string()), TTL);

        let token = issuer.issue(&test_user(Role::User))?;

        assert!(matches!(other.verify(&token), Err(AuthError::TokenInvalid)));

        Ok(())
    }

    #[test]
    fn test_tampered_token_rejected() -> Result<(), AuthError> {
        let issuer = TokenIssuer::new(&secret(), TTL);
        let token = issuer.issue(&test_user(Role::User))?;

        let mut tampered = token.into_bytes();
        let last = tampered.len() - 1;
        tampered[last] = if tampered[last] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(tampered).unwrap();

        assert!(matches!(
            issuer.verify(&tampered),
            Err(AuthError::TokenInvalid)
        ));

        Ok(())
    }

    #[test]
    fn test_malformed_token_rejected() {
        let issuer = TokenIssuer::new(&secret(), TTL);

        for garbage in ["", "not-a-token", "a.b", "a.b.c.d"] {
            assert!(matches!(
                issuer.verify(garbage),
                Err(AuthError::TokenInvalid)
            ));
        }
    }
}
