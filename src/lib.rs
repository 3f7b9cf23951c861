//! # Skydrop (User Accounts & Session Tokens)
//!
//! `skydrop` is the account service for the skydrop delivery API. It owns the
//! authentication workflow: admin bootstrap at startup, email/password
//! registration, password login, and issuance/verification of signed session
//! tokens.
//!
//! ## Accounts
//!
//! An account is keyed by its email address, compared exactly as stored
//! (case-sensitive, no normalization). Roles are fixed at creation:
//! registration always produces `USER`; only the bootstrap path creates the
//! `ADMIN` account, once, on first start.
//!
//! ## Passwords & Tokens
//!
//! Passwords are hashed with Argon2id (per-call random salt, PHC string
//! format) and never stored or logged in plaintext. Session tokens are
//! stateless HS256 JWTs carrying `{sub, role, iat, exp}` with a fixed,
//! configurable TTL; there is no revocation list.
//!
//! Login failures never reveal whether the email or the password was wrong.

pub mod auth;
pub mod cli;
pub mod skydrop;
pub mod users;
