pub mod error;
pub mod password;
pub mod token;
pub mod workflow;

pub use self::error::AuthError;
