pub mod check_connection;
pub use self::check_connection::check_connection;

pub mod health;
pub use self::health::health;

pub mod user_login;
pub use self::user_login::login;

pub mod user_register;
pub use self::user_register::register;

pub mod random_id;
pub use self::random_id::random_id;

// common functions for the handlers
use regex::Regex;

pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(valid_email("alice@skydrop.dev"));
        assert!(valid_email("a@x.com"));

        assert!(!valid_email("admin"));
        assert!(!valid_email("alice@skydrop"));
        assert!(!valid_email("alice @skydrop.dev"));
        assert!(!valid_email(""));
    }
}
