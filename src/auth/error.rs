use crate::users::StoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failures of the authentication workflow.
///
/// `Authentication` carries one fixed message for both unknown email and
/// wrong password so callers cannot enumerate accounts.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Login attempt failed")]
    Authentication,

    #[error("{0}")]
    InvalidInput(String),

    #[error("Invalid token")]
    TokenInvalid,

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail => Self::InvalidInput("Email already registered".to_string()),
            StoreError::Backend(message) => Self::Internal(message),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Authentication | Self::TokenInvalid => StatusCode::UNAUTHORIZED,
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Backend details stay in the logs, not in the response
        let message = match &self {
            Self::Internal(_) => "Internal error".to_string(),
            other => other.to_string(),
        };

        (status, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_mapping() {
        let err = AuthError::from(StoreError::DuplicateEmail);
        assert!(matches!(err, AuthError::InvalidInput(ref m) if m == "Email already registered"));

        let err = AuthError::from(StoreError::Backend("connection reset".to_string()));
        assert!(matches!(err, AuthError::Internal(_)));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AuthError::Authentication.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::TokenInvalid.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::InvalidInput("bad".to_string())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AuthError::Internal("boom".to_string())
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_error_is_not_leaked() {
        let response = AuthError::Internal("dsn=postgres://user:pw@db".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
