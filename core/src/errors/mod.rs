//! Domain-specific error types for the verification flow and its collaborators.

use thiserror::Error;

/// Authentication and verification errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid verification code")]
    InvalidVerificationCode,

    #[error("User not found")]
    UserNotFound,

    #[error("No phone number on file")]
    PhoneNumberMissing,

    #[error("Could not send the verification code. Please try again")]
    SmsDeliveryFailed,
}

/// Top-level error type for the core domain
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl DomainError {
    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_converts_into_domain_error() {
        let err: DomainError = AuthError::InvalidVerificationCode.into();
        assert!(matches!(
            err,
            DomainError::Auth(AuthError::InvalidVerificationCode)
        ));
        assert_eq!(err.to_string(), "Invalid verification code");
    }

    #[test]
    fn test_internal_helper() {
        let err = DomainError::internal("redis down");
        assert_eq!(err.to_string(), "Internal error: redis down");
    }
}
