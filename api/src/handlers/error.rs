//! HTTP error mapping
//!
//! Every failure leaving a handler goes through [`ApiError`], which renders
//! the shared [`ErrorResponse`] envelope with a status derived from the
//! underlying domain error.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use tutora_core::{AuthError, DomainError};
use tutora_shared::{error_codes, ErrorResponse};

/// Errors returned by the HTTP layer
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Invalid request data")]
    Validation(#[from] validator::ValidationErrors),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        ApiError::Domain(error.into())
    }
}

impl ApiError {
    /// Build the JSON body for this error
    pub fn to_error_response(&self) -> ErrorResponse {
        match self {
            ApiError::Domain(error) => domain_error_response(error),
            ApiError::Validation(errors) => {
                let mut fields = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .map(|e| {
                            e.message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| format!("Invalid value for {}", field))
                        })
                        .collect();
                    fields.insert(field.to_string(), messages);
                }

                ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request data")
                    .add_detail("fields", fields)
            }
            ApiError::BadRequest(message) => ErrorResponse::new(error_codes::BAD_REQUEST, message),
            ApiError::Unauthorized(message) => {
                ErrorResponse::new(error_codes::UNAUTHORIZED, message)
            }
        }
    }
}

fn domain_error_response(error: &DomainError) -> ErrorResponse {
    match error {
        DomainError::Auth(AuthError::InvalidVerificationCode) => ErrorResponse::new(
            error_codes::VERIFICATION_CODE_INVALID,
            "The verification code is invalid or has expired",
        )
        .with_field_error("code", "The verification code is invalid or has expired"),
        DomainError::Auth(AuthError::PhoneNumberMissing) => {
            ErrorResponse::new(error_codes::PHONE_MISSING, error.to_string())
                .with_field_error("phone", "Add a phone number to your account first")
        }
        DomainError::Auth(AuthError::UserNotFound) => {
            ErrorResponse::new(error_codes::USER_NOT_FOUND, error.to_string())
        }
        DomainError::Auth(AuthError::SmsDeliveryFailed) => {
            ErrorResponse::new(error_codes::SMS_DELIVERY_FAILED, error.to_string())
        }
        DomainError::NotFound { .. } => ErrorResponse::new(error_codes::NOT_FOUND, error.to_string()),
        DomainError::Validation { message } => {
            ErrorResponse::new(error_codes::BAD_REQUEST, message.clone())
        }
        // Internal details stay in the logs
        DomainError::Internal { .. } => {
            ErrorResponse::new(error_codes::INTERNAL_ERROR, "An internal error occurred")
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Domain(error) => match error {
                DomainError::Auth(AuthError::InvalidVerificationCode)
                | DomainError::Auth(AuthError::PhoneNumberMissing) => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                DomainError::Auth(AuthError::UserNotFound) | DomainError::NotFound { .. } => {
                    StatusCode::NOT_FOUND
                }
                DomainError::Auth(AuthError::SmsDeliveryFailed) => StatusCode::SERVICE_UNAVAILABLE,
                DomainError::Validation { .. } => StatusCode::BAD_REQUEST,
                DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "Request rejected");
        }

        HttpResponse::build(status).json(self.to_error_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    use crate::dto::VerifyCodeRequest;

    #[test]
    fn test_invalid_code_maps_to_422_with_field_error() {
        let error = ApiError::from(AuthError::InvalidVerificationCode);

        assert_eq!(error.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = serde_json::to_value(error.to_error_response()).unwrap();
        assert_eq!(body["error"], "VERIFICATION_CODE_INVALID");
        assert!(body["details"]["fields"]["code"][0].is_string());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::from(AuthError::UserNotFound).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(AuthError::SmsDeliveryFailed).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ApiError::from(AuthError::PhoneNumberMissing).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::Unauthorized("no identity".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_internal_error_hides_message() {
        let error = ApiError::from(DomainError::internal("redis exploded"));

        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = error.to_error_response();
        assert_eq!(body.error, "INTERNAL_ERROR");
        assert!(!body.message.contains("redis"));
    }

    #[test]
    fn test_validation_errors_list_fields() {
        let request = VerifyCodeRequest {
            code: "123".to_string(),
        };
        let error = ApiError::from(request.validate().unwrap_err());

        assert_eq!(error.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = serde_json::to_value(error.to_error_response()).unwrap();
        assert_eq!(body["error"], "VALIDATION_ERROR");
        assert!(body["details"]["fields"]["code"][0].is_string());
    }
}
