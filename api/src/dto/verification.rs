//! Request and response bodies for the phone verification endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use tutora_core::{PromptOutcome, ResendOutcome, VerifyOutcome};

/// Body of `POST /api/v1/phone-verification/verify`
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct VerifyCodeRequest {
    /// The code received by SMS
    #[validate(length(equal = 6, message = "The verification code must be 6 characters"))]
    pub code: String,
}

/// Where the user stands in the verification flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    AlreadyVerified,
    CodePending,
    CodeSent,
    CodeNotDelivered,
    Verified,
}

/// Response body shared by the prompt, resend and verify endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationStatusResponse {
    pub status: VerificationStatus,

    /// Text to show the user
    pub message: String,

    pub phone_verified: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivered: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_at: Option<DateTime<Utc>>,
}

impl VerificationStatusResponse {
    fn new(status: VerificationStatus, message: &str) -> Self {
        Self {
            status,
            message: message.to_string(),
            phone_verified: matches!(
                status,
                VerificationStatus::AlreadyVerified | VerificationStatus::Verified
            ),
            delivered: None,
            expires_at: None,
            verified_at: None,
        }
    }

    fn already_verified() -> Self {
        Self::new(
            VerificationStatus::AlreadyVerified,
            "Your phone number is already verified.",
        )
    }

    fn sent(delivered: bool, expires_at: DateTime<Utc>) -> Self {
        let mut response = if delivered {
            Self::new(
                VerificationStatus::CodeSent,
                "A verification code has been sent to your phone.",
            )
        } else {
            Self::new(
                VerificationStatus::CodeNotDelivered,
                "We could not send the verification code. Please try again.",
            )
        };
        response.delivered = Some(delivered);
        response.expires_at = Some(expires_at);
        response
    }
}

impl From<PromptOutcome> for VerificationStatusResponse {
    fn from(outcome: PromptOutcome) -> Self {
        match outcome {
            PromptOutcome::AlreadyVerified => Self::already_verified(),
            PromptOutcome::CodePending => Self::new(
                VerificationStatus::CodePending,
                "Enter the code we sent to your phone, or request a new one.",
            ),
            PromptOutcome::CodeSent {
                delivered,
                expires_at,
            } => Self::sent(delivered, expires_at),
        }
    }
}

impl From<ResendOutcome> for VerificationStatusResponse {
    fn from(outcome: ResendOutcome) -> Self {
        match outcome {
            ResendOutcome::AlreadyVerified => Self::already_verified(),
            ResendOutcome::Sent { expires_at } => Self::sent(true, expires_at),
            ResendOutcome::DeliveryFailed => {
                let mut response = Self::new(
                    VerificationStatus::CodeNotDelivered,
                    "We could not send the verification code. Please try again.",
                );
                response.delivered = Some(false);
                response
            }
        }
    }
}

impl From<VerifyOutcome> for VerificationStatusResponse {
    fn from(outcome: VerifyOutcome) -> Self {
        match outcome {
            VerifyOutcome::AlreadyVerified => Self::already_verified(),
            VerifyOutcome::Verified { verified_at } => {
                let mut response = Self::new(
                    VerificationStatus::Verified,
                    "Your phone number has been verified.",
                );
                response.verified_at = Some(verified_at);
                response
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_length_validation() {
        let valid = VerifyCodeRequest {
            code: "123456".to_string(),
        };
        assert!(valid.validate().is_ok());

        for code in ["", "12345", "1234567"] {
            let request = VerifyCodeRequest {
                code: code.to_string(),
            };
            assert!(request.validate().is_err(), "{:?} should be rejected", code);
        }
    }

    #[test]
    fn test_undelivered_prompt_response() {
        let response = VerificationStatusResponse::from(PromptOutcome::CodeSent {
            delivered: false,
            expires_at: Utc::now(),
        });

        assert_eq!(response.status, VerificationStatus::CodeNotDelivered);
        assert_eq!(response.delivered, Some(false));
        assert!(!response.phone_verified);
        assert!(response.message.contains("try again"));
    }

    #[test]
    fn test_verified_response_serialization() {
        let verified_at = Utc::now();
        let response = VerificationStatusResponse::from(VerifyOutcome::Verified { verified_at });
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["status"], "verified");
        assert_eq!(json["phone_verified"], true);
        assert!(json.get("expires_at").is_none());
        assert!(json["verified_at"].is_string());
    }
}
