//! Shared error types and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Standard error response structure used across all API endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for client identification
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Additional error details (field errors, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Add a detail field to the error response
    pub fn add_detail(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        let details = self.details.get_or_insert_with(HashMap::new);
        if let Ok(json_value) = serde_json::to_value(value) {
            details.insert(key.into(), json_value);
        }
        self
    }

    /// Attach a field-level validation message under `details.fields`
    pub fn with_field_error(self, field: &str, message: impl Into<String>) -> Self {
        let mut fields = HashMap::new();
        fields.insert(field.to_string(), vec![message.into()]);
        self.add_detail("fields", fields)
    }
}

/// Common error codes used across the application
pub mod error_codes {
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const USER_NOT_FOUND: &str = "USER_NOT_FOUND";
    pub const PHONE_MISSING: &str = "PHONE_MISSING";
    pub const SMS_DELIVERY_FAILED: &str = "SMS_DELIVERY_FAILED";
    pub const VERIFICATION_CODE_INVALID: &str = "VERIFICATION_CODE_INVALID";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_details() {
        let response = ErrorResponse::new(error_codes::VERIFICATION_CODE_INVALID, "The code is invalid")
            .with_field_error("code", "The code is invalid");

        let details = response.details.unwrap();
        assert_eq!(details["fields"]["code"][0], "The code is invalid");
    }

    #[test]
    fn test_serialization_skips_empty_details() {
        let response = ErrorResponse::new(error_codes::NOT_FOUND, "missing");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["error"], "NOT_FOUND");
        assert!(json.get("details").is_none());
    }
}
