//! Verification code entity for SMS-based phone verification.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Default expiration time for verification codes (10 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 10;

/// A one-time code issued to a phone number
///
/// Only the store holds live codes; this value describes a code at the
/// moment it was issued and is handed back to callers of the flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationCode {
    /// Phone number this code was issued for, as the user entered it
    pub phone: String,

    /// The 6-digit zero-padded verification code
    pub code: String,

    /// Timestamp when the code was issued
    pub issued_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,
}

impl VerificationCode {
    /// Creates a verification code issued now
    ///
    /// # Arguments
    ///
    /// * `phone` - The phone number the code is issued for
    /// * `code` - The generated code
    /// * `expiration_minutes` - Number of minutes until the code expires
    pub fn issue(phone: impl Into<String>, code: impl Into<String>, expiration_minutes: i64) -> Self {
        let issued_at = Utc::now();
        Self {
            phone: phone.into(),
            code: code.into(),
            issued_at,
            expires_at: issued_at + Duration::minutes(expiration_minutes),
        }
    }
}
