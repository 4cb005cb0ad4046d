//! Result types for the verification flow

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::verification_code::VerificationCode;

/// Result of issuing a code to a phone number
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueResult {
    /// The issued code; it stays stored even when delivery failed
    pub code: VerificationCode,
    /// Whether the notifier reported a successful send
    pub delivered: bool,
}

/// Outcome of showing the verification prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PromptOutcome {
    /// Phone already verified; nothing to do
    AlreadyVerified,
    /// A code is already live for the phone; nothing was sent
    CodePending,
    /// No code was live, so one was issued
    CodeSent {
        delivered: bool,
        expires_at: DateTime<Utc>,
    },
}

/// Outcome of an explicit resend request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResendOutcome {
    AlreadyVerified,
    Sent { expires_at: DateTime<Utc> },
    /// A fresh code was stored but the notifier failed to deliver it
    DeliveryFailed,
}

/// Outcome of a successful code submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum VerifyOutcome {
    AlreadyVerified,
    Verified { verified_at: DateTime<Utc> },
}
