//! Ports for code storage and code delivery

use async_trait::async_trait;

/// Trait for verification code storage
///
/// At most one live code is kept per phone number. Errors are reported as
/// strings and surfaced by the service as internal errors.
#[async_trait]
pub trait CodeStore: Send + Sync {
    /// Store a code for a phone number, replacing any previous one
    async fn store_code(&self, phone: &str, code: &str) -> Result<(), String>;

    /// Check a submitted code against the stored one
    ///
    /// Returns `true` only when a live code exists and equals `submitted`.
    /// Never deletes the code and never counts attempts.
    async fn verify_code(&self, phone: &str, submitted: &str) -> Result<bool, String>;

    /// Remove the code for a phone number; no-op when absent
    async fn remove_code(&self, phone: &str) -> Result<(), String>;

    /// Check whether a live code exists for a phone number
    async fn has_code(&self, phone: &str) -> Result<bool, String>;
}

/// Trait for delivering a verification code to a phone
#[async_trait]
pub trait VerificationNotifier: Send + Sync {
    /// Send the code; returns `false` on any delivery failure
    async fn send_verification_code(&self, phone: &str, code: &str) -> bool;
}
