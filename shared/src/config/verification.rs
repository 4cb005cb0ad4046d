//! Verification flow configuration

use serde::{Deserialize, Serialize};

/// Phone verification settings
///
/// `max_attempts` and `throttle_minutes` are accepted and carried through
/// but nothing in the verification flow enforces them. `code_length` is
/// likewise informational: codes are always six digits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct VerificationConfig {
    /// Declared code length
    pub code_length: usize,
    /// Minutes before an issued code expires
    pub expiry_minutes: i64,
    /// Declared maximum number of submissions per code
    pub max_attempts: u32,
    /// Declared minimum minutes between code requests
    pub throttle_minutes: i64,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_length: 6,
            expiry_minutes: 10,
            max_attempts: 5,
            throttle_minutes: 1,
        }
    }
}

impl VerificationConfig {
    /// Code lifetime in seconds, as handed to the store
    pub fn expiry_seconds(&self) -> u64 {
        (self.expiry_minutes.max(0) as u64) * 60
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = VerificationConfig::default();
        assert_eq!(config.code_length, 6);
        assert_eq!(config.expiry_minutes, 10);
        assert_eq!(config.expiry_seconds(), 600);
    }

    #[test]
    fn test_negative_expiry_clamps_to_zero() {
        let config = VerificationConfig {
            expiry_minutes: -5,
            ..Default::default()
        };
        assert_eq!(config.expiry_seconds(), 0);
    }
}
