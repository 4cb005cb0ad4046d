//! Shared utilities and common types for the Tutora server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error response structures
//! - Utility functions (phone masking and normalization)

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CacheBackend, CacheConfig, DatabaseConfig, Environment, LogFormat,
    LoggingConfig, ServerConfig, SmsChannel, SmsConfig, VerificationConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use utils::phone;
