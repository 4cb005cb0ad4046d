//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `cache` - Verification code store backend (Redis or in-memory)
//! - `database` - Optional MySQL connection for the user directory
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server configuration
//! - `sms` - SMS channel selection and provider credentials
//! - `verification` - Verification code lifetime and declared limits

pub mod cache;
pub mod database;
pub mod environment;
pub mod server;
pub mod sms;
pub mod verification;

use serde::{Deserialize, Serialize};

pub use cache::{CacheBackend, CacheConfig};
pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::ServerConfig;
pub use sms::{AwsSnsConfig, SmsChannel, SmsConfig, TwilioConfig};
pub use verification::VerificationConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Environment the process runs in
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Verification code store configuration
    pub cache: CacheConfig,

    /// SMS delivery configuration
    pub sms: SmsConfig,

    /// Verification flow configuration
    pub verification: VerificationConfig,

    /// User directory database; the in-memory directory is used when absent
    pub database: Option<DatabaseConfig>,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            cache: CacheConfig::memory(),
            logging: LoggingConfig::for_environment(Environment::Development),
            ..Default::default()
        }
    }

    /// Create configuration for production environment
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig::new("0.0.0.0", 8080),
            logging: LoggingConfig::for_environment(Environment::Production),
            ..Default::default()
        }
    }
}
