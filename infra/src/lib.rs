//! # Infrastructure Layer
//!
//! Concrete implementations of the ports defined in `tutora_core`:
//!
//! - **Cache**: Redis-backed and in-memory verification code stores
//! - **SMS**: Verification code delivery over a log channel, Twilio or AWS SNS
//! - **Database**: MySQL user directory using SQLx
//! - **Events**: In-process broadcast of domain events
//!
//! ## Features
//!
//! - `aws-sns`: Enable the AWS SNS channel (default)

/// Cache module - verification code stores
pub mod cache;

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Events module - domain event fan-out
pub mod events;

/// SMS module - verification code delivery channels
pub mod sms;

pub use cache::{CodeStoreBackend, InMemoryCodeStore, RedisClient, RedisCodeStore};
pub use database::{DatabasePool, MySqlUserRepository};
pub use events::BroadcastEventPublisher;
pub use sms::SmsNotifier;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// SMS service error
    #[error("SMS service error: {0}")]
    Sms(String),
}
