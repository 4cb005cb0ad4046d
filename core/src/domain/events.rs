//! Domain events raised by the verification flow for other subsystems to observe.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Raised once, the first time a user's phone number is verified
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneVerified {
    pub user_id: Uuid,
    pub phone: String,
    pub verified_at: DateTime<Utc>,
}

/// Events published by the core domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    PhoneVerified(PhoneVerified),
}

impl DomainEvent {
    /// Short event name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            DomainEvent::PhoneVerified(_) => "phone_verified",
        }
    }
}

impl From<PhoneVerified> for DomainEvent {
    fn from(event: PhoneVerified) -> Self {
        DomainEvent::PhoneVerified(event)
    }
}

/// Sink for domain events
///
/// Publishing is fire-and-forget from the caller's point of view: a failed
/// publish is logged by the caller and never undoes the state change that
/// raised the event.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish an event to interested subscribers
    async fn publish(&self, event: DomainEvent) -> Result<(), String>;
}
