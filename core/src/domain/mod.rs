//! Domain layer containing business entities and domain events.

pub mod entities;
pub mod events;

pub use entities::{User, UserRole, VerificationCode};
pub use events::{DomainEvent, EventPublisher, PhoneVerified};
