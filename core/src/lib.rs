//! # Tutora Core
//!
//! Core business logic and domain layer for the Tutora backend.
//! This crate contains domain entities and events, the phone verification
//! flow, the repository/store/notifier interfaces it depends on, and the
//! error types shared by the outer layers.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{User, UserRole, VerificationCode, CODE_LENGTH, DEFAULT_EXPIRATION_MINUTES};
pub use domain::events::{DomainEvent, EventPublisher, PhoneVerified};
pub use errors::{AuthError, DomainError, DomainResult};
pub use repositories::{InMemoryUserRepository, UserRepository};
pub use services::verification::{
    generate_code, CodeStore, IssueResult, PhoneVerificationService, PromptOutcome,
    ResendOutcome, VerificationNotifier, VerifyOutcome,
};
