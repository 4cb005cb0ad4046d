//! Phone verification by one-time SMS code
//!
//! This module provides the verification code workflow:
//! - Code generation
//! - Storage behind the `CodeStore` port
//! - Delivery behind the `VerificationNotifier` port
//! - Prompt, resend and verify actions for a signed-in user

mod generator;
mod service;
mod traits;
mod types;


pub use generator::generate_code;
pub use service::PhoneVerificationService;
pub use traits::{CodeStore, VerificationNotifier};
pub use types::{IssueResult, PromptOutcome, ResendOutcome, VerifyOutcome};
