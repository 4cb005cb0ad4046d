//! Domain services orchestrating entities, repositories and outbound ports.

pub mod verification;

pub use verification::{
    generate_code, CodeStore, IssueResult, PhoneVerificationService, PromptOutcome,
    ResendOutcome, VerificationNotifier, VerifyOutcome,
};
