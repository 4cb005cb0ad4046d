//! Domain entities representing core business objects.

pub mod user;
pub mod verification_code;

#[cfg(test)]
mod tests;

pub use user::{User, UserRole};
pub use verification_code::{VerificationCode, CODE_LENGTH, DEFAULT_EXPIRATION_MINUTES};
