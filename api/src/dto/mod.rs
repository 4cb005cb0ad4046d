//! Data transfer objects for the HTTP API

pub mod verification;

pub use verification::{VerificationStatus, VerificationStatusResponse, VerifyCodeRequest};
