//! Request handlers shared across route groups

pub mod error;
pub mod health;

pub use error::ApiError;
