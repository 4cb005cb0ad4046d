//! Middleware and request extractors

pub mod cors;
pub mod identity;

pub use identity::AuthenticatedUser;
