//! Repository interfaces for persistence of domain entities.

pub mod user;

pub use user::{InMemoryUserRepository, UserRepository};
