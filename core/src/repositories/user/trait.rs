//! User repository trait defining the interface for user data persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// The verification flow only reads users and sets the verified
/// timestamp; registration lives elsewhere and reaches the store through
/// `create`.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with that id
    /// * `Err(DomainError)` - Storage error
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by the phone number stored on their profile
    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, DomainError>;

    /// Insert a new user
    ///
    /// Fails with `DomainError::Validation` when the phone number is already
    /// registered to another user.
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Set the phone verified timestamp unless one is already set
    ///
    /// The check and the write are a single atomic step, so concurrent
    /// callers see exactly one `true`.
    ///
    /// # Returns
    /// * `Ok(true)` - The timestamp was set by this call
    /// * `Ok(false)` - The phone was already verified; nothing changed
    /// * `Err(DomainError::NotFound)` - No user with that id
    async fn mark_phone_verified(&self, id: Uuid, at: DateTime<Utc>) -> Result<bool, DomainError>;
}
