//! In-memory implementation of UserRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

use super::trait_::UserRepository;

/// User directory held in process memory
///
/// Used when no database is configured and throughout the test suites.
#[derive(Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a repository pre-populated with users
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let map = users.into_iter().map(|u| (u.id, u)).collect();
        Self {
            users: Arc::new(RwLock::new(map)),
        }
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| u.phone.as_deref() == Some(phone))
            .cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if let Some(phone) = user.phone.as_deref() {
            if users.values().any(|u| u.phone.as_deref() == Some(phone)) {
                return Err(DomainError::Validation {
                    message: "Phone number already registered".to_string(),
                });
            }
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn mark_phone_verified(&self, id: Uuid, at: DateTime<Utc>) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;

        let user = users.get_mut(&id).ok_or_else(|| DomainError::NotFound {
            resource: "User".to_string(),
        })?;

        Ok(user.mark_phone_verified(at))
    }
}
