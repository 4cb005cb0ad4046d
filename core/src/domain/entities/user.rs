//! User entity representing a registered member of the marketplace.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents the role of a user in the marketplace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// A parent booking lessons for a child
    Parent,
    /// A teacher or professor offering lessons
    Teacher,
    /// A student taking lessons
    Student,
    /// A platform administrator
    Admin,
}

impl UserRole {
    /// Stable lowercase name used in storage
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Parent => "parent",
            UserRole::Teacher => "teacher",
            UserRole::Student => "student",
            UserRole::Admin => "admin",
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "parent" => Ok(UserRole::Parent),
            "teacher" | "professor" => Ok(UserRole::Teacher),
            "student" => Ok(UserRole::Student),
            "admin" => Ok(UserRole::Admin),
            other => Err(format!("Unknown user role: {}", other)),
        }
    }
}

/// User entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Login email
    pub email: String,

    /// Phone number as entered at registration, if any
    pub phone: Option<String>,

    /// Marketplace role
    pub role: UserRole,

    /// When the phone number was verified; set once, never cleared
    pub phone_verified_at: Option<DateTime<Utc>>,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance with an unverified phone
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: Option<String>,
        role: UserRole,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            phone,
            role,
            phone_verified_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the phone number has been verified
    pub fn phone_verified(&self) -> bool {
        self.phone_verified_at.is_some()
    }

    /// Marks the phone number as verified
    ///
    /// Returns `true` when the timestamp was set by this call and `false`
    /// when the phone was already verified, in which case nothing changes.
    pub fn mark_phone_verified(&mut self, at: DateTime<Utc>) -> bool {
        if self.phone_verified() {
            return false;
        }

        self.phone_verified_at = Some(at);
        self.updated_at = at;
        true
    }
}
