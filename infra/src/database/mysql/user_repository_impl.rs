//! MySQL implementation of the UserRepository trait.
//!
//! Expected table:
//!
//! ```sql
//! CREATE TABLE users (
//!     id                CHAR(36)     NOT NULL PRIMARY KEY,
//!     name              VARCHAR(255) NOT NULL,
//!     email             VARCHAR(255) NOT NULL UNIQUE,
//!     phone             VARCHAR(32)  NULL UNIQUE,
//!     role              VARCHAR(16)  NOT NULL,
//!     phone_verified_at TIMESTAMP    NULL,
//!     created_at        TIMESTAMP    NOT NULL,
//!     updated_at        TIMESTAMP    NOT NULL
//! );
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use tutora_core::errors::DomainError;
use tutora_core::{User, UserRepository, UserRole};

const USER_COLUMNS: &str =
    "id, name, email, phone, role, phone_verified_at, created_at, updated_at";

/// MySQL-backed user directory
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn db_error(context: &str, e: sqlx::Error) -> DomainError {
        tracing::error!(error = %e, "{}", context);
        DomainError::internal(format!("{}: {}", context, e))
    }

    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let column = |name: &str, e: sqlx::Error| {
            DomainError::internal(format!("Failed to read column {}: {}", name, e))
        };

        let id: String = row.try_get("id").map_err(|e| column("id", e))?;
        let role: String = row.try_get("role").map_err(|e| column("role", e))?;

        Ok(User {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::internal(format!("Invalid UUID: {}", e)))?,
            name: row.try_get("name").map_err(|e| column("name", e))?,
            email: row.try_get("email").map_err(|e| column("email", e))?,
            phone: row.try_get("phone").map_err(|e| column("phone", e))?,
            role: role.parse::<UserRole>().map_err(DomainError::internal)?,
            phone_verified_at: row
                .try_get::<Option<DateTime<Utc>>, _>("phone_verified_at")
                .map_err(|e| column("phone_verified_at", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| column("created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| column("updated_at", e))?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE id = ? LIMIT 1", USER_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Self::db_error("Database query failed", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE phone = ? LIMIT 1", USER_COLUMNS);

        let row = sqlx::query(&query)
            .bind(phone)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Self::db_error("Database query failed", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        if let Some(phone) = user.phone.as_deref() {
            if self.find_by_phone(phone).await?.is_some() {
                return Err(DomainError::Validation {
                    message: "Phone number already registered".to_string(),
                });
            }
        }

        let query = format!(
            "INSERT INTO users ({}) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            USER_COLUMNS
        );

        sqlx::query(&query)
            .bind(user.id.to_string())
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.phone)
            .bind(user.role.as_str())
            .bind(user.phone_verified_at)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::db_error("Failed to insert user", e))?;

        tracing::info!(user_id = %user.id, "User created");
        Ok(user)
    }

    async fn mark_phone_verified(&self, id: Uuid, at: DateTime<Utc>) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET phone_verified_at = ?, updated_at = ?
            WHERE id = ? AND phone_verified_at IS NULL
            "#,
        )
        .bind(at)
        .bind(at)
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| Self::db_error("Failed to mark phone verified", e))?;

        if result.rows_affected() == 1 {
            return Ok(true);
        }

        match self.find_by_id(id).await? {
            Some(_) => Ok(false),
            None => Err(DomainError::NotFound {
                resource: "User".to_string(),
            }),
        }
    }
}
