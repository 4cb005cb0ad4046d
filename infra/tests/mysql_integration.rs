//! MySQL user directory integration tests
//!
//! These need a running MySQL server:
//! `DATABASE_URL=mysql://root@localhost:3306/tutora_test cargo test -p tutora_infra -- --ignored`

use chrono::Utc;
use uuid::Uuid;

use tutora_core::{User, UserRepository, UserRole};
use tutora_infra::{DatabasePool, MySqlUserRepository};
use tutora_shared::DatabaseConfig;

const CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id                CHAR(36)     NOT NULL PRIMARY KEY,
    name              VARCHAR(255) NOT NULL,
    email             VARCHAR(255) NOT NULL UNIQUE,
    phone             VARCHAR(32)  NULL UNIQUE,
    role              VARCHAR(16)  NOT NULL,
    phone_verified_at TIMESTAMP    NULL,
    created_at        TIMESTAMP    NOT NULL,
    updated_at        TIMESTAMP    NOT NULL
)
"#;

async fn pool() -> DatabasePool {
    let url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "mysql://root@localhost:3306/tutora_test".to_string());
    let config = DatabaseConfig {
        url,
        ..Default::default()
    };

    let pool = DatabasePool::new(&config).await.expect("MySQL must be running");
    sqlx::query(CREATE_USERS)
        .execute(pool.get_pool())
        .await
        .unwrap();
    pool
}

#[tokio::test]
#[ignore]
async fn test_mysql_health_check() {
    let pool = pool().await;
    assert!(pool.health_check().await.unwrap());
}

#[tokio::test]
#[ignore]
async fn test_mysql_mark_phone_verified_only_once() {
    let repo = MySqlUserRepository::new(pool().await.get_pool().clone());
    let user = User::new(
        "Integration User",
        format!("{}@example.com", Uuid::new_v4()),
        None,
        UserRole::Student,
    );
    let user = repo.create(user).await.unwrap();

    assert!(repo.mark_phone_verified(user.id, Utc::now()).await.unwrap());
    let first = repo.find_by_id(user.id).await.unwrap().unwrap().phone_verified_at;
    assert!(first.is_some());

    assert!(!repo.mark_phone_verified(user.id, Utc::now()).await.unwrap());
    let second = repo.find_by_id(user.id).await.unwrap().unwrap().phone_verified_at;
    assert_eq!(first, second);

    assert!(repo.mark_phone_verified(Uuid::new_v4(), Utc::now()).await.is_err());
}
