//! Unit tests for the User entity

use chrono::{Duration, Utc};

use crate::domain::entities::user::{User, UserRole};

fn sample_user() -> User {
    User::new(
        "Aminata Diallo",
        "aminata@example.com",
        Some("+224600000000".to_string()),
        UserRole::Parent,
    )
}

#[test]
fn test_new_user_has_unverified_phone() {
    let user = sample_user();

    assert!(!user.phone_verified());
    assert!(user.phone_verified_at.is_none());
    assert_eq!(user.phone.as_deref(), Some("+224600000000"));
    assert_eq!(user.created_at, user.updated_at);
}

#[test]
fn test_mark_phone_verified_sets_timestamp_once() {
    let mut user = sample_user();

    let now = Utc::now();
    assert!(user.mark_phone_verified(now));
    assert!(user.phone_verified());

    let first = user.phone_verified_at;
    assert!(!user.mark_phone_verified(now + Duration::seconds(1)));
    assert_eq!(user.phone_verified_at, first);
}

#[test]
fn test_mark_phone_verified_touches_updated_at() {
    let mut user = sample_user();
    let before = user.updated_at;

    user.mark_phone_verified(Utc::now());

    assert!(user.updated_at >= before);
    assert_eq!(Some(user.updated_at), user.phone_verified_at);
}

#[test]
fn test_user_role_round_trips_through_str() {
    for role in [
        UserRole::Parent,
        UserRole::Teacher,
        UserRole::Student,
        UserRole::Admin,
    ] {
        assert_eq!(role.as_str().parse::<UserRole>(), Ok(role));
    }

    assert_eq!("professor".parse::<UserRole>(), Ok(UserRole::Teacher));
    assert!("guest".parse::<UserRole>().is_err());
}

#[test]
fn test_user_role_serializes_lowercase() {
    let json = serde_json::to_string(&UserRole::Teacher).unwrap();
    assert_eq!(json, "\"teacher\"");
}
