//! Tests for the in-memory code store

use std::time::Duration;

use tutora_core::CodeStore;

use crate::cache::InMemoryCodeStore;

const PHONE: &str = "+224600000000";

fn store() -> InMemoryCodeStore {
    InMemoryCodeStore::with_ttl_seconds(600)
}

#[tokio::test]
async fn test_store_then_verify() {
    let store = store();
    store.store_code(PHONE, "042917").await.unwrap();

    assert!(store.verify_code(PHONE, "042917").await.unwrap());
    assert!(!store.verify_code(PHONE, "042918").await.unwrap());
    assert!(!store.verify_code("+224611111111", "042917").await.unwrap());
}

#[tokio::test]
async fn test_verify_does_not_consume() {
    let store = store();
    store.store_code(PHONE, "042917").await.unwrap();

    for _ in 0..3 {
        assert!(!store.verify_code(PHONE, "000000").await.unwrap());
    }
    assert!(store.verify_code(PHONE, "042917").await.unwrap());
    assert!(store.verify_code(PHONE, "042917").await.unwrap());
}

#[tokio::test]
async fn test_remove_code() {
    let store = store();
    store.store_code(PHONE, "042917").await.unwrap();

    store.remove_code(PHONE).await.unwrap();
    assert!(!store.verify_code(PHONE, "042917").await.unwrap());
    assert!(!store.has_code(PHONE).await.unwrap());

    // removing again is a no-op
    store.remove_code(PHONE).await.unwrap();
}

#[tokio::test]
async fn test_new_code_replaces_previous() {
    let store = store();
    store.store_code(PHONE, "111111").await.unwrap();
    store.store_code(PHONE, "222222").await.unwrap();

    assert!(!store.verify_code(PHONE, "111111").await.unwrap());
    assert!(store.verify_code(PHONE, "222222").await.unwrap());
    assert_eq!(store.len().await, 1);
}

#[tokio::test(start_paused = true)]
async fn test_code_expires_after_ttl() {
    let store = store();
    store.store_code(PHONE, "042917").await.unwrap();

    tokio::time::advance(Duration::from_secs(599)).await;
    assert!(store.has_code(PHONE).await.unwrap());
    assert!(store.verify_code(PHONE, "042917").await.unwrap());

    tokio::time::advance(Duration::from_secs(1)).await;
    assert!(!store.has_code(PHONE).await.unwrap());
    assert!(!store.verify_code(PHONE, "042917").await.unwrap());
    assert!(store.is_empty().await);
}

#[tokio::test(start_paused = true)]
async fn test_overwrite_restarts_ttl() {
    let store = store();
    store.store_code(PHONE, "111111").await.unwrap();

    tokio::time::advance(Duration::from_secs(500)).await;
    store.store_code(PHONE, "222222").await.unwrap();

    tokio::time::advance(Duration::from_secs(500)).await;
    assert!(store.verify_code(PHONE, "222222").await.unwrap());
}

#[tokio::test(start_paused = true)]
async fn test_store_sweeps_expired_codes() {
    let store = store();
    for i in 0..1000 {
        store
            .store_code(&format!("+2246{:08}", i), "111111")
            .await
            .unwrap();
    }
    assert_eq!(store.len().await, 1000);

    tokio::time::advance(Duration::from_secs(3600)).await;
    store.store_code(PHONE, "222222").await.unwrap();

    assert_eq!(store.len().await, 1);
    assert!(store.verify_code(PHONE, "222222").await.unwrap());
}

#[tokio::test(start_paused = true)]
async fn test_store_keeps_live_codes_of_other_phones() {
    let store = store();
    store.store_code(PHONE, "111111").await.unwrap();

    tokio::time::advance(Duration::from_secs(300)).await;
    store.store_code("+224611111111", "222222").await.unwrap();

    assert_eq!(store.len().await, 2);
    assert!(store.verify_code(PHONE, "111111").await.unwrap());
}
