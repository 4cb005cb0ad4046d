//! Tests for code store selection

use tutora_core::CodeStore;
use tutora_shared::{CacheConfig, VerificationConfig};

use crate::cache::CodeStoreBackend;

#[tokio::test]
async fn test_memory_backend_from_config() {
    let verification = VerificationConfig {
        expiry_minutes: 2,
        ..Default::default()
    };

    let backend = CodeStoreBackend::from_config(&CacheConfig::memory(), &verification)
        .await
        .unwrap();

    assert_eq!(backend.name(), "memory");
    match &backend {
        CodeStoreBackend::Memory(store) => assert_eq!(store.ttl().as_secs(), 120),
        CodeStoreBackend::Redis(_) => panic!("Expected memory backend"),
    }

    backend.store_code("+224600000000", "654321").await.unwrap();
    assert!(backend.verify_code("+224600000000", "654321").await.unwrap());
}

#[tokio::test]
async fn test_redis_backend_with_invalid_url_fails() {
    let cache = CacheConfig::new("not a redis url");

    let result = CodeStoreBackend::from_config(&cache, &VerificationConfig::default()).await;

    assert!(result.is_err());
}
