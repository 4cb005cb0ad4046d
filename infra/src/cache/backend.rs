//! Code store selection from configuration

use async_trait::async_trait;
use tracing::info;

use tutora_core::CodeStore;
use tutora_shared::{CacheBackend, CacheConfig, VerificationConfig};

use super::{InMemoryCodeStore, RedisClient, RedisCodeStore};
use crate::InfrastructureError;

/// The configured verification code store
#[derive(Clone)]
pub enum CodeStoreBackend {
    Redis(RedisCodeStore),
    Memory(InMemoryCodeStore),
}

impl CodeStoreBackend {
    /// Build the store named by `cache.backend`
    ///
    /// Connecting to Redis happens here, so a misconfigured URL fails at
    /// startup rather than on the first request.
    pub async fn from_config(
        cache: &CacheConfig,
        verification: &VerificationConfig,
    ) -> Result<Self, InfrastructureError> {
        let ttl_seconds = verification.expiry_seconds();

        match cache.backend {
            CacheBackend::Redis => {
                let client = RedisClient::new(cache).await?;
                if !client.health_check().await? {
                    return Err(InfrastructureError::Config(
                        "Redis did not answer PING with PONG".to_string(),
                    ));
                }
                info!(backend = "redis", ttl_seconds, "Verification code store ready");
                Ok(CodeStoreBackend::Redis(RedisCodeStore::new(
                    client,
                    cache,
                    ttl_seconds,
                )))
            }
            CacheBackend::Memory => {
                info!(backend = "memory", ttl_seconds, "Verification code store ready");
                Ok(CodeStoreBackend::Memory(InMemoryCodeStore::with_ttl_seconds(
                    ttl_seconds,
                )))
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CodeStoreBackend::Redis(_) => "redis",
            CodeStoreBackend::Memory(_) => "memory",
        }
    }
}

#[async_trait]
impl CodeStore for CodeStoreBackend {
    async fn store_code(&self, phone: &str, code: &str) -> Result<(), String> {
        match self {
            CodeStoreBackend::Redis(store) => store.store_code(phone, code).await,
            CodeStoreBackend::Memory(store) => store.store_code(phone, code).await,
        }
    }

    async fn verify_code(&self, phone: &str, submitted: &str) -> Result<bool, String> {
        match self {
            CodeStoreBackend::Redis(store) => store.verify_code(phone, submitted).await,
            CodeStoreBackend::Memory(store) => store.verify_code(phone, submitted).await,
        }
    }

    async fn remove_code(&self, phone: &str) -> Result<(), String> {
        match self {
            CodeStoreBackend::Redis(store) => store.remove_code(phone).await,
            CodeStoreBackend::Memory(store) => store.remove_code(phone).await,
        }
    }

    async fn has_code(&self, phone: &str) -> Result<bool, String> {
        match self {
            CodeStoreBackend::Redis(store) => store.has_code(phone).await,
            CodeStoreBackend::Memory(store) => store.has_code(phone).await,
        }
    }
}
