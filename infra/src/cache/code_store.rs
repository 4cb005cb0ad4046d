//! Redis-backed verification code store
//!
//! Key pattern: `[{prefix}:]phone_verification:{phone}`. The value is the
//! SHA-256 hex digest of the code, written with `SET EX` so Redis drops it
//! when the code expires.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use tutora_core::CodeStore;
use tutora_shared::phone::mask_phone_number;
use tutora_shared::CacheConfig;

use super::redis_client::RedisClient;
use super::CODE_KEY_NAMESPACE;
use crate::InfrastructureError;

/// Verification code store on top of Redis
#[derive(Clone)]
pub struct RedisCodeStore {
    redis_client: RedisClient,
    key_prefix: Option<String>,
    ttl_seconds: u64,
}

impl RedisCodeStore {
    /// Create a code store
    ///
    /// # Arguments
    /// * `redis_client` - Connected Redis client
    /// * `config` - Cache configuration, for the key prefix
    /// * `ttl_seconds` - Code lifetime; Redis rejects zero, so it is raised to one second
    pub fn new(redis_client: RedisClient, config: &CacheConfig, ttl_seconds: u64) -> Self {
        Self {
            redis_client,
            key_prefix: config.key_prefix.clone(),
            ttl_seconds: ttl_seconds.max(1),
        }
    }

    /// Code lifetime in seconds
    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }

    pub(crate) fn format_code_key(&self, phone: &str) -> String {
        format_code_key(self.key_prefix.as_deref(), phone)
    }

    pub async fn put(&self, phone: &str, code: &str) -> Result<(), InfrastructureError> {
        let key = self.format_code_key(phone);
        self.redis_client
            .set_with_expiry(&key, &hash_code(code), self.ttl_seconds)
            .await?;

        info!(
            phone = %mask_phone_number(phone),
            ttl_seconds = self.ttl_seconds,
            "Verification code stored"
        );
        Ok(())
    }

    pub async fn matches(&self, phone: &str, submitted: &str) -> Result<bool, InfrastructureError> {
        let key = self.format_code_key(phone);

        let stored_hash = match self.redis_client.get(&key).await? {
            Some(hash) => hash,
            None => {
                debug!(
                    phone = %mask_phone_number(phone),
                    "No verification code found (expired or not set)"
                );
                return Ok(false);
            }
        };

        Ok(stored_hash == hash_code(submitted))
    }

    pub async fn remove(&self, phone: &str) -> Result<(), InfrastructureError> {
        let key = self.format_code_key(phone);
        let existed = self.redis_client.delete(&key).await?;
        debug!(
            phone = %mask_phone_number(phone),
            existed,
            "Verification code removed"
        );
        Ok(())
    }

    pub async fn contains(&self, phone: &str) -> Result<bool, InfrastructureError> {
        let key = self.format_code_key(phone);
        self.redis_client.exists(&key).await
    }
}

#[async_trait]
impl CodeStore for RedisCodeStore {
    async fn store_code(&self, phone: &str, code: &str) -> Result<(), String> {
        self.put(phone, code).await.map_err(|e| e.to_string())
    }

    async fn verify_code(&self, phone: &str, submitted: &str) -> Result<bool, String> {
        self.matches(phone, submitted).await.map_err(|e| e.to_string())
    }

    async fn remove_code(&self, phone: &str) -> Result<(), String> {
        self.remove(phone).await.map_err(|e| e.to_string())
    }

    async fn has_code(&self, phone: &str) -> Result<bool, String> {
        self.contains(phone).await.map_err(|e| e.to_string())
    }
}

/// Build the Redis key for a phone number
pub(crate) fn format_code_key(prefix: Option<&str>, phone: &str) -> String {
    match prefix {
        Some(prefix) => format!("{}:{}:{}", prefix, CODE_KEY_NAMESPACE, phone),
        None => format!("{}:{}", CODE_KEY_NAMESPACE, phone),
    }
}

/// SHA-256 hex digest of a code
pub(crate) fn hash_code(code: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(code.as_bytes());
    format!("{:x}", hasher.finalize())
}
