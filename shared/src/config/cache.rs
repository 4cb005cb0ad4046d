//! Cache configuration module

use serde::{Deserialize, Serialize};

/// Backend used to hold verification codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    #[default]
    Redis,
    Memory,
}

/// Verification code store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Which store backend to use
    pub backend: CacheBackend,

    /// Redis connection URL
    pub url: String,

    /// Connection attempts before giving up at startup
    pub max_retries: u32,

    /// Base delay between connection attempts in milliseconds
    pub retry_delay_ms: u64,

    /// Optional prefix prepended to every cache key
    pub key_prefix: Option<String>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: CacheBackend::Redis,
            url: String::from("redis://localhost:6379"),
            max_retries: 3,
            retry_delay_ms: 100,
            key_prefix: None,
        }
    }
}

impl CacheConfig {
    /// Create a Redis cache configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Create an in-memory cache configuration
    pub fn memory() -> Self {
        Self {
            backend: CacheBackend::Memory,
            ..Default::default()
        }
    }

    /// Set the key prefix for all cache keys
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = Some(prefix.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.backend, CacheBackend::Redis);
        assert_eq!(config.url, "redis://localhost:6379");
        assert!(config.key_prefix.is_none());
    }

    #[test]
    fn test_cache_config_with_prefix() {
        let config = CacheConfig::new("redis://cache:6379").with_prefix("tutora");
        assert_eq!(config.url, "redis://cache:6379");
        assert_eq!(config.key_prefix.as_deref(), Some("tutora"));
    }

    #[test]
    fn test_memory_backend() {
        let config = CacheConfig::memory();
        assert_eq!(config.backend, CacheBackend::Memory);
        assert!(config.key_prefix.is_none());
    }
}
