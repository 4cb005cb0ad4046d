//! Cache module for verification code storage
//!
//! Codes live either in Redis, shared by every server process, or in the
//! memory of a single process. The backend is chosen from `CacheConfig`.

pub mod backend;
pub mod code_store;
pub mod memory_store;
pub mod redis_client;

#[cfg(test)]
mod tests;

pub use backend::CodeStoreBackend;
pub use code_store::RedisCodeStore;
pub use memory_store::InMemoryCodeStore;
pub use redis_client::RedisClient;

/// Key namespace for verification codes
pub const CODE_KEY_NAMESPACE: &str = "phone_verification";
