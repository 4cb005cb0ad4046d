//! Database configuration module

use serde::{Deserialize, Serialize};

/// MySQL connection settings for the user directory
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Connection timeout in seconds
    pub connect_timeout: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::from("mysql://localhost:3306/tutora"),
            max_connections: 10,
            connect_timeout: 30,
        }
    }
}
