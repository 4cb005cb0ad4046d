//! Database module - MySQL implementations using SQLx
//!
//! Provides the connection pool and the MySQL user directory. Without a
//! configured database the application uses the in-memory directory from
//! `tutora_core` instead.

pub mod connection;
pub mod mysql;

pub use connection::DatabasePool;
pub use mysql::MySqlUserRepository;
