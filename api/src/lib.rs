//! # Tutora API
//!
//! HTTP surface of the phone verification flow: the prompt, resend and
//! verify endpoints, configuration loading and logging bootstrap.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod telemetry;

pub use app::{AppState, VerificationService};
