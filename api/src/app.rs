//! Application state and route wiring
//!
//! This module builds the verification service from configuration and
//! registers the routes and JSON settings shared by the server and tests.

use std::sync::Arc;

use actix_web::web;
use anyhow::Context;
use tracing::{info, warn};

use tutora_core::{
    CodeStore, EventPublisher, InMemoryUserRepository, PhoneVerificationService,
    UserRepository, VerificationNotifier,
};
use tutora_infra::{CodeStoreBackend, DatabasePool, MySqlUserRepository, SmsNotifier};
use tutora_shared::AppConfig;

use crate::handlers::{health::health_check, ApiError};
use crate::routes;

/// Verification service as held by the HTTP layer
pub type VerificationService =
    PhoneVerificationService<dyn VerificationNotifier, dyn CodeStore, dyn UserRepository>;

/// Shared state handed to every handler
pub struct AppState {
    pub verification: Arc<VerificationService>,
}

impl AppState {
    pub fn new(verification: VerificationService) -> Self {
        Self {
            verification: Arc::new(verification),
        }
    }

    /// Build the verification service from configuration
    ///
    /// Connects to Redis and MySQL when configured, so misconfiguration
    /// fails here instead of on the first request.
    pub async fn from_config(
        config: &AppConfig,
        events: Arc<dyn EventPublisher>,
    ) -> anyhow::Result<Self> {
        let store = CodeStoreBackend::from_config(&config.cache, &config.verification)
            .await
            .context("Failed to initialize verification code store")?;

        let notifier = SmsNotifier::from_config(&config.sms, config.verification.expiry_minutes)
            .await
            .context("Failed to initialize SMS notifier")?;

        let users: Arc<dyn UserRepository> = match &config.database {
            Some(database) => {
                let pool = DatabasePool::new(database)
                    .await
                    .context("Failed to connect to the user database")?;
                if !pool
                    .health_check()
                    .await
                    .context("User database health check failed")?
                {
                    anyhow::bail!("User database health check returned an unexpected value");
                }
                info!("Using MySQL user directory");
                Arc::new(MySqlUserRepository::new(pool.get_pool().clone()))
            }
            None => {
                warn!("No database configured; using an in-memory user directory");
                Arc::new(InMemoryUserRepository::new())
            }
        };

        info!(
            store = store.name(),
            channel = %notifier.channel(),
            expiry_minutes = config.verification.expiry_minutes,
            "Verification service ready"
        );

        let notifier: Arc<dyn VerificationNotifier> = Arc::new(notifier);
        let store: Arc<dyn CodeStore> = Arc::new(store);

        Ok(Self::new(PhoneVerificationService::new(
            notifier,
            store,
            users,
            events,
            config.verification.clone(),
        )))
    }
}

/// Malformed JSON bodies become 400 responses in the shared error envelope
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(4096)
        .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into())
}

/// Register all routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/health", web::get().to(health_check))
        .service(web::scope("/api/v1").configure(routes::verification::configure));
}
