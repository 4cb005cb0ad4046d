//! Configuration loading
//!
//! Sources, later ones winning:
//! 1. Built-in defaults for the current environment
//! 2. `config/default.toml` (optional)
//! 3. `config/{environment}.toml` (optional)
//! 4. `TUTORA__*` environment variables, `__` separating nested keys,
//!    e.g. `TUTORA__SMS__CHANNEL=twilio`

use config::{Config, File};
use thiserror::Error;

use tutora_shared::{AppConfig, Environment, LoggingConfig};

const ENV_PREFIX: &str = "TUTORA";
const ENV_SEPARATOR: &str = "__";

/// Upper bound on code lifetime (one day)
const MAX_EXPIRY_MINUTES: i64 = 1440;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Defaults for an environment before any file or variable is applied
pub fn defaults_for(environment: Environment) -> AppConfig {
    match environment {
        Environment::Development => AppConfig::development(),
        Environment::Production => AppConfig::production(),
        Environment::Staging => AppConfig {
            environment,
            logging: LoggingConfig::for_environment(environment),
            ..Default::default()
        },
    }
}

/// Load configuration for the environment named by `TUTORA_ENV`
pub fn load() -> Result<AppConfig, ConfigError> {
    load_for(Environment::from_env())
}

/// Load configuration for a given environment
pub fn load_for(environment: Environment) -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        .add_source(Config::try_from(&defaults_for(environment))?)
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(environment.config_file()).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator(ENV_SEPARATOR)
                .separator(ENV_SEPARATOR),
        )
        .build()?;

    let mut app_config: AppConfig = settings.try_deserialize()?;
    app_config.environment = environment;

    validate(&app_config)?;
    Ok(app_config)
}

fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    if config.verification.expiry_minutes <= 0 {
        return Err(ConfigError::Invalid(
            "verification.expiry_minutes must be positive".to_string(),
        ));
    }

    if config.verification.expiry_minutes > MAX_EXPIRY_MINUTES {
        return Err(ConfigError::Invalid(format!(
            "verification.expiry_minutes must not exceed {}",
            MAX_EXPIRY_MINUTES
        )));
    }

    if config.server.port == 0 {
        return Err(ConfigError::Invalid("server.port must be set".to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tutora_shared::{CacheBackend, SmsChannel};

    #[test]
    fn test_development_defaults() {
        let config = load_for(Environment::Development).unwrap();

        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.cache.backend, CacheBackend::Memory);
        assert_eq!(config.sms.channel, SmsChannel::Log);
        assert!(config.database.is_none());
    }

    #[test]
    fn test_production_defaults_bind_all_interfaces() {
        let config = defaults_for(Environment::Production);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_environment_variables_override_defaults() {
        std::env::set_var("TUTORA__VERIFICATION__EXPIRY_MINUTES", "3");
        let config = load_for(Environment::Staging);
        std::env::remove_var("TUTORA__VERIFICATION__EXPIRY_MINUTES");

        let config = config.unwrap();
        assert_eq!(config.verification.expiry_minutes, 3);
        assert_eq!(config.verification.max_attempts, 5);
    }

    #[test]
    fn test_rejects_non_positive_expiry() {
        let mut config = AppConfig::default();
        config.verification.expiry_minutes = 0;

        assert!(matches!(validate(&config), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_excessive_expiry() {
        let mut config = AppConfig::default();
        config.verification.expiry_minutes = MAX_EXPIRY_MINUTES + 1;
        assert!(matches!(validate(&config), Err(ConfigError::Invalid(_))));

        config.verification.expiry_minutes = i64::MAX;
        assert!(matches!(validate(&config), Err(ConfigError::Invalid(_))));

        config.verification.expiry_minutes = MAX_EXPIRY_MINUTES;
        assert!(validate(&config).is_ok());
    }
}
