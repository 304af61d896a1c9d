//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `MERGINGTON_` prefix and nested values use double underscores as separators.
//! Every value has a default, so the service starts without any environment.
//!
//! # Example
//!
//! ```no_run
//! use mergington_activities::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod database;
mod error;
mod server;

pub use database::{DatabaseConfig, StoreBackend};
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, LogFormat, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (bind address, logging, static files)
    #[serde(default)]
    pub server: ServerConfig,

    /// Activity store configuration (backend selection, PostgreSQL pool)
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `MERGINGTON` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `MERGINGTON__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `MERGINGTON__DATABASE__BACKEND=memory` -> `database.backend = memory`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("MERGINGTON")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("MERGINGTON__SERVER__PORT");
        env::remove_var("MERGINGTON__SERVER__ENVIRONMENT");
        env::remove_var("MERGINGTON__SERVER__LOG_FORMAT");
        env::remove_var("MERGINGTON__DATABASE__BACKEND");
        env::remove_var("MERGINGTON__DATABASE__URL");
    }

    #[test]
    fn test_load_with_no_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.database.backend, StoreBackend::Postgres);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MERGINGTON__SERVER__PORT", "3000");
        env::set_var("MERGINGTON__SERVER__LOG_FORMAT", "json");
        env::set_var("MERGINGTON__DATABASE__BACKEND", "memory");
        env::set_var("MERGINGTON__DATABASE__URL", "postgresql://test@localhost/test");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.log_format, LogFormat::Json);
        assert_eq!(config.database.backend, StoreBackend::Memory);
        assert_eq!(config.database.url, "postgresql://test@localhost/test");
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MERGINGTON__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_validate_reports_first_invalid_section() {
        let mut config = AppConfig::default();
        config.database.max_connections = 500;
        assert_eq!(config.validate(), Err(ValidationError::PoolSizeTooLarge));

        config.server.port = 0;
        assert_eq!(config.validate(), Err(ValidationError::InvalidPort));
    }
}
