//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `ALLOY_IMPACT` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use alloy_impact::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod data;
mod error;
mod server;

pub use data::DataConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Bare port variable set by hosting platforms.
pub const PLATFORM_PORT_VAR: &str = "PORT";

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Reference data location
    #[serde(default)]
    pub data: DataConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `ALLOY_IMPACT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Lets a bare `PORT` variable override the port; its presence also
    ///    makes `production` the default environment
    ///
    /// # Environment Variable Format
    ///
    /// - `ALLOY_IMPACT__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `ALLOY_IMPACT__DATA__INDICATORS_PATH=...` -> `data.indicators_path = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let platform_port = std::env::var(PLATFORM_PORT_VAR).ok();

        let mut builder = config::Config::builder();
        if platform_port.is_some() {
            builder = builder.set_default("server.environment", "production")?;
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix("ALLOY_IMPACT")
                    .separator("__"),
            )
            .set_override_option("server.port", platform_port)?
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
        self.data.validate()?;
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
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("ALLOY_IMPACT__SERVER__PORT");
        env::remove_var("ALLOY_IMPACT__SERVER__ENVIRONMENT");
        env::remove_var("ALLOY_IMPACT__DATA__INDICATORS_PATH");
        env::remove_var(PLATFORM_PORT_VAR);
    }

    #[test]
    fn test_defaults_without_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8050);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(
            config.data.indicators_path,
            PathBuf::from("gen_element_imputed.csv")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_values() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("ALLOY_IMPACT__SERVER__PORT", "3000");
        env::set_var("ALLOY_IMPACT__DATA__INDICATORS_PATH", "/data/elements.csv");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.data.indicators_path, PathBuf::from("/data/elements.csv"));
    }

    #[test]
    fn test_platform_port_switches_to_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var(PLATFORM_PORT_VAR, "10000");
        env::set_var("ALLOY_IMPACT__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 10000);
        assert!(config.is_production());
    }

    #[test]
    fn test_explicit_environment_wins_over_platform_default() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var(PLATFORM_PORT_VAR, "10000");
        env::set_var("ALLOY_IMPACT__SERVER__ENVIRONMENT", "staging");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.environment, Environment::Staging);
        assert!(!config.is_production());
    }

    #[test]
    fn test_invalid_port_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("ALLOY_IMPACT__SERVER__PORT", "not-a-port");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
