//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CONSCIOUS_EVOLUTION` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use conscious_evolution::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod email;
mod error;
mod server;
mod store;
mod survey;

pub use email::EmailConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use store::StoreConfig;
pub use survey::SurveyConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Email configuration (EmailJS)
    #[serde(default)]
    pub email: EmailConfig,

    /// Survey content configuration
    #[serde(default)]
    pub survey: SurveyConfig,

    /// In-memory store limits
    #[serde(default)]
    pub store: StoreConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CONSCIOUS_EVOLUTION` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CONSCIOUS_EVOLUTION__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `CONSCIOUS_EVOLUTION__EMAIL__SERVICE_ID=...` -> `email.service_id = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CONSCIOUS_EVOLUTION")
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
        self.email.validate()?;
        self.survey.validate()?;
        self.store.validate()?;

        // A send must be able to fail on its own before the request is cut off
        if self.email.timeout_secs >= self.server.request_timeout_secs {
            return Err(ValidationError::EmailTimeoutTooLong {
                email_secs: self.email.timeout_secs,
                request_secs: self.server.request_timeout_secs,
            });
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
