//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Survey content could not be loaded: {0}")]
    SurveyContent(#[from] crate::domain::survey::CatalogError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid host address: {0}")]
    InvalidHost(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid EmailJS service id format")]
    InvalidServiceId,

    #[error("Invalid EmailJS template id format")]
    InvalidTemplateId,

    #[error("Invalid copy-to email address")]
    InvalidCopyToEmail,

    #[error("Invalid EmailJS API base URL")]
    InvalidApiBaseUrl,

    #[error("Survey content file not found: {0}")]
    SurveyContentNotFound(String),

    #[error("Store limits must be greater than zero")]
    InvalidStoreLimits,

    #[error("Email timeout ({email_secs}s) must be shorter than the request timeout ({request_secs}s)")]
    EmailTimeoutTooLong { email_secs: u64, request_secs: u64 },
}
