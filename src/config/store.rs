//! Assessment store configuration

use std::time::Duration;

use serde::Deserialize;

use super::error::ValidationError;

/// Limits on the in-memory assessment store
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Forms not updated for this many seconds are evicted
    #[serde(default = "default_idle_ttl_secs")]
    pub idle_ttl_secs: u64,

    /// Maximum number of forms held at once
    #[serde(default = "default_max_forms")]
    pub max_forms: usize,

    /// How often the background sweeper runs, in seconds
    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,
}

impl StoreConfig {
    pub fn idle_ttl(&self) -> Duration {
        Duration::from_secs(self.idle_ttl_secs)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }

    /// Validate store configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.idle_ttl_secs == 0 || self.max_forms == 0 || self.sweep_interval_secs == 0 {
            return Err(ValidationError::InvalidStoreLimits);
        }
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            idle_ttl_secs: default_idle_ttl_secs(),
            max_forms: default_max_forms(),
            sweep_interval_secs: default_sweep_interval_secs(),
        }
    }
}

fn default_idle_ttl_secs() -> u64 {
    24 * 60 * 60
}

fn default_max_forms() -> usize {
    10_000
}

fn default_sweep_interval_secs() -> u64 {
    5 * 60
}
