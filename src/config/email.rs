//! Email configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Email configuration (EmailJS)
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// EmailJS public key (sent as `user_id`)
    #[serde(default)]
    pub public_key: String,

    /// EmailJS private key (sent as `accessToken`), if strict mode is enabled
    #[serde(default)]
    pub private_key: Option<String>,

    /// EmailJS service id
    #[serde(default)]
    pub service_id: String,

    /// EmailJS template id
    #[serde(default)]
    pub template_id: String,

    /// Address that receives a copy of every report
    #[serde(default)]
    pub copy_to: String,

    /// EmailJS API base URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl EmailConfig {
    /// Validate email configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.public_key.trim().is_empty() {
            return Err(ValidationError::MissingRequired("EMAIL__PUBLIC_KEY"));
        }
        if self.service_id.is_empty() {
            return Err(ValidationError::MissingRequired("EMAIL__SERVICE_ID"));
        }
        if !self.service_id.starts_with("service_") {
            return Err(ValidationError::InvalidServiceId);
        }
        if self.template_id.is_empty() {
            return Err(ValidationError::MissingRequired("EMAIL__TEMPLATE_ID"));
        }
        if !self.template_id.starts_with("template_") {
            return Err(ValidationError::InvalidTemplateId);
        }
        if !self.copy_to.contains('@') {
            return Err(ValidationError::InvalidCopyToEmail);
        }
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://")
        {
            return Err(ValidationError::InvalidApiBaseUrl);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            public_key: String::new(),
            private_key: None,
            service_id: String::new(),
            template_id: String::new(),
            copy_to: String::new(),
            api_base_url: default_api_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_api_base_url() -> String {
    "https://api.emailjs.com".to_string()
}

fn default_timeout_secs() -> u64 {
    20
}
