//! EmailJS mailer - delivers the results email through the EmailJS REST API.
//!
//! The HTTP client is built lazily by `ensure_ready` and reused for every
//! send afterwards. Requests carry a timeout so a stalled connection ends as
//! a delivery failure.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use tokio::sync::OnceCell;

use crate::config::EmailConfig;
use crate::ports::{MailerError, ResultEmail, ResultMailer};

/// Path of the EmailJS send endpoint relative to the API base URL.
const SEND_PATH: &str = "/api/v1.0/email/send";

/// Configuration for the EmailJS mailer.
#[derive(Debug, Clone)]
pub struct EmailJsConfig {
    /// Public key, sent as `user_id`.
    public_key: Secret<String>,
    /// Private key, sent as `accessToken` when present.
    private_key: Option<Secret<String>>,
    pub service_id: String,
    pub template_id: String,
    /// Base URL for the API (default: https://api.emailjs.com).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl EmailJsConfig {
    pub fn new(
        public_key: impl Into<String>,
        service_id: impl Into<String>,
        template_id: impl Into<String>,
    ) -> Self {
        Self {
            public_key: Secret::new(public_key.into()),
            private_key: None,
            service_id: service_id.into(),
            template_id: template_id.into(),
            base_url: "https://api.emailjs.com".to_string(),
            timeout: Duration::from_secs(20),
        }
    }

    /// Builds the mailer configuration from application settings.
    pub fn from_settings(settings: &EmailConfig) -> Self {
        let mut config = Self::new(
            settings.public_key.clone(),
            settings.service_id.clone(),
            settings.template_id.clone(),
        )
        .with_base_url(settings.api_base_url.clone())
        .with_timeout(Duration::from_secs(settings.timeout_secs));
        if let Some(private_key) = settings.private_key.as_ref().filter(|k| !k.is_empty()) {
            config = config.with_private_key(private_key.clone());
        }
        config
    }

    pub fn with_private_key(mut self, private_key: impl Into<String>) -> Self {
        self.private_key = Some(Secret::new(private_key.into()));
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn public_key(&self) -> &str {
        self.public_key.expose_secret()
    }

    fn private_key(&self) -> Option<&str> {
        self.private_key.as_ref().map(|k| k.expose_secret().as_str())
    }
}

/// EmailJS implementation of `ResultMailer`.
pub struct EmailJsMailer {
    config: EmailJsConfig,
    client: OnceCell<Client>,
}

impl EmailJsMailer {
    pub fn new(config: EmailJsConfig) -> Self {
        Self {
            config,
            client: OnceCell::new(),
        }
    }

    fn send_url(&self) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), SEND_PATH)
    }

    fn build_client(&self) -> Result<Client, MailerError> {
        if self.config.public_key().trim().is_empty() {
            return Err(MailerError::NotConfigured("EmailJS public key".to_string()));
        }
        if self.config.service_id.trim().is_empty() {
            return Err(MailerError::NotConfigured("EmailJS service id".to_string()));
        }
        if self.config.template_id.trim().is_empty() {
            return Err(MailerError::NotConfigured("EmailJS template id".to_string()));
        }

        Client::builder()
            .timeout(self.config.timeout)
            .build()
            .map_err(|e| MailerError::Initialization(e.to_string()))
    }

    fn to_request<'a>(&'a self, email: &'a ResultEmail) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: self.config.public_key(),
            access_token: self.config.private_key(),
            template_params: email,
        }
    }
}

#[async_trait]
impl ResultMailer for EmailJsMailer {
    async fn ensure_ready(&self) -> Result<(), MailerError> {
        self.client
            .get_or_try_init(|| async {
                let client = self.build_client()?;
                tracing::info!(service_id = %self.config.service_id, "EmailJS mailer initialised");
                Ok::<_, MailerError>(client)
            })
            .await
            .map(|_| ())
            .map_err(|e| {
                tracing::error!(error = %e, "EmailJS mailer initialisation failed");
                e
            })
    }

    async fn send(&self, email: ResultEmail) -> Result<(), MailerError> {
        let client = self.client.get().ok_or(MailerError::NotReady)?;

        let response = client
            .post(self.send_url())
            .json(&self.to_request(&email))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    MailerError::Timeout
                } else {
                    MailerError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(status = status.as_u16(), "EmailJS accepted results email");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), body = %body, "EmailJS rejected results email");
        Err(MailerError::Rejected {
            status: status.as_u16(),
            message: body,
        })
    }
}

/// Body of `POST /api/v1.0/email/send`.
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: &'a ResultEmail,
}
