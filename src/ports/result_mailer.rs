//! Result mailer port for delivering the results report.
//!
//! Delivery is split in two phases so callers can tell an unusable mail
//! service apart from a failed send:
//!
//! 1. `ensure_ready` performs one-time initialisation (client construction,
//!    credential checks). Calling it again after success is a no-op.
//! 2. `send` delivers one email and may only be called after `ensure_ready`
//!    has succeeded.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Port for sending assessment results by email.
#[async_trait]
pub trait ResultMailer: Send + Sync {
    /// Prepares the mailer for sending. Idempotent once it has succeeded.
    async fn ensure_ready(&self) -> Result<(), MailerError>;

    /// Sends one results email.
    async fn send(&self, email: ResultEmail) -> Result<(), MailerError>;
}

/// Template parameters of the results email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultEmail {
    pub to_email: String,
    pub copy_to: String,
    pub results_content: String,
    pub total_score: u32,
    pub readiness_level: String,
}

/// Mailer failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MailerError {
    /// Required credentials are missing.
    #[error("Mailer is not configured: {0}")]
    NotConfigured(String),

    /// One-time initialisation failed.
    #[error("Mailer initialisation failed: {0}")]
    Initialization(String),

    /// `send` was called before a successful `ensure_ready`.
    #[error("Mailer is not ready")]
    NotReady,

    /// Could not reach the mail service.
    #[error("Network error: {0}")]
    Network(String),

    /// The mail service did not answer in time.
    #[error("Mail request timed out")]
    Timeout,

    /// The mail service refused the request.
    #[error("Mail service rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },
}

impl MailerError {
    /// True for failures of the preparation phase.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            MailerError::NotConfigured(_) | MailerError::Initialization(_) | MailerError::NotReady
        )
    }
}
