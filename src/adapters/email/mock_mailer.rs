//! Mock result mailer for testing.
//!
//! Provides a configurable mock implementation of `ResultMailer` for unit
//! and integration tests. Supports:
//! - Error injection per phase
//! - Artificial send latency
//! - Call tracking and captured emails

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::ports::{MailerError, ResultEmail, ResultMailer};

/// Mock result mailer for testing.
///
/// # Example
///
/// ```ignore
/// let mailer = MockResultMailer::new();
/// mailer.set_method_error("send", MailerError::Timeout);
///
/// let result = handler.handle(cmd).await;
/// assert_eq!(mailer.call_count("send"), 1);
/// ```
#[derive(Default)]
pub struct MockResultMailer {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    /// Set once `ensure_ready` succeeds.
    ready: bool,

    /// Error to return on the next call to any method.
    next_error: Option<MailerError>,

    /// Specific errors by method name.
    method_errors: HashMap<String, MailerError>,

    /// Delay applied before `send` completes.
    send_delay: Option<Duration>,

    /// Emails accepted by `send`.
    sent: Vec<ResultEmail>,

    /// Track method calls for assertions.
    call_log: Vec<String>,
}

impl MockResultMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock whose `ensure_ready` always fails.
    pub fn unavailable() -> Self {
        let mock = Self::new();
        mock.set_method_error(
            "ensure_ready",
            MailerError::NotConfigured("public key".to_string()),
        );
        mock
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Configuration Methods
    // ════════════════════════════════════════════════════════════════════════════

    /// Set an error to return on the next call to any method.
    pub fn set_error(&self, error: MailerError) {
        self.inner.lock().unwrap().next_error = Some(error);
    }

    /// Set an error for a specific method until cleared.
    pub fn set_method_error(&self, method: &str, error: MailerError) {
        self.inner
            .lock()
            .unwrap()
            .method_errors
            .insert(method.to_string(), error);
    }

    /// Clear all configured errors.
    pub fn clear_errors(&self) {
        let mut state = self.inner.lock().unwrap();
        state.next_error = None;
        state.method_errors.clear();
    }

    /// Make every `send` wait before completing.
    pub fn set_send_delay(&self, delay: Duration) {
        self.inner.lock().unwrap().send_delay = Some(delay);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Call Tracking
    // ════════════════════════════════════════════════════════════════════════════

    /// Emails accepted so far.
    pub fn sent(&self) -> Vec<ResultEmail> {
        self.inner.lock().unwrap().sent.clone()
    }

    /// Names of all recorded calls, in order.
    pub fn calls(&self) -> Vec<String> {
        self.inner.lock().unwrap().call_log.clone()
    }

    pub fn call_count(&self, method: &str) -> usize {
        self.inner
            .lock()
            .unwrap()
            .call_log
            .iter()
            .filter(|c| c.as_str() == method)
            .count()
    }

    pub fn is_ready(&self) -> bool {
        self.inner.lock().unwrap().ready
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Internal Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn record_call(&self, method: &str) {
        self.inner.lock().unwrap().call_log.push(method.to_string());
    }

    fn check_error(&self, method: &str) -> Result<(), MailerError> {
        let mut state = self.inner.lock().unwrap();

        if let Some(error) = state.method_errors.get(method) {
            return Err(error.clone());
        }

        // Global error is consumed
        if let Some(error) = state.next_error.take() {
            return Err(error);
        }

        Ok(())
    }
}

impl Clone for MockResultMailer {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[async_trait]
impl ResultMailer for MockResultMailer {
    async fn ensure_ready(&self) -> Result<(), MailerError> {
        self.record_call("ensure_ready");
        self.check_error("ensure_ready")?;
        self.inner.lock().unwrap().ready = true;
        Ok(())
    }

    async fn send(&self, email: ResultEmail) -> Result<(), MailerError> {
        self.record_call("send");
        if !self.is_ready() {
            return Err(MailerError::NotReady);
        }

        let delay = self.inner.lock().unwrap().send_delay;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.check_error("send")?;
        self.inner.lock().unwrap().sent.push(email);
        Ok(())
    }
}
