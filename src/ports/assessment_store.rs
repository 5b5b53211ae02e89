//! Assessment store port.
//!
//! Holds one form per respondent, each behind its own async mutex. Callers
//! lock the form for the duration of a state change and must not hold the
//! lock across network calls.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::assessment::AssessmentForm;
use crate::domain::foundation::{AssessmentId, DomainError};

/// Shared handle to one form.
pub type SharedForm = Arc<Mutex<AssessmentForm>>;

#[async_trait]
pub trait AssessmentStore: Send + Sync {
    /// Adds a new form and returns its handle.
    ///
    /// # Errors
    ///
    /// Returns an error if a form with the same ID already exists.
    async fn insert(&self, form: AssessmentForm) -> Result<SharedForm, DomainError>;

    /// Finds a form by ID.
    async fn get(&self, id: &AssessmentId) -> Result<Option<SharedForm>, DomainError>;

    /// Removes a form. Returns whether it existed.
    async fn remove(&self, id: &AssessmentId) -> Result<bool, DomainError>;

    /// Number of stored forms.
    async fn count(&self) -> Result<usize, DomainError>;
}
