//! Assessment-specific error types.

use thiserror::Error;

use super::SubmissionChecklist;
use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode, ValidationError};
use crate::domain::scoring::ScoringError;

/// Errors raised while filling in, submitting or viewing an assessment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    /// Assessment was not found.
    #[error("Assessment not found: {0}")]
    NotFound(AssessmentId),

    /// Submission gate not satisfied.
    #[error("Assessment is incomplete: {0}")]
    Incomplete(SubmissionChecklist),

    /// A submission for this form is already in flight.
    #[error("Results are already being sent")]
    AlreadySubmitting,

    /// The form has been submitted and is read-only until retaken.
    #[error("Assessment has already been submitted")]
    AlreadySubmitted,

    /// Results were requested before a successful submission.
    #[error("Assessment has not been submitted yet")]
    NotSubmitted,

    /// Validation failed.
    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    /// The mailer could not be initialised.
    #[error("Email service unavailable: {0}")]
    MailerUnavailable(String),

    /// The mailer was ready but the send failed.
    #[error("Failed to send results: {0}")]
    DeliveryFailed(String),

    /// Survey content is inconsistent.
    #[error("Survey content error: {0}")]
    Content(String),

    /// The store is full and no idle form could be evicted.
    #[error("Too many assessments in progress: {0}")]
    AtCapacity(String),

    /// Storage or other infrastructure failure.
    #[error("Error: {0}")]
    Infrastructure(String),
}

impl AssessmentError {
    pub fn not_found(id: AssessmentId) -> Self {
        AssessmentError::NotFound(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AssessmentError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn mailer_unavailable(message: impl Into<String>) -> Self {
        AssessmentError::MailerUnavailable(message.into())
    }
    pub fn delivery_failed(message: impl Into<String>) -> Self {
        AssessmentError::DeliveryFailed(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AssessmentError::NotFound(_) => ErrorCode::AssessmentNotFound,
            AssessmentError::Incomplete(_) => ErrorCode::IncompleteAssessment,
            AssessmentError::AlreadySubmitting => ErrorCode::SubmissionInProgress,
            AssessmentError::AlreadySubmitted => ErrorCode::AlreadySubmitted,
            AssessmentError::NotSubmitted => ErrorCode::NotSubmitted,
            AssessmentError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            AssessmentError::MailerUnavailable(_) => ErrorCode::MailerUnavailable,
            AssessmentError::DeliveryFailed(_) => ErrorCode::DeliveryFailed,
            AssessmentError::Content(_) => ErrorCode::ContentMissing,
            AssessmentError::AtCapacity(_) => ErrorCode::CapacityExceeded,
            AssessmentError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<ValidationError> for AssessmentError {
    fn from(err: ValidationError) -> Self {
        AssessmentError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<ScoringError> for AssessmentError {
    fn from(err: ScoringError) -> Self {
        AssessmentError::Content(err.to_string())
    }
}

impl From<DomainError> for AssessmentError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::CapacityExceeded => AssessmentError::AtCapacity(err.message),
            _ => AssessmentError::Infrastructure(err.to_string()),
        }
    }
}

impl From<AssessmentError> for DomainError {
    fn from(err: AssessmentError) -> Self {
        let code = err.code();
        DomainError::new(code, err.message())
    }
}
