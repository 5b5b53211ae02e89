//! Assessment form aggregate.
//!
//! One form per respondent: the ratings given so far, the written
//! reflection, contact details and the submission phase. The form owns the
//! submission gate and the single in-flight guard; scores are never stored
//! here and are recomputed from the responses whenever they are needed.

use serde::{Deserialize, Serialize};

use super::{AssessmentError, SubmissionChecklist};
use crate::domain::foundation::{AssessmentId, Rating, Timestamp, ValidationError};
use crate::domain::scoring::{AssessmentResult, ScoringEngine};
use crate::domain::survey::{ResponseKey, Responses, SurveyCatalog};

/// Maximum length for the reflection text.
pub const MAX_REFLECTION_LENGTH: usize = 10_000;

/// Maximum length for an email address.
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Where the form is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum SubmissionPhase {
    Editing,
    Submitting,
    Submitted { at: Timestamp },
}

impl SubmissionPhase {
    pub fn is_editing(&self) -> bool {
        matches!(self, SubmissionPhase::Editing)
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmissionPhase::Submitted { .. })
    }
}

/// Frozen copy of the answers taken when a submission starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionSnapshot {
    pub id: AssessmentId,
    pub responses: Responses,
    pub reflection: String,
    pub email: String,
}

/// Assessment form aggregate.
///
/// # Invariants
///
/// - every stored response addresses a statement in the catalog
/// - answers change only while `Editing`
/// - `Submitted` is left only through `retake`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentForm {
    id: AssessmentId,
    responses: Responses,
    reflection: String,
    email: String,
    consent: bool,
    phase: SubmissionPhase,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl AssessmentForm {
    /// Creates an empty form in the editing phase.
    pub fn new(id: AssessmentId) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            responses: Responses::new(),
            reflection: String::new(),
            email: String::new(),
            consent: false,
            phase: SubmissionPhase::Editing,
            created_at: now,
            updated_at: now,
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn id(&self) -> AssessmentId {
        self.id
    }

    pub fn responses(&self) -> &Responses {
        &self.responses
    }

    pub fn reflection(&self) -> &str {
        &self.reflection
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn consent(&self) -> bool {
        self.consent
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ───────────────────────────────────────────────────────────────
    // Editing
    // ───────────────────────────────────────────────────────────────

    /// Records a rating, replacing any earlier one for the same statement.
    ///
    /// Returns the previous rating if there was one.
    pub fn record_rating(
        &mut self,
        catalog: &SurveyCatalog,
        key: ResponseKey,
        rating: Rating,
    ) -> Result<Option<Rating>, AssessmentError> {
        self.ensure_editable()?;
        key.validate(catalog)?;
        let previous = self.responses.record(key, rating);
        self.touch();
        Ok(previous)
    }

    /// Replaces the reflection text. Stored verbatim.
    pub fn set_reflection(&mut self, text: impl Into<String>) -> Result<(), AssessmentError> {
        self.ensure_editable()?;
        let text = text.into();
        if text.chars().count() > MAX_REFLECTION_LENGTH {
            return Err(ValidationError::out_of_range(
                "reflection",
                0,
                MAX_REFLECTION_LENGTH as i32,
                text.chars().count() as i32,
            )
            .into());
        }
        self.reflection = text;
        self.touch();
        Ok(())
    }

    /// Replaces the contact email and consent flag.
    ///
    /// Any string is accepted here; the submission gate decides whether the
    /// address is usable.
    pub fn set_contact(
        &mut self,
        email: impl Into<String>,
        consent: bool,
    ) -> Result<(), AssessmentError> {
        self.ensure_editable()?;
        let email = email.into();
        if email.len() > MAX_EMAIL_LENGTH {
            return Err(ValidationError::out_of_range(
                "email",
                0,
                MAX_EMAIL_LENGTH as i32,
                email.len() as i32,
            )
            .into());
        }
        self.email = email;
        self.consent = consent;
        self.touch();
        Ok(())
    }

    // ───────────────────────────────────────────────────────────────
    // Submission gate
    // ───────────────────────────────────────────────────────────────

    pub fn checklist(&self, catalog: &SurveyCatalog) -> SubmissionChecklist {
        SubmissionChecklist {
            answered: self.responses.len(),
            total: catalog.total_questions(),
            has_reflection: !self.reflection.trim().is_empty(),
            has_email: Self::is_usable_email(&self.email),
            has_consent: self.consent,
        }
    }

    /// True when the form is editable and the gate is satisfied.
    pub fn can_submit(&self, catalog: &SurveyCatalog) -> bool {
        self.phase.is_editing() && self.checklist(catalog).is_complete()
    }

    /// Moves to `Submitting` and returns the frozen answers.
    ///
    /// # Errors
    ///
    /// - `AlreadySubmitting` if another submission is in flight
    /// - `AlreadySubmitted` if the form was submitted before
    /// - `Incomplete` if the gate is not satisfied
    pub fn begin_submission(
        &mut self,
        catalog: &SurveyCatalog,
    ) -> Result<SubmissionSnapshot, AssessmentError> {
        self.ensure_editable()?;
        let checklist = self.checklist(catalog);
        if !checklist.is_complete() {
            return Err(AssessmentError::Incomplete(checklist));
        }

        self.phase = SubmissionPhase::Submitting;
        self.touch();

        Ok(SubmissionSnapshot {
            id: self.id,
            responses: self.responses.clone(),
            reflection: self.reflection.clone(),
            email: self.email.trim().to_string(),
        })
    }

    /// Returns a failed submission to `Editing` with every answer intact.
    pub fn submission_failed(&mut self) {
        if self.phase == SubmissionPhase::Submitting {
            self.phase = SubmissionPhase::Editing;
            self.touch();
        }
    }

    /// Marks the in-flight submission as delivered.
    pub fn submission_succeeded(&mut self, at: Timestamp) -> Result<(), AssessmentError> {
        match self.phase {
            SubmissionPhase::Submitting => {
                self.phase = SubmissionPhase::Submitted { at };
                self.touch();
                Ok(())
            }
            SubmissionPhase::Submitted { .. } => Err(AssessmentError::AlreadySubmitted),
            SubmissionPhase::Editing => Err(AssessmentError::NotSubmitted),
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Results
    // ───────────────────────────────────────────────────────────────

    /// Recomputes results from the submitted answers.
    pub fn results(&self, catalog: &SurveyCatalog) -> Result<AssessmentResult, AssessmentError> {
        if !self.phase.is_submitted() {
            return Err(AssessmentError::NotSubmitted);
        }
        Ok(ScoringEngine::score(&self.responses, catalog)?)
    }

    /// Clears every answer and returns to `Editing`.
    pub fn retake(&mut self) -> Result<(), AssessmentError> {
        if self.phase == SubmissionPhase::Submitting {
            return Err(AssessmentError::AlreadySubmitting);
        }
        self.responses.clear();
        self.reflection.clear();
        self.email.clear();
        self.consent = false;
        self.phase = SubmissionPhase::Editing;
        self.touch();
        Ok(())
    }

    // ───────────────────────────────────────────────────────────────
    // Helpers
    // ───────────────────────────────────────────────────────────────

    fn ensure_editable(&self) -> Result<(), AssessmentError> {
        match self.phase {
            SubmissionPhase::Editing => Ok(()),
            SubmissionPhase::Submitting => Err(AssessmentError::AlreadySubmitting),
            SubmissionPhase::Submitted { .. } => Err(AssessmentError::AlreadySubmitted),
        }
    }

    fn is_usable_email(email: &str) -> bool {
        let trimmed = email.trim();
        !trimmed.is_empty() && trimmed.contains('@')
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}
