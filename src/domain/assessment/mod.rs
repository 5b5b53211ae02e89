//! Assessment module - the per-respondent form and its submission lifecycle.
//!
//! # Lifecycle
//!
//! ```text
//! Editing ──begin_submission──▶ Submitting ──succeeded──▶ Submitted
//!    ▲                              │                        │
//!    └──────────failed──────────────┘                        │
//!    └──────────────────────retake───────────────────────────┘
//! ```

mod checklist;
mod errors;
mod form;

pub use checklist::SubmissionChecklist;
pub use errors::AssessmentError;
pub use form::{
    AssessmentForm, SubmissionPhase, SubmissionSnapshot, MAX_EMAIL_LENGTH, MAX_REFLECTION_LENGTH,
};
