//! Assessment handlers - commands and queries over respondent forms.

mod get_assessment;
mod get_results;
mod record_response;
mod retake_assessment;
mod start_assessment;
mod submit_assessment;
mod support;
mod update_contact;
mod update_reflection;
mod views;

#[cfg(test)]
mod fixtures;

pub use get_assessment::{GetAssessmentHandler, GetAssessmentQuery};
pub use get_results::{GetResultsHandler, GetResultsQuery};
pub use record_response::{RecordResponseCommand, RecordResponseHandler, RecordResponseResult};
pub use retake_assessment::{RetakeAssessmentCommand, RetakeAssessmentHandler};
pub use start_assessment::StartAssessmentHandler;
pub use submit_assessment::{SubmitAssessmentCommand, SubmitAssessmentHandler};
pub use update_contact::{UpdateContactCommand, UpdateContactHandler};
pub use update_reflection::{UpdateReflectionCommand, UpdateReflectionHandler};
pub use views::{AssessmentStatusView, DimensionBreakdown, RecordedResponse, ResultsView};
