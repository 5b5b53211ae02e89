//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers mutate a form; query handlers only read it.

pub mod handlers;

pub use handlers::assessment::{
    AssessmentStatusView, GetAssessmentHandler, GetAssessmentQuery, GetResultsHandler,
    GetResultsQuery, RecordResponseCommand, RecordResponseHandler, ResultsView,
    RetakeAssessmentCommand, RetakeAssessmentHandler, StartAssessmentHandler,
    SubmitAssessmentCommand, SubmitAssessmentHandler, UpdateContactCommand, UpdateContactHandler,
    UpdateReflectionCommand, UpdateReflectionHandler,
};
