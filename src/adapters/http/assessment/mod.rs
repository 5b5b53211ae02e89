//! Assessment HTTP adapter.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::{AssessmentApiError, AssessmentAppState};
pub use routes::{assessment_router, assessment_routes};
