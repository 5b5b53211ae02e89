//! HTTP adapters - REST API implementations.

pub mod assessment;

pub use assessment::{assessment_router, AssessmentAppState};
