//! Axum router configuration for assessment endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{
    get_assessment, get_results, get_results_chart, get_survey, health, record_response,
    retake_assessment, start_assessment, submit_assessment, update_contact, update_reflection,
    AssessmentAppState,
};

/// Create the assessment API router.
///
/// # Routes
///
/// - `POST /` - Start a new assessment
/// - `GET /:id` - Form status and checklist
/// - `PUT /:id/responses` - Rate one statement
/// - `PUT /:id/reflection` - Replace the reflection text
/// - `PUT /:id/contact` - Replace email and consent
/// - `POST /:id/submit` - Send results
/// - `GET /:id/results` - Results dashboard
/// - `GET /:id/results/chart.svg` - Radar chart
/// - `POST /:id/retake` - Start over
pub fn assessment_routes() -> Router<AssessmentAppState> {
    Router::new()
        .route("/", post(start_assessment))
        .route("/:id", get(get_assessment))
        .route("/:id/responses", put(record_response))
        .route("/:id/reflection", put(update_reflection))
        .route("/:id/contact", put(update_contact))
        .route("/:id/submit", post(submit_assessment))
        .route("/:id/results", get(get_results))
        .route("/:id/results/chart.svg", get(get_results_chart))
        .route("/:id/retake", post(retake_assessment))
}

/// Create the complete application router.
///
/// Mounts `/health`, `/api/survey` and `/api/assessments`.
///
/// # Example
///
/// ```ignore
/// let app = assessment_router().with_state(state);
/// ```
pub fn assessment_router() -> Router<AssessmentAppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/survey", get(get_survey))
        .nest("/api/assessments", assessment_routes())
}
