//! HTTP handlers for assessment endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;

use crate::application::handlers::assessment::{
    GetAssessmentHandler, GetAssessmentQuery, GetResultsHandler, GetResultsQuery,
    RecordResponseCommand, RecordResponseHandler, RetakeAssessmentCommand,
    RetakeAssessmentHandler, StartAssessmentHandler, SubmitAssessmentCommand,
    SubmitAssessmentHandler, UpdateContactCommand, UpdateContactHandler,
    UpdateReflectionCommand, UpdateReflectionHandler,
};
use crate::domain::assessment::AssessmentError;
use crate::domain::foundation::AssessmentId;
use crate::domain::survey::SurveyCatalog;
use crate::ports::{AssessmentStore, ResultMailer};

use super::dto::{
    ErrorResponse, HealthResponse, RecordResponseRequest, RecordResponseResponse,
    SurveyResponse, UpdateContactRequest, UpdateReflectionRequest,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// Cloned for each request; every dependency is behind an `Arc`.
#[derive(Clone)]
pub struct AssessmentAppState {
    pub store: Arc<dyn AssessmentStore>,
    pub mailer: Arc<dyn ResultMailer>,
    pub catalog: Arc<SurveyCatalog>,
    /// Address every results email is copied to.
    pub copy_to: String,
}

impl AssessmentAppState {
    pub fn start_handler(&self) -> StartAssessmentHandler {
        StartAssessmentHandler::new(self.store.clone(), self.catalog.clone())
    }

    pub fn get_assessment_handler(&self) -> GetAssessmentHandler {
        GetAssessmentHandler::new(self.store.clone(), self.catalog.clone())
    }

    pub fn record_response_handler(&self) -> RecordResponseHandler {
        RecordResponseHandler::new(self.store.clone(), self.catalog.clone())
    }

    pub fn update_reflection_handler(&self) -> UpdateReflectionHandler {
        UpdateReflectionHandler::new(self.store.clone(), self.catalog.clone())
    }

    pub fn update_contact_handler(&self) -> UpdateContactHandler {
        UpdateContactHandler::new(self.store.clone(), self.catalog.clone())
    }

    pub fn submit_handler(&self) -> SubmitAssessmentHandler {
        SubmitAssessmentHandler::new(
            self.store.clone(),
            self.mailer.clone(),
            self.catalog.clone(),
            self.copy_to.clone(),
        )
    }

    pub fn get_results_handler(&self) -> GetResultsHandler {
        GetResultsHandler::new(self.store.clone(), self.catalog.clone())
    }

    pub fn retake_handler(&self) -> RetakeAssessmentHandler {
        RetakeAssessmentHandler::new(self.store.clone(), self.catalog.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /api/survey - Questionnaire content
pub async fn get_survey(State(state): State<AssessmentAppState>) -> impl IntoResponse {
    Json(SurveyResponse::from(state.catalog.as_ref()))
}

/// GET /api/assessments/:id - Form status and completion checklist
pub async fn get_assessment(
    State(state): State<AssessmentAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let query = GetAssessmentQuery {
        assessment_id: parse_id(&id)?,
    };
    let view = state.get_assessment_handler().handle(query).await?;
    Ok(Json(view))
}

/// GET /api/assessments/:id/results - Results dashboard
pub async fn get_results(
    State(state): State<AssessmentAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let query = GetResultsQuery {
        assessment_id: parse_id(&id)?,
    };
    let view = state.get_results_handler().handle(query).await?;
    Ok(Json(view))
}

/// GET /api/assessments/:id/results/chart.svg - Radar chart
pub async fn get_results_chart(
    State(state): State<AssessmentAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let query = GetResultsQuery {
        assessment_id: parse_id(&id)?,
    };
    let view = state.get_results_handler().handle(query).await?;
    Ok((
        [(header::CONTENT_TYPE, "image/svg+xml")],
        view.chart.to_svg(),
    ))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST/PUT endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/assessments - Start a new assessment
pub async fn start_assessment(
    State(state): State<AssessmentAppState>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let view = state.start_handler().handle().await?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// PUT /api/assessments/:id/responses - Rate one statement
pub async fn record_response(
    State(state): State<AssessmentAppState>,
    Path(id): Path<String>,
    Json(request): Json<RecordResponseRequest>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let cmd = RecordResponseCommand {
        assessment_id: parse_id(&id)?,
        dimension_index: request.dimension_index,
        question_index: request.question_index,
        rating: request.rating,
    };
    let result = state.record_response_handler().handle(cmd).await?;

    Ok(Json(RecordResponseResponse {
        previous_rating: result.previous.map(|r| r.value()),
        assessment: result.status,
    }))
}

/// PUT /api/assessments/:id/reflection - Replace the reflection text
pub async fn update_reflection(
    State(state): State<AssessmentAppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateReflectionRequest>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let cmd = UpdateReflectionCommand {
        assessment_id: parse_id(&id)?,
        text: request.text,
    };
    let view = state.update_reflection_handler().handle(cmd).await?;
    Ok(Json(view))
}

/// PUT /api/assessments/:id/contact - Replace email and consent
pub async fn update_contact(
    State(state): State<AssessmentAppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateContactRequest>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let cmd = UpdateContactCommand {
        assessment_id: parse_id(&id)?,
        email: request.email,
        consent: request.consent,
    };
    let view = state.update_contact_handler().handle(cmd).await?;
    Ok(Json(view))
}

/// POST /api/assessments/:id/submit - Send results and show the dashboard
pub async fn submit_assessment(
    State(state): State<AssessmentAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let cmd = SubmitAssessmentCommand {
        assessment_id: parse_id(&id)?,
    };
    let view = state.submit_handler().handle(cmd).await?;
    Ok(Json(view))
}

/// POST /api/assessments/:id/retake - Clear everything and start over
pub async fn retake_assessment(
    State(state): State<AssessmentAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let cmd = RetakeAssessmentCommand {
        assessment_id: parse_id(&id)?,
    };
    let view = state.retake_handler().handle(cmd).await?;
    Ok(Json(view))
}

fn parse_id(raw: &str) -> Result<AssessmentId, AssessmentApiError> {
    raw.parse::<AssessmentId>().map_err(|_| {
        AssessmentApiError(AssessmentError::validation(
            "assessment_id",
            format!("'{}' is not a valid assessment id", raw),
        ))
    })
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub struct AssessmentApiError(pub AssessmentError);

impl From<AssessmentError> for AssessmentApiError {
    fn from(err: AssessmentError) -> Self {
        Self(err)
    }
}

impl AssessmentApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            AssessmentError::NotFound(_) => StatusCode::NOT_FOUND,
            AssessmentError::Incomplete(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AssessmentError::AlreadySubmitting
            | AssessmentError::AlreadySubmitted
            | AssessmentError::NotSubmitted => StatusCode::CONFLICT,
            AssessmentError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
            AssessmentError::MailerUnavailable(_) | AssessmentError::AtCapacity(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            AssessmentError::DeliveryFailed(_) => StatusCode::BAD_GATEWAY,
            AssessmentError::Content(_) | AssessmentError::Infrastructure(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AssessmentApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let error_code = self.0.code().to_string();
        let message = self.0.message();

        let body = match &self.0 {
            AssessmentError::Incomplete(checklist) => ErrorResponse::with_details(
                error_code,
                message,
                serde_json::to_value(checklist).unwrap_or_default(),
            ),
            AssessmentError::ValidationFailed { field, .. } => ErrorResponse::with_details(
                error_code,
                message,
                serde_json::json!({ "field": field }),
            ),
            _ => ErrorResponse::new(error_code, message),
        };

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self.0, "Request failed");
        }
        (status, Json(body)).into_response()
    }
}
