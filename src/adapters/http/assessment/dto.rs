//! Data Transfer Objects for assessment HTTP endpoints.
//!
//! Request bodies are deserialized here; status and results views come
//! straight from the application layer.

use serde::{Deserialize, Serialize};

use crate::application::handlers::assessment::AssessmentStatusView;
use crate::domain::foundation::Rating;
use crate::domain::survey::{Dimension, ReflectionPrompt, SurveyCatalog};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to rate one statement.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordResponseRequest {
    pub dimension_index: usize,
    pub question_index: usize,
    pub rating: u8,
}

/// Request to replace the reflection text.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateReflectionRequest {
    pub text: String,
}

/// Request to replace contact details.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateContactRequest {
    pub email: String,
    #[serde(default)]
    pub consent: bool,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// One point on the rating scale.
#[derive(Debug, Clone, Serialize)]
pub struct RatingOption {
    pub value: u8,
    pub label: &'static str,
}

/// One dimension with its position in the form.
#[derive(Debug, Clone, Serialize)]
pub struct DimensionResponse {
    pub index: usize,
    pub name: String,
    pub description: String,
    pub questions: Vec<String>,
    pub max_score: u32,
}

impl DimensionResponse {
    fn new(index: usize, dimension: &Dimension) -> Self {
        Self {
            index,
            name: dimension.name.clone(),
            description: dimension.description.clone(),
            questions: dimension.questions.clone(),
            max_score: dimension.max_score(),
        }
    }
}

/// Everything needed to render the questionnaire.
#[derive(Debug, Clone, Serialize)]
pub struct SurveyResponse {
    pub title: String,
    pub subtitle: String,
    pub overview: String,
    pub rating_scale: Vec<RatingOption>,
    pub dimensions: Vec<DimensionResponse>,
    pub reflection: ReflectionPrompt,
    pub consent_statement: String,
    pub total_questions: usize,
    pub max_total_score: u32,
}

impl From<&SurveyCatalog> for SurveyResponse {
    fn from(catalog: &SurveyCatalog) -> Self {
        Self {
            title: catalog.title.clone(),
            subtitle: catalog.subtitle.clone(),
            overview: catalog.overview.clone(),
            rating_scale: Rating::ALL
                .iter()
                .map(|r| RatingOption {
                    value: r.value(),
                    label: r.label(),
                })
                .collect(),
            dimensions: catalog
                .dimensions()
                .iter()
                .enumerate()
                .map(|(i, d)| DimensionResponse::new(i, d))
                .collect(),
            reflection: catalog.reflection.clone(),
            consent_statement: catalog.consent_statement.clone(),
            total_questions: catalog.total_questions(),
            max_total_score: catalog.max_total_score(),
        }
    }
}

/// Response after rating a statement.
#[derive(Debug, Clone, Serialize)]
pub struct RecordResponseResponse {
    pub previous_rating: Option<u8>,
    pub assessment: AssessmentStatusView,
}

/// Liveness probe body.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional details (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(
        error_code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}
