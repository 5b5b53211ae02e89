//! Read models returned by the assessment handlers.

use serde::Serialize;

use crate::domain::assessment::{AssessmentForm, SubmissionChecklist, SubmissionPhase};
use crate::domain::chart::{self, ChartDatum, RadarChart};
use crate::domain::foundation::{AssessmentId, Percentage, Timestamp};
use crate::domain::scoring::{AssessmentResult, ScoringEngine};
use crate::domain::survey::{ResponseKey, SurveyCatalog};

/// One recorded rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordedResponse {
    pub dimension_index: usize,
    pub question_index: usize,
    pub rating: u8,
}

/// Current state of a form as seen by the respondent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentStatusView {
    pub assessment_id: AssessmentId,
    pub phase: SubmissionPhase,
    pub responses: Vec<RecordedResponse>,
    pub reflection: String,
    pub email: String,
    pub consent: bool,
    pub checklist: SubmissionChecklist,
    pub can_submit: bool,
    /// Text for the submit control: the checklist line, or the ready prompt.
    pub status_line: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl AssessmentStatusView {
    pub const READY_PROMPT: &'static str = "Send My Results & View Dashboard";
    pub const SENDING_PROMPT: &'static str = "Sending Results...";

    pub fn from_form(form: &AssessmentForm, catalog: &SurveyCatalog) -> Self {
        let checklist = form.checklist(catalog);
        let can_submit = form.can_submit(catalog);
        let status_line = match form.phase() {
            SubmissionPhase::Submitting => Self::SENDING_PROMPT.to_string(),
            _ if checklist.is_complete() => Self::READY_PROMPT.to_string(),
            _ => checklist.to_string(),
        };

        Self {
            assessment_id: form.id(),
            phase: form.phase(),
            responses: form
                .responses()
                .iter()
                .map(|(ResponseKey { dimension, question }, rating)| RecordedResponse {
                    dimension_index: dimension,
                    question_index: question,
                    rating: rating.value(),
                })
                .collect(),
            reflection: form.reflection().to_string(),
            email: form.email().to_string(),
            consent: form.consent(),
            checklist,
            can_submit,
            status_line,
            created_at: *form.created_at(),
            updated_at: *form.updated_at(),
        }
    }
}

/// One row of the score breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimensionBreakdown {
    pub name: String,
    pub score: u32,
    pub max_score: u32,
    pub percentage: Percentage,
}

/// Results dashboard, recomputed from the submitted answers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsView {
    pub assessment_id: AssessmentId,
    pub submitted_at: Timestamp,
    pub total_score: u32,
    pub max_total_score: u32,
    pub readiness_level: String,
    pub readiness_description: String,
    pub dimensions: Vec<DimensionBreakdown>,
    pub weakest_area: DimensionBreakdown,
    pub next_step: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub opportunities: Vec<String>,
    pub threats: Vec<String>,
    pub chart: RadarChart,
}

impl ResultsView {
    pub fn new(
        assessment_id: AssessmentId,
        submitted_at: Timestamp,
        result: AssessmentResult,
        catalog: &SurveyCatalog,
    ) -> Self {
        let breakdown = |d: &crate::domain::scoring::DimensionScore| DimensionBreakdown {
            name: d.name.clone(),
            score: d.score,
            max_score: d.max_score,
            percentage: d.percentage(),
        };

        let data: Vec<ChartDatum> = result.dimension_scores.iter().map(ChartDatum::from).collect();
        let next_step = ScoringEngine::next_step_advice(&result.weakest_area.name, catalog.advice());

        Self {
            assessment_id,
            submitted_at,
            total_score: result.total_score,
            max_total_score: catalog.max_total_score(),
            readiness_level: result.readiness_level.label().to_string(),
            readiness_description: result.readiness_level.description().to_string(),
            dimensions: result.dimension_scores.iter().map(breakdown).collect(),
            weakest_area: breakdown(&result.weakest_area),
            next_step,
            strengths: result.swot.strengths,
            weaknesses: result.swot.weaknesses,
            opportunities: result.swot.opportunities,
            threats: result.swot.threats,
            chart: chart::layout(&data),
        }
    }
}
