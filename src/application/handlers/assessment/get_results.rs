//! GetResultsHandler - Query handler for the results dashboard.

use std::sync::Arc;

use super::support::load_form;
use super::ResultsView;
use crate::domain::assessment::{AssessmentError, SubmissionPhase};
use crate::domain::foundation::AssessmentId;
use crate::domain::survey::SurveyCatalog;
use crate::ports::AssessmentStore;

/// Query for the results of a submitted form.
#[derive(Debug, Clone)]
pub struct GetResultsQuery {
    pub assessment_id: AssessmentId,
}

pub struct GetResultsHandler {
    store: Arc<dyn AssessmentStore>,
    catalog: Arc<SurveyCatalog>,
}

impl GetResultsHandler {
    pub fn new(store: Arc<dyn AssessmentStore>, catalog: Arc<SurveyCatalog>) -> Self {
        Self { store, catalog }
    }

    /// Recomputes scores, SWOT and chart from the submitted answers.
    pub async fn handle(&self, query: GetResultsQuery) -> Result<ResultsView, AssessmentError> {
        let handle = load_form(self.store.as_ref(), query.assessment_id).await?;
        let form = handle.lock().await;

        let submitted_at = match form.phase() {
            SubmissionPhase::Submitted { at } => at,
            _ => return Err(AssessmentError::NotSubmitted),
        };
        let result = form.results(&self.catalog)?;

        Ok(ResultsView::new(
            query.assessment_id,
            submitted_at,
            result,
            &self.catalog,
        ))
    }
}
