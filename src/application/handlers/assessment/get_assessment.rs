//! GetAssessmentHandler - Query handler for form status and checklist.

use std::sync::Arc;

use super::support::load_form;
use super::AssessmentStatusView;
use crate::domain::assessment::AssessmentError;
use crate::domain::foundation::AssessmentId;
use crate::domain::survey::SurveyCatalog;
use crate::ports::AssessmentStore;

/// Query for one form.
#[derive(Debug, Clone)]
pub struct GetAssessmentQuery {
    pub assessment_id: AssessmentId,
}

pub struct GetAssessmentHandler {
    store: Arc<dyn AssessmentStore>,
    catalog: Arc<SurveyCatalog>,
}

impl GetAssessmentHandler {
    pub fn new(store: Arc<dyn AssessmentStore>, catalog: Arc<SurveyCatalog>) -> Self {
        Self { store, catalog }
    }

    pub async fn handle(
        &self,
        query: GetAssessmentQuery,
    ) -> Result<AssessmentStatusView, AssessmentError> {
        let handle = load_form(self.store.as_ref(), query.assessment_id).await?;
        let form = handle.lock().await;
        Ok(AssessmentStatusView::from_form(&form, &self.catalog))
    }
}
