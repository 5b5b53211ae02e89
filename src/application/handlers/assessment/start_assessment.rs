//! StartAssessmentHandler - Command handler for opening a new form.

use std::sync::Arc;

use super::AssessmentStatusView;
use crate::domain::assessment::{AssessmentError, AssessmentForm};
use crate::domain::foundation::AssessmentId;
use crate::domain::survey::SurveyCatalog;
use crate::ports::AssessmentStore;

/// Handler for starting assessments.
pub struct StartAssessmentHandler {
    store: Arc<dyn AssessmentStore>,
    catalog: Arc<SurveyCatalog>,
}

impl StartAssessmentHandler {
    pub fn new(store: Arc<dyn AssessmentStore>, catalog: Arc<SurveyCatalog>) -> Self {
        Self { store, catalog }
    }

    pub async fn handle(&self) -> Result<AssessmentStatusView, AssessmentError> {
        let form = AssessmentForm::new(AssessmentId::new());
        let view = AssessmentStatusView::from_form(&form, &self.catalog);
        self.store.insert(form).await?;

        tracing::info!(assessment_id = %view.assessment_id, "Assessment started");
        Ok(view)
    }
}
