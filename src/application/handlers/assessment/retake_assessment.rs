//! RetakeAssessmentHandler - Command handler for starting over.

use std::sync::Arc;

use super::support::load_form;
use super::AssessmentStatusView;
use crate::domain::assessment::AssessmentError;
use crate::domain::foundation::AssessmentId;
use crate::domain::survey::SurveyCatalog;
use crate::ports::AssessmentStore;

/// Command to clear a form and return it to editing.
#[derive(Debug, Clone)]
pub struct RetakeAssessmentCommand {
    pub assessment_id: AssessmentId,
}

pub struct RetakeAssessmentHandler {
    store: Arc<dyn AssessmentStore>,
    catalog: Arc<SurveyCatalog>,
}

impl RetakeAssessmentHandler {
    pub fn new(store: Arc<dyn AssessmentStore>, catalog: Arc<SurveyCatalog>) -> Self {
        Self { store, catalog }
    }

    pub async fn handle(
        &self,
        cmd: RetakeAssessmentCommand,
    ) -> Result<AssessmentStatusView, AssessmentError> {
        let handle = load_form(self.store.as_ref(), cmd.assessment_id).await?;
        let mut form = handle.lock().await;
        form.retake()?;

        tracing::info!(assessment_id = %cmd.assessment_id, "Assessment reset for retake");
        Ok(AssessmentStatusView::from_form(&form, &self.catalog))
    }
}
