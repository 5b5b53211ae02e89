//! UpdateContactHandler - Command handler for email address and consent.

use std::sync::Arc;

use super::support::load_form;
use super::AssessmentStatusView;
use crate::domain::assessment::AssessmentError;
use crate::domain::foundation::AssessmentId;
use crate::domain::survey::SurveyCatalog;
use crate::ports::AssessmentStore;

/// Command to replace the contact details.
#[derive(Debug, Clone)]
pub struct UpdateContactCommand {
    pub assessment_id: AssessmentId,
    pub email: String,
    pub consent: bool,
}

/// Handler for updating contact details.
pub struct UpdateContactHandler {
    store: Arc<dyn AssessmentStore>,
    catalog: Arc<SurveyCatalog>,
}

impl UpdateContactHandler {
    pub fn new(store: Arc<dyn AssessmentStore>, catalog: Arc<SurveyCatalog>) -> Self {
        Self { store, catalog }
    }

    pub async fn handle(
        &self,
        cmd: UpdateContactCommand,
    ) -> Result<AssessmentStatusView, AssessmentError> {
        let handle = load_form(self.store.as_ref(), cmd.assessment_id).await?;
        let mut form = handle.lock().await;
        form.set_contact(cmd.email, cmd.consent)?;
        Ok(AssessmentStatusView::from_form(&form, &self.catalog))
    }
}
