//! UpdateReflectionHandler - Command handler for the consistency reflection.

use std::sync::Arc;

use super::support::load_form;
use super::AssessmentStatusView;
use crate::domain::assessment::AssessmentError;
use crate::domain::foundation::AssessmentId;
use crate::domain::survey::SurveyCatalog;
use crate::ports::AssessmentStore;

/// Command to replace the reflection text.
#[derive(Debug, Clone)]
pub struct UpdateReflectionCommand {
    pub assessment_id: AssessmentId,
    pub text: String,
}

/// Handler for updating the reflection.
pub struct UpdateReflectionHandler {
    store: Arc<dyn AssessmentStore>,
    catalog: Arc<SurveyCatalog>,
}

impl UpdateReflectionHandler {
    pub fn new(store: Arc<dyn AssessmentStore>, catalog: Arc<SurveyCatalog>) -> Self {
        Self { store, catalog }
    }

    pub async fn handle(
        &self,
        cmd: UpdateReflectionCommand,
    ) -> Result<AssessmentStatusView, AssessmentError> {
        let handle = load_form(self.store.as_ref(), cmd.assessment_id).await?;
        let mut form = handle.lock().await;
        form.set_reflection(cmd.text)?;
        Ok(AssessmentStatusView::from_form(&form, &self.catalog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::assessment::fixtures;

    #[tokio::test]
    async fn stores_reflection_verbatim() {
        let (store, catalog) = fixtures::setup();
        let id = fixtures::new_form(&store).await;
        let handler = UpdateReflectionHandler::new(store, catalog);

        let view = handler
            .handle(UpdateReflectionCommand {
                assessment_id: id,
                text: "  Mornings, yes.\nEvenings, no.  ".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(view.reflection, "  Mornings, yes.\nEvenings, no.  ");
        assert!(view.checklist.has_reflection);
    }

    #[tokio::test]
    async fn whitespace_only_does_not_count() {
        let (store, catalog) = fixtures::setup();
        let id = fixtures::new_form(&store).await;
        let handler = UpdateReflectionHandler::new(store, catalog);

        let view = handler
            .handle(UpdateReflectionCommand {
                assessment_id: id,
                text: " \t\n ".to_string(),
            })
            .await
            .unwrap();

        assert!(!view.checklist.has_reflection);
        assert!(view.status_line.contains("✗ reflection"));
    }
}
