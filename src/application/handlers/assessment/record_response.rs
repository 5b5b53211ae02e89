//! RecordResponseHandler - Command handler for rating one statement.

use std::sync::Arc;

use super::support::load_form;
use super::AssessmentStatusView;
use crate::domain::assessment::AssessmentError;
use crate::domain::foundation::{AssessmentId, Rating};
use crate::domain::survey::{ResponseKey, SurveyCatalog};
use crate::ports::AssessmentStore;

/// Command to record a rating.
#[derive(Debug, Clone)]
pub struct RecordResponseCommand {
    pub assessment_id: AssessmentId,
    pub dimension_index: usize,
    pub question_index: usize,
    pub rating: u8,
}

/// Result of recording a rating.
#[derive(Debug, Clone)]
pub struct RecordResponseResult {
    /// Rating this one replaced, if any.
    pub previous: Option<Rating>,
    pub status: AssessmentStatusView,
}

/// Handler for recording ratings.
pub struct RecordResponseHandler {
    store: Arc<dyn AssessmentStore>,
    catalog: Arc<SurveyCatalog>,
}

impl RecordResponseHandler {
    pub fn new(store: Arc<dyn AssessmentStore>, catalog: Arc<SurveyCatalog>) -> Self {
        Self { store, catalog }
    }

    pub async fn handle(
        &self,
        cmd: RecordResponseCommand,
    ) -> Result<RecordResponseResult, AssessmentError> {
        // 1. Validate rating before touching the form
        let rating = Rating::try_from_u8(cmd.rating)?;
        let key = ResponseKey::new(cmd.dimension_index, cmd.question_index);

        // 2. Load and mutate under the form lock
        let handle = load_form(self.store.as_ref(), cmd.assessment_id).await?;
        let mut form = handle.lock().await;
        let previous = form.record_rating(&self.catalog, key, rating)?;

        tracing::debug!(
            assessment_id = %cmd.assessment_id,
            response = %key,
            rating = rating.value(),
            "Response recorded"
        );

        Ok(RecordResponseResult {
            previous,
            status: AssessmentStatusView::from_form(&form, &self.catalog),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::assessment::fixtures;

    fn cmd(id: AssessmentId, d: usize, q: usize, rating: u8) -> RecordResponseCommand {
        RecordResponseCommand {
            assessment_id: id,
            dimension_index: d,
            question_index: q,
            rating,
        }
    }

    #[tokio::test]
    async fn records_and_overwrites_rating() {
        let (store, catalog) = fixtures::setup();
        let id = fixtures::new_form(&store).await;
        let handler = RecordResponseHandler::new(store, catalog);

        let first = handler.handle(cmd(id, 2, 4, 3)).await.unwrap();
        assert_eq!(first.previous, None);
        assert_eq!(first.status.checklist.answered, 1);

        let second = handler.handle(cmd(id, 2, 4, 5)).await.unwrap();
        assert_eq!(second.previous, Some(Rating::Sometimes));
        assert_eq!(second.status.checklist.answered, 1);
        assert_eq!(second.status.responses[0].rating, 5);
    }

    #[tokio::test]
    async fn rejects_rating_outside_scale() {
        let (store, catalog) = fixtures::setup();
        let id = fixtures::new_form(&store).await;
        let handler = RecordResponseHandler::new(store, catalog);

        for rating in [0, 6] {
            let err = handler.handle(cmd(id, 0, 0, rating)).await.unwrap_err();
            assert!(matches!(err, AssessmentError::ValidationFailed { ref field, .. } if field == "rating"));
        }
    }

    #[tokio::test]
    async fn rejects_unknown_statement() {
        let (store, catalog) = fixtures::setup();
        let id = fixtures::new_form(&store).await;
        let handler = RecordResponseHandler::new(store, catalog);

        let err = handler.handle(cmd(id, 0, 7, 3)).await.unwrap_err();
        assert!(matches!(err, AssessmentError::ValidationFailed { .. }));
    }

    #[tokio::test]
    async fn unknown_assessment_is_not_found() {
        let (store, catalog) = fixtures::setup();
        let handler = RecordResponseHandler::new(store, catalog);
        let id = AssessmentId::new();

        let err = handler.handle(cmd(id, 0, 0, 3)).await.unwrap_err();
        assert_eq!(err, AssessmentError::NotFound(id));
    }
}
