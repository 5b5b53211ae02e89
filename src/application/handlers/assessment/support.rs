use crate::domain::assessment::AssessmentError;
use crate::domain::foundation::AssessmentId;
use crate::ports::{AssessmentStore, SharedForm};

/// Finds a form handle or fails with `NotFound`.
pub(super) async fn load_form(
    store: &dyn AssessmentStore,
    id: AssessmentId,
) -> Result<SharedForm, AssessmentError> {
    store
        .get(&id)
        .await?
        .ok_or_else(|| AssessmentError::not_found(id))
}
