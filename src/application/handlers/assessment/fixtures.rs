//! Shared setup for handler tests.

use std::sync::Arc;

use crate::adapters::memory::InMemoryAssessmentStore;
use crate::domain::assessment::AssessmentForm;
use crate::domain::foundation::{AssessmentId, Rating};
use crate::domain::survey::{ResponseKey, SurveyCatalog};
use crate::ports::{AssessmentStore, SharedForm};

pub const EMAIL: &str = "someone@example.com";

pub fn setup() -> (Arc<InMemoryAssessmentStore>, Arc<SurveyCatalog>) {
    (
        Arc::new(InMemoryAssessmentStore::new()),
        Arc::new(SurveyCatalog::standard().clone()),
    )
}

pub async fn new_form(store: &InMemoryAssessmentStore) -> AssessmentId {
    let id = AssessmentId::new();
    store.insert(AssessmentForm::new(id)).await.unwrap();
    id
}

pub async fn form(store: &InMemoryAssessmentStore, id: AssessmentId) -> SharedForm {
    store.get(&id).await.unwrap().unwrap()
}

/// Inserts a form that satisfies the submission gate, every answer `rating`.
pub async fn ready_form(
    store: &InMemoryAssessmentStore,
    catalog: &SurveyCatalog,
    rating: Rating,
) -> AssessmentId {
    let id = new_form(store).await;
    let handle = form(store, id).await;
    let mut form = handle.lock().await;
    for (d, dimension) in catalog.dimensions().iter().enumerate() {
        for q in 0..dimension.questions.len() {
            form.record_rating(catalog, ResponseKey::new(d, q), rating)
                .unwrap();
        }
    }
    form.set_reflection("Consistent in the mornings, less so later.")
        .unwrap();
    form.set_contact(EMAIL, true).unwrap();
    id
}
