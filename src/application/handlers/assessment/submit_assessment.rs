//! SubmitAssessmentHandler - Command handler for sending results.
//!
//! The form is moved to `Submitting` under its lock, the lock is released,
//! and only then is the mailer called. A second submit arriving meanwhile
//! sees `Submitting` and is rejected. Any failure puts the form back to
//! `Editing` with every answer kept.
//!
//! Delivery and settling run on their own task. If the caller goes away
//! mid-send (client disconnect, request timeout) the task still finishes
//! and the form never stays in `Submitting`.

use std::sync::Arc;

use super::support::load_form;
use super::ResultsView;
use crate::domain::assessment::{AssessmentError, SubmissionSnapshot};
use crate::domain::foundation::{AssessmentId, Timestamp};
use crate::domain::report::{ReportContext, ReportFormatter};
use crate::domain::scoring::{AssessmentResult, ScoringEngine};
use crate::domain::survey::SurveyCatalog;
use crate::ports::{AssessmentStore, ResultEmail, ResultMailer, SharedForm};

/// Command to submit a completed form.
#[derive(Debug, Clone)]
pub struct SubmitAssessmentCommand {
    pub assessment_id: AssessmentId,
}

/// Handler for submitting assessments.
pub struct SubmitAssessmentHandler {
    store: Arc<dyn AssessmentStore>,
    dispatch: Dispatch,
}

/// Everything the delivery task needs, owned so it can outlive the request.
#[derive(Clone)]
struct Dispatch {
    mailer: Arc<dyn ResultMailer>,
    catalog: Arc<SurveyCatalog>,
    copy_to: String,
}

impl SubmitAssessmentHandler {
    pub fn new(
        store: Arc<dyn AssessmentStore>,
        mailer: Arc<dyn ResultMailer>,
        catalog: Arc<SurveyCatalog>,
        copy_to: impl Into<String>,
    ) -> Self {
        Self {
            store,
            dispatch: Dispatch {
                mailer,
                catalog,
                copy_to: copy_to.into(),
            },
        }
    }

    pub async fn handle(&self, cmd: SubmitAssessmentCommand) -> Result<ResultsView, AssessmentError> {
        let handle = load_form(self.store.as_ref(), cmd.assessment_id).await?;

        // 1. Gate and freeze under the lock
        let snapshot = handle.lock().await.begin_submission(&self.dispatch.catalog)?;
        tracing::info!(assessment_id = %cmd.assessment_id, "Submitting assessment");

        // 2. Deliver and settle on a detached task
        let task = tokio::spawn(self.dispatch.clone().run(Arc::clone(&handle), snapshot));

        match task.await {
            Ok(outcome) => outcome,
            Err(join_error) => {
                handle.lock().await.submission_failed();
                tracing::error!(
                    assessment_id = %cmd.assessment_id,
                    error = %join_error,
                    "Submission task did not complete, form returned to editing"
                );
                Err(AssessmentError::Infrastructure(format!(
                    "submission task failed: {}",
                    join_error
                )))
            }
        }
    }
}

impl Dispatch {
    async fn run(
        self,
        handle: SharedForm,
        snapshot: SubmissionSnapshot,
    ) -> Result<ResultsView, AssessmentError> {
        let assessment_id = snapshot.id;

        // Score and deliver without holding the lock
        let completed_at = Timestamp::now();
        let outcome = self.deliver(&snapshot, &completed_at).await;

        // Settle the phase
        let mut form = handle.lock().await;
        match outcome {
            Ok(result) => {
                form.submission_succeeded(completed_at)?;
                tracing::info!(
                    assessment_id = %assessment_id,
                    total_score = result.total_score,
                    readiness_level = %result.readiness_level,
                    "Assessment submitted"
                );
                Ok(ResultsView::new(
                    assessment_id,
                    completed_at,
                    result,
                    &self.catalog,
                ))
            }
            Err(err) => {
                form.submission_failed();
                tracing::warn!(
                    assessment_id = %assessment_id,
                    error = %err,
                    "Submission failed, form returned to editing"
                );
                Err(err)
            }
        }
    }

    async fn deliver(
        &self,
        snapshot: &SubmissionSnapshot,
        completed_at: &Timestamp,
    ) -> Result<AssessmentResult, AssessmentError> {
        let result = ScoringEngine::score(&snapshot.responses, &self.catalog)?;

        let email = ResultEmail {
            to_email: snapshot.email.clone(),
            copy_to: self.copy_to.clone(),
            results_content: ReportFormatter::render(
                &result,
                ReportContext {
                    email: &snapshot.email,
                    reflection: &snapshot.reflection,
                    completed_at,
                },
            ),
            total_score: result.total_score,
            readiness_level: result.readiness_level.label().to_string(),
        };

        self.mailer
            .ensure_ready()
            .await
            .map_err(|e| AssessmentError::mailer_unavailable(e.to_string()))?;

        self.mailer.send(email).await.map_err(|e| {
            if e.is_unavailable() {
                AssessmentError::mailer_unavailable(e.to_string())
            } else {
                AssessmentError::delivery_failed(e.to_string())
            }
        })?;

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::adapters::email::MockResultMailer;
    use crate::application::handlers::assessment::fixtures;
    use crate::domain::assessment::SubmissionPhase;
    use crate::domain::foundation::Rating;
    use crate::ports::MailerError;

    const COPY_TO: &str = "copy@example.com";

    fn handler(
        store: Arc<crate::adapters::memory::InMemoryAssessmentStore>,
        catalog: Arc<SurveyCatalog>,
        mailer: &MockResultMailer,
    ) -> SubmitAssessmentHandler {
        SubmitAssessmentHandler::new(store, Arc::new(mailer.clone()), catalog, COPY_TO)
    }

    #[tokio::test]
    async fn successful_submit_sends_report_and_freezes_form() {
        let (store, catalog) = fixtures::setup();
        let id = fixtures::ready_form(&store, &catalog, Rating::Sometimes).await;
        let mailer = MockResultMailer::new();
        let handler = handler(store.clone(), catalog, &mailer);

        let view = handler
            .handle(SubmitAssessmentCommand { assessment_id: id })
            .await
            .unwrap();

        assert_eq!(view.total_score, 90);
        assert_eq!(view.readiness_level, "Developing Awareness");
        assert_eq!(mailer.calls(), vec!["ensure_ready", "send"]);

        let sent = mailer.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to_email, fixtures::EMAIL);
        assert_eq!(sent[0].copy_to, COPY_TO);
        assert_eq!(sent[0].total_score, 90);
        assert!(sent[0].results_content.contains("Total Score: 90/150"));

        let form = fixtures::form(&store, id).await;
        assert!(form.lock().await.phase().is_submitted());
    }

    #[tokio::test]
    async fn incomplete_form_is_rejected_without_sending() {
        let (store, catalog) = fixtures::setup();
        let id = fixtures::new_form(&store).await;
        let mailer = MockResultMailer::new();
        let handler = handler(store, catalog, &mailer);

        let err = handler
            .handle(SubmitAssessmentCommand { assessment_id: id })
            .await
            .unwrap_err();

        assert!(matches!(err, AssessmentError::Incomplete(c) if c.answered == 0));
        assert!(mailer.calls().is_empty());
    }

    #[tokio::test]
    async fn mailer_init_failure_is_unavailable_and_keeps_answers() {
        let (store, catalog) = fixtures::setup();
        let id = fixtures::ready_form(&store, &catalog, Rating::Often).await;
        let mailer = MockResultMailer::unavailable();
        let handler = handler(store.clone(), catalog, &mailer);

        let err = handler
            .handle(SubmitAssessmentCommand { assessment_id: id })
            .await
            .unwrap_err();

        assert!(matches!(err, AssessmentError::MailerUnavailable(_)));
        assert_eq!(mailer.call_count("send"), 0);

        let form = fixtures::form(&store, id).await;
        let form = form.lock().await;
        assert_eq!(form.phase(), SubmissionPhase::Editing);
        assert_eq!(form.responses().len(), 30);
        assert_eq!(form.email(), fixtures::EMAIL);
    }

    #[tokio::test]
    async fn send_failure_is_delivery_failure_and_allows_retry() {
        let (store, catalog) = fixtures::setup();
        let id = fixtures::ready_form(&store, &catalog, Rating::Often).await;
        let mailer = MockResultMailer::new();
        mailer.set_method_error("send", MailerError::Timeout);
        let handler = handler(store.clone(), catalog, &mailer);

        let err = handler
            .handle(SubmitAssessmentCommand { assessment_id: id })
            .await
            .unwrap_err();
        assert!(matches!(err, AssessmentError::DeliveryFailed(_)));
        assert!(fixtures::form(&store, id).await.lock().await.phase().is_editing());

        mailer.clear_errors();
        let view = handler
            .handle(SubmitAssessmentCommand { assessment_id: id })
            .await
            .unwrap();
        assert_eq!(view.total_score, 120);
        assert_eq!(mailer.sent().len(), 1);
    }

    #[tokio::test]
    async fn duplicate_submit_while_sending_is_rejected() {
        let (store, catalog) = fixtures::setup();
        let id = fixtures::ready_form(&store, &catalog, Rating::Always).await;
        let mailer = MockResultMailer::new();
        mailer.set_send_delay(Duration::from_millis(200));
        let handler = Arc::new(handler(store.clone(), catalog, &mailer));

        let first = {
            let handler = Arc::clone(&handler);
            tokio::spawn(async move {
                handler
                    .handle(SubmitAssessmentCommand { assessment_id: id })
                    .await
            })
        };

        // Wait until the first submission holds the Submitting phase.
        while fixtures::form(&store, id).await.lock().await.phase() != SubmissionPhase::Submitting {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        let second = handler
            .handle(SubmitAssessmentCommand { assessment_id: id })
            .await;
        assert_eq!(second.unwrap_err(), AssessmentError::AlreadySubmitting);

        let first = first.await.unwrap().unwrap();
        assert_eq!(first.total_score, 150);
        assert_eq!(mailer.sent().len(), 1);
    }

    #[tokio::test]
    async fn submitted_form_cannot_be_resubmitted() {
        let (store, catalog) = fixtures::setup();
        let id = fixtures::ready_form(&store, &catalog, Rating::Never).await;
        let mailer = MockResultMailer::new();
        let handler = handler(store, catalog, &mailer);

        handler
            .handle(SubmitAssessmentCommand { assessment_id: id })
            .await
            .unwrap();
        let err = handler
            .handle(SubmitAssessmentCommand { assessment_id: id })
            .await
            .unwrap_err();

        assert_eq!(err, AssessmentError::AlreadySubmitted);
        assert_eq!(mailer.sent().len(), 1);
    }

    #[tokio::test]
    async fn abandoned_submit_still_settles_the_form() {
        let (store, catalog) = fixtures::setup();
        let id = fixtures::ready_form(&store, &catalog, Rating::Often).await;
        let mailer = MockResultMailer::new();
        mailer.set_send_delay(Duration::from_millis(200));
        let handler = handler(store.clone(), catalog, &mailer);

        let abandoned = tokio::time::timeout(
            Duration::from_millis(20),
            handler.handle(SubmitAssessmentCommand { assessment_id: id }),
        )
        .await;
        assert!(abandoned.is_err());

        tokio::time::sleep(Duration::from_millis(400)).await;

        assert!(fixtures::form(&store, id).await.lock().await.phase().is_submitted());
        assert_eq!(mailer.sent().len(), 1);
    }

    #[tokio::test]
    async fn abandoned_failing_submit_returns_to_editing() {
        let (store, catalog) = fixtures::setup();
        let id = fixtures::ready_form(&store, &catalog, Rating::Often).await;
        let mailer = MockResultMailer::new();
        mailer.set_send_delay(Duration::from_millis(200));
        mailer.set_method_error("send", MailerError::Timeout);
        let handler = handler(store.clone(), catalog, &mailer);

        let abandoned = tokio::time::timeout(
            Duration::from_millis(20),
            handler.handle(SubmitAssessmentCommand { assessment_id: id }),
        )
        .await;
        assert!(abandoned.is_err());

        tokio::time::sleep(Duration::from_millis(400)).await;

        assert!(fixtures::form(&store, id).await.lock().await.phase().is_editing());

        mailer.clear_errors();
        let view = handler
            .handle(SubmitAssessmentCommand { assessment_id: id })
            .await
            .unwrap();
        assert_eq!(view.total_score, 120);
    }
}
