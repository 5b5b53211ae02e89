//! Integration tests for the assessment lifecycle.
//!
//! These tests drive the application handlers end to end against the
//! in-memory store and the mock mailer:
//! 1. A complete form is scored, emailed and shown as results
//! 2. Delivery failures keep every answer and allow a retry
//! 3. Concurrent submits are rejected while one is in flight
//! 4. A submit whose caller goes away still settles the form
//! 5. Retake clears the form for a fresh attempt

use std::sync::Arc;
use std::time::Duration;

use conscious_evolution::adapters::email::MockResultMailer;
use conscious_evolution::adapters::memory::InMemoryAssessmentStore;
use conscious_evolution::application::{
    GetAssessmentHandler, GetAssessmentQuery, GetResultsHandler, GetResultsQuery,
    RecordResponseCommand, RecordResponseHandler, RetakeAssessmentCommand,
    RetakeAssessmentHandler, StartAssessmentHandler, SubmitAssessmentCommand,
    SubmitAssessmentHandler, UpdateContactCommand, UpdateContactHandler,
    UpdateReflectionCommand, UpdateReflectionHandler,
};
use conscious_evolution::domain::assessment::{AssessmentError, SubmissionPhase};
use conscious_evolution::domain::foundation::AssessmentId;
use conscious_evolution::domain::survey::SurveyCatalog;
use conscious_evolution::ports::{AssessmentStore, MailerError, ResultMailer};

// =============================================================================
// Test Infrastructure
// =============================================================================

const RESPONDENT: &str = "respondent@example.com";
const COPY_TO: &str = "records@example.com";

struct TestApp {
    store: Arc<dyn AssessmentStore>,
    mailer: MockResultMailer,
    catalog: Arc<SurveyCatalog>,
}

impl TestApp {
    fn new() -> Self {
        Self {
            store: Arc::new(InMemoryAssessmentStore::new()),
            mailer: MockResultMailer::new(),
            catalog: Arc::new(SurveyCatalog::standard().clone()),
        }
    }

    async fn start(&self) -> AssessmentId {
        StartAssessmentHandler::new(self.store.clone(), self.catalog.clone())
            .handle()
            .await
            .expect("start assessment")
            .assessment_id
    }

    async fn answer_all(&self, id: AssessmentId, rating: u8) {
        let handler = RecordResponseHandler::new(self.store.clone(), self.catalog.clone());
        for (d, dimension) in self.catalog.dimensions().iter().enumerate() {
            for q in 0..dimension.questions.len() {
                handler
                    .handle(RecordResponseCommand {
                        assessment_id: id,
                        dimension_index: d,
                        question_index: q,
                        rating,
                    })
                    .await
                    .expect("record response");
            }
        }
    }

    async fn complete(&self, id: AssessmentId, rating: u8) {
        self.answer_all(id, rating).await;
        UpdateReflectionHandler::new(self.store.clone(), self.catalog.clone())
            .handle(UpdateReflectionCommand {
                assessment_id: id,
                text: "I am steady at work and scattered at home.".to_string(),
            })
            .await
            .expect("update reflection");
        UpdateContactHandler::new(self.store.clone(), self.catalog.clone())
            .handle(UpdateContactCommand {
                assessment_id: id,
                email: RESPONDENT.to_string(),
                consent: true,
            })
            .await
            .expect("update contact");
    }

    fn submitter(&self) -> SubmitAssessmentHandler {
        let mailer: Arc<dyn ResultMailer> = Arc::new(self.mailer.clone());
        SubmitAssessmentHandler::new(self.store.clone(), mailer, self.catalog.clone(), COPY_TO)
    }

    async fn submit(&self, id: AssessmentId) -> Result<(), AssessmentError> {
        self.submitter()
            .handle(SubmitAssessmentCommand { assessment_id: id })
            .await
            .map(|_| ())
    }

    async fn status(&self, id: AssessmentId) -> conscious_evolution::application::AssessmentStatusView {
        GetAssessmentHandler::new(self.store.clone(), self.catalog.clone())
            .handle(GetAssessmentQuery { assessment_id: id })
            .await
            .expect("get assessment")
    }
}

// =============================================================================
// Happy Path
// =============================================================================

#[tokio::test]
async fn completed_assessment_is_emailed_and_viewable() {
    let app = TestApp::new();
    let id = app.start().await;
    app.complete(id, 4).await;

    let results = app
        .submitter()
        .handle(SubmitAssessmentCommand { assessment_id: id })
        .await
        .unwrap();

    assert_eq!(results.total_score, 120);
    assert_eq!(results.max_total_score, 150);
    assert_eq!(results.readiness_level, "Conscious Navigator");
    assert_eq!(results.dimensions.len(), 6);
    assert_eq!(results.chart.vertices.len(), 6);

    let sent = app.mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to_email, RESPONDENT);
    assert_eq!(sent[0].copy_to, COPY_TO);
    assert_eq!(sent[0].total_score, 120);
    assert!(sent[0].results_content.contains("Total Score: 120/150"));
    assert!(sent[0]
        .results_content
        .contains("\"I am steady at work and scattered at home.\""));

    let stored = GetResultsHandler::new(app.store.clone(), app.catalog.clone())
        .handle(GetResultsQuery { assessment_id: id })
        .await
        .unwrap();
    assert_eq!(stored.total_score, 120);
    assert_eq!(stored.weakest_area.name, results.weakest_area.name);
}

#[tokio::test]
async fn results_are_hidden_until_submitted() {
    let app = TestApp::new();
    let id = app.start().await;
    app.complete(id, 3).await;

    let err = GetResultsHandler::new(app.store.clone(), app.catalog.clone())
        .handle(GetResultsQuery { assessment_id: id })
        .await
        .unwrap_err();

    assert_eq!(err, AssessmentError::NotSubmitted);
}

#[tokio::test]
async fn incomplete_form_is_not_sent() {
    let app = TestApp::new();
    let id = app.start().await;
    app.answer_all(id, 5).await;

    let err = app.submit(id).await.unwrap_err();

    match err {
        AssessmentError::Incomplete(checklist) => {
            assert_eq!(checklist.answered, 30);
            assert!(!checklist.has_reflection);
            assert!(!checklist.has_email);
        }
        other => panic!("unexpected {:?}", other),
    }
    assert!(app.mailer.calls().is_empty());
}

// =============================================================================
// Failure Handling
// =============================================================================

#[tokio::test]
async fn unavailable_mailer_keeps_answers() {
    let app = TestApp::new();
    app.mailer.set_method_error(
        "ensure_ready",
        MailerError::Initialization("bad key".to_string()),
    );
    let id = app.start().await;
    app.complete(id, 2).await;

    let err = app.submit(id).await.unwrap_err();

    assert!(matches!(err, AssessmentError::MailerUnavailable(_)));
    let status = app.status(id).await;
    assert_eq!(status.phase, SubmissionPhase::Editing);
    assert_eq!(status.responses.len(), 30);
    assert_eq!(status.email, RESPONDENT);
    assert!(status.can_submit);
}

#[tokio::test]
async fn failed_delivery_can_be_retried() {
    let app = TestApp::new();
    app.mailer.set_method_error("send", MailerError::Timeout);
    let id = app.start().await;
    app.complete(id, 4).await;

    let err = app.submit(id).await.unwrap_err();
    assert!(matches!(err, AssessmentError::DeliveryFailed(_)));
    assert!(app.mailer.sent().is_empty());

    app.mailer.clear_errors();
    app.submit(id).await.unwrap();

    assert_eq!(app.mailer.sent().len(), 1);
    assert_eq!(app.mailer.call_count("send"), 2);
    assert!(app.status(id).await.phase.is_submitted());
}

#[tokio::test]
async fn concurrent_submit_is_rejected_while_sending() {
    let app = TestApp::new();
    app.mailer.set_send_delay(Duration::from_millis(200));
    let id = app.start().await;
    app.complete(id, 4).await;

    let first = app.submitter();
    let in_flight = tokio::spawn(async move {
        first
            .handle(SubmitAssessmentCommand { assessment_id: id })
            .await
            .map(|_| ())
    });
    tokio::time::sleep(Duration::from_millis(50)).await;

    let second = app.submit(id).await;
    assert_eq!(second, Err(AssessmentError::AlreadySubmitting));

    in_flight.await.unwrap().unwrap();
    assert_eq!(app.mailer.sent().len(), 1);
    assert_eq!(app.submit(id).await, Err(AssessmentError::AlreadySubmitted));
}

#[tokio::test]
async fn dropped_submit_request_does_not_strand_the_form() {
    let app = TestApp::new();
    app.mailer.set_send_delay(Duration::from_millis(500));
    let id = app.start().await;
    app.complete(id, 4).await;

    let cut_off = tokio::time::timeout(Duration::from_millis(50), app.submit(id)).await;
    assert!(cut_off.is_err());
    tokio::time::sleep(Duration::from_millis(600)).await;

    assert!(app.status(id).await.phase.is_submitted());
    assert_eq!(app.mailer.sent().len(), 1);

    let status = RetakeAssessmentHandler::new(app.store.clone(), app.catalog.clone())
        .handle(RetakeAssessmentCommand { assessment_id: id })
        .await
        .unwrap();
    assert_eq!(status.phase, SubmissionPhase::Editing);
}

#[tokio::test]
async fn dropped_failing_submit_can_be_retried() {
    let app = TestApp::new();
    app.mailer.set_send_delay(Duration::from_millis(500));
    app.mailer.set_method_error("send", MailerError::Timeout);
    let id = app.start().await;
    app.complete(id, 4).await;

    let cut_off = tokio::time::timeout(Duration::from_millis(50), app.submit(id)).await;
    assert!(cut_off.is_err());
    tokio::time::sleep(Duration::from_millis(600)).await;

    assert_eq!(app.status(id).await.phase, SubmissionPhase::Editing);

    app.mailer.clear_errors();
    app.submit(id).await.unwrap();
    assert_eq!(app.mailer.sent().len(), 1);
}

// =============================================================================
// Retake
// =============================================================================

#[tokio::test]
async fn retake_clears_submitted_form() {
    let app = TestApp::new();
    let id = app.start().await;
    app.complete(id, 5).await;
    app.submit(id).await.unwrap();

    let status = RetakeAssessmentHandler::new(app.store.clone(), app.catalog.clone())
        .handle(RetakeAssessmentCommand { assessment_id: id })
        .await
        .unwrap();

    assert_eq!(status.phase, SubmissionPhase::Editing);
    assert!(status.responses.is_empty());
    assert!(status.reflection.is_empty());
    assert!(status.email.is_empty());
    assert!(!status.consent);
    assert!(!status.can_submit);

    app.complete(id, 1).await;
    app.submit(id).await.unwrap();
    let sent = app.mailer.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[1].total_score, 30);
}

#[tokio::test]
async fn unknown_assessment_is_not_found() {
    let app = TestApp::new();
    let missing = AssessmentId::new();

    let err = app.submit(missing).await.unwrap_err();

    assert_eq!(err, AssessmentError::NotFound(missing));
}
