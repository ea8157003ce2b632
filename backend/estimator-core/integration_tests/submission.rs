//! End-to-end submission tests against a mock prediction server.

use crate::helpers::{expected_body, filled_fields, pipeline_for};

use estimator_core::error::{CoreError, FormError};
use estimator_core::submission::{
    DisplayTone, PRICE_MISSING_MESSAGE, REQUEST_FAILED_MESSAGE, SubmissionOutcome,
    SubmissionPhase,
};

use common::Price;

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEST_REVERT_DELAY: Duration = Duration::from_millis(100);

/// **VALUE**: Verifies a valid form triggers exactly one POST with the
/// documented body, and the returned price is rendered.
///
/// **WHY THIS MATTERS**: The wire contract is the whole point of the
/// pipeline: exact keys, coerced types, JSON content type, one request
/// per submission. `{"price": 12345}` must end up on screen as `$12,345`.
///
/// **BUG THIS CATCHES**: Would catch key drift in the serialized body, a
/// duplicated request, a missing content-type header, or broken price
/// rendering.
#[tokio::test]
async fn given_valid_form_when_submitted_then_posts_documented_body_once_and_renders_price() {
    // GIVEN: A server expecting exactly one schema-conformant POST
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/predict"))
        .and(header("content-type", "application/json"))
        .and(body_json(expected_body()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"price": 12345})))
        .expect(1)
        .mount(&server)
        .await;

    let pipeline = pipeline_for(&server.uri(), TEST_REVERT_DELAY);

    // WHEN: Submitting the filled form
    let outcome = pipeline
        .submit(&filled_fields())
        .await
        .expect("submission runs");

    // THEN: Price rendered, submit re-enabled
    assert_eq!(outcome, SubmissionOutcome::Priced(Price(12345.0)));
    assert_eq!(pipeline.phase().await, SubmissionPhase::Success);

    let display = pipeline.display();
    let display = display.read().await;
    assert!(display.visible);
    assert!(!display.loading);
    assert!(display.result_shown);
    assert_eq!(display.text, "$12,345");
    assert_eq!(display.tone, DisplayTone::Price);
    assert!(display.submit_enabled);
}

/// **VALUE**: Verifies a well-formed response without a price renders the
/// calculation-error message and never schedules a tone revert.
///
/// **WHY THIS MATTERS**: "Response arrived but carried no usable price"
/// is its own failure class: its message differs from the transport one
/// and the cosmetic revert does not apply to it.
///
/// **BUG THIS CATCHES**: Would catch the two failure classes collapsing
/// into one, or the revert timer firing for the wrong class.
#[tokio::test]
async fn given_response_without_price_when_submitted_then_renders_calculation_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let pipeline = pipeline_for(&server.uri(), TEST_REVERT_DELAY);

    let outcome = pipeline
        .submit(&filled_fields())
        .await
        .expect("submission runs");

    assert_eq!(outcome, SubmissionOutcome::Failed);
    assert_eq!(pipeline.phase().await, SubmissionPhase::Failure);
    {
        let display = pipeline.display();
        let display = display.read().await;
        assert_eq!(display.text, PRICE_MISSING_MESSAGE);
        assert_eq!(display.tone, DisplayTone::Error);
        assert!(display.submit_enabled);
    }

    // No revert for this class: tone must still be Error past the delay.
    tokio::time::sleep(TEST_REVERT_DELAY * 3).await;
    let display = pipeline.display();
    let display = display.read().await;
    assert_eq!(display.tone, DisplayTone::Error);
}

/// **VALUE**: Verifies transport failures render the fixed error text and
/// the tone reverts after the delay.
///
/// **WHY THIS MATTERS**: Non-success statuses collapse to one
/// user-visible message, and the cosmetic revert must happen without
/// delaying submit re-enablement.
///
/// **BUG THIS CATCHES**: Would catch the revert never firing, or submit
/// staying locked for the revert duration.
#[tokio::test]
async fn given_server_error_when_submitted_then_renders_transport_error_and_reverts_tone() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/predict"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let pipeline = pipeline_for(&server.uri(), TEST_REVERT_DELAY);

    let outcome = pipeline
        .submit(&filled_fields())
        .await
        .expect("submission runs");
    assert_eq!(outcome, SubmissionOutcome::Failed);

    // Submit is re-enabled immediately, while the tone is still Error.
    {
        let display = pipeline.display();
        let display = display.read().await;
        assert_eq!(display.text, REQUEST_FAILED_MESSAGE);
        assert_eq!(display.tone, DisplayTone::Error);
        assert!(display.submit_enabled);
        assert!(!display.loading);
    }

    tokio::time::sleep(TEST_REVERT_DELAY * 3).await;
    let display = pipeline.display();
    let display = display.read().await;
    assert_eq!(display.tone, DisplayTone::Price);
    assert_eq!(display.text, REQUEST_FAILED_MESSAGE, "text is untouched");
}

/// **VALUE**: Regression test - a stale revert timer must not clobber a
/// superseding submission's result.
///
/// **WHY THIS MATTERS**: The original scheduled an unconditional 3 s
/// color reset; a second submission finishing inside that window had its
/// error tone wiped to the price tone. The cycle-id check exists exactly
/// to stop that.
///
/// **BUG THIS CATCHES**: Would catch the revert task losing its cycle-id
/// guard and firing across submission cycles.
#[tokio::test]
async fn given_superseding_submission_when_stale_revert_fires_then_it_is_a_noop() {
    let server = MockServer::start().await;
    // First request: transport failure (schedules the revert).
    Mock::given(method("POST"))
        .and(path("/api/predict"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    // Second request: well-formed body without a price (Error tone, no timer).
    Mock::given(method("POST"))
        .and(path("/api/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let pipeline = pipeline_for(&server.uri(), TEST_REVERT_DELAY);
    let fields = filled_fields();

    // GIVEN: A failed submission with a pending revert
    assert_eq!(
        pipeline.submit(&fields).await.expect("first submission"),
        SubmissionOutcome::Failed
    );

    // WHEN: A second submission supersedes it before the timer fires
    assert_eq!(
        pipeline.submit(&fields).await.expect("second submission"),
        SubmissionOutcome::Failed
    );
    {
        let display = pipeline.display();
        let display = display.read().await;
        assert_eq!(display.text, PRICE_MISSING_MESSAGE);
        assert_eq!(display.tone, DisplayTone::Error);
    }

    // THEN: The stale timer elapses without touching the newer result
    tokio::time::sleep(TEST_REVERT_DELAY * 3).await;
    let display = pipeline.display();
    let display = display.read().await;
    assert_eq!(display.tone, DisplayTone::Error, "stale revert must not fire");
    assert_eq!(display.text, PRICE_MISSING_MESSAGE);
}

/// **VALUE**: Verifies the in-flight guard blocks a second submit at the
/// state-machine level.
///
/// **WHY THIS MATTERS**: The original only disabled the button; a
/// programmatic double submit still went through. The guard must reject
/// the overlap itself, so exactly one POST leaves per cycle.
///
/// **BUG THIS CATCHES**: Would catch the guard checking display state
/// instead of the phase, or two requests racing out of one cycle.
#[tokio::test]
async fn given_submission_in_flight_when_second_submit_arrives_then_ignored() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/predict"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"price": 777}))
                .set_delay(Duration::from_millis(300)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let pipeline = pipeline_for(&server.uri(), TEST_REVERT_DELAY);
    let fields = filled_fields();

    // GIVEN: A submission in flight
    let first = {
        let pipeline = pipeline.clone();
        let fields = fields.clone();
        tokio::spawn(async move { pipeline.submit(&fields).await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(pipeline.phase().await, SubmissionPhase::Submitting);

    // WHEN: A second submit arrives
    let second = pipeline.submit(&fields).await.expect("second submit runs");

    // THEN: It is ignored; the first completes normally
    assert_eq!(second, SubmissionOutcome::Ignored);
    let first = first.await.expect("task joins").expect("first submission");
    assert_eq!(first, SubmissionOutcome::Priced(Price(777.0)));
}

/// With no turbo choice checked the pipeline fails fast: no request
/// leaves, the fixed error is rendered, and submit is re-enabled.
#[tokio::test]
async fn given_no_turbo_selection_when_submitted_then_fails_before_any_network_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"price": 1})))
        .expect(0)
        .mount(&server)
        .await;

    let pipeline = pipeline_for(&server.uri(), TEST_REVERT_DELAY);
    let mut fields = filled_fields();
    fields.turbo = None;

    let error = pipeline.submit(&fields).await.expect_err("must refuse");
    assert!(matches!(
        error,
        CoreError::Form(FormError::TurboNotSelected { .. })
    ));
    assert_eq!(pipeline.phase().await, SubmissionPhase::Failure);

    let display = pipeline.display();
    let display = display.read().await;
    assert_eq!(display.text, REQUEST_FAILED_MESSAGE);
    assert!(display.submit_enabled);
}

/// After any failure the form stays usable: the next submission runs and
/// can succeed.
#[tokio::test]
async fn given_failed_cycle_when_resubmitted_then_next_cycle_can_succeed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/predict"))
        .respond_with(ResponseTemplate::new(502))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"price": 8500.25})))
        .mount(&server)
        .await;

    let pipeline = pipeline_for(&server.uri(), TEST_REVERT_DELAY);
    let fields = filled_fields();

    assert_eq!(
        pipeline.submit(&fields).await.expect("first submission"),
        SubmissionOutcome::Failed
    );
    assert_eq!(
        pipeline.submit(&fields).await.expect("second submission"),
        SubmissionOutcome::Priced(Price(8500.25))
    );

    let display = pipeline.display();
    let display = display.read().await;
    assert_eq!(display.text, "$8,500.25");
    assert_eq!(display.tone, DisplayTone::Price);
}
