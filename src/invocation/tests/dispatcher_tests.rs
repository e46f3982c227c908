//! Unit tests for request dispatch.
//!
//! The exactly-once contract is the point of most of these tests: for any
//! payload, at most one handler method runs, it runs at most once, and the
//! completion channel yields exactly one result.

use crate::invocation::adapters::json::JsonRequestParser;
use crate::invocation::domain::{
    Application, ApplicationId, HandlerResponse, IntentRequest, LaunchRequest, Locale, Request,
    RequestId, RequestType, Session, SessionEndedRequest, SessionId, Slot, StandardResponse, User,
    UserId,
};
use crate::invocation::ports::handler::{HandlerError, HandlerResult, RequestHandler};
use crate::invocation::ports::parser::{DecodedPayload, ParseError, ParseResult, RequestParser};
use crate::invocation::services::{DispatchError, DispatchOutcome, RequestDispatcher};
use crate::invocation::tests::fixtures::{
    intent_payload, launch_payload, session_ended_payload, to_bytes,
};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use mockall::mock;
use mockall::predicate::always;
use rstest::rstest;
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

// ============================================================================
// Test doubles
// ============================================================================

/// Records every invocation so tests can assert the exactly-once contract.
#[derive(Default)]
struct RecordingHandler {
    launch_calls: AtomicUsize,
    intent_calls: AtomicUsize,
    session_ended_calls: AtomicUsize,
    fail_with: Option<&'static str>,
    seen_request_id: Mutex<Option<String>>,
    seen_is_new: Mutex<Option<bool>>,
    seen_slot_value: Mutex<Option<String>>,
}

impl RecordingHandler {
    fn failing(message: &'static str) -> Self {
        Self {
            fail_with: Some(message),
            ..Self::default()
        }
    }

    fn call_counts(&self) -> (usize, usize, usize) {
        (
            self.launch_calls.load(Ordering::SeqCst),
            self.intent_calls.load(Ordering::SeqCst),
            self.session_ended_calls.load(Ordering::SeqCst),
        )
    }

    fn result(&self, session: &Session) -> HandlerResult<HandlerResponse> {
        match self.fail_with {
            Some(message) => Err(HandlerError::message(message)),
            None => Ok(HandlerResponse::new(
                StandardResponse::from_value(json!({"shouldEndSession": true})),
                session.attributes().clone(),
            )),
        }
    }
}

#[async_trait]
impl RequestHandler for RecordingHandler {
    async fn handle_launch(
        &self,
        request: LaunchRequest,
        session: Session,
    ) -> HandlerResult<HandlerResponse> {
        self.launch_calls.fetch_add(1, Ordering::SeqCst);
        *self.seen_request_id.lock().expect("lock should not poison") =
            Some(request.request().request_id().as_str().to_owned());
        *self.seen_is_new.lock().expect("lock should not poison") = Some(session.is_new());
        self.result(&session)
    }

    async fn handle_intent(
        &self,
        request: IntentRequest,
        session: Session,
    ) -> HandlerResult<HandlerResponse> {
        self.intent_calls.fetch_add(1, Ordering::SeqCst);
        *self.seen_slot_value.lock().expect("lock should not poison") = request
            .intent()
            .slot("ZodiacSign")
            .and_then(Slot::value)
            .map(ToOwned::to_owned);
        self.result(&session)
    }

    async fn handle_session_ended(
        &self,
        _request: SessionEndedRequest,
        _session: Session,
    ) -> HandlerResult<()> {
        self.session_ended_calls.fetch_add(1, Ordering::SeqCst);
        match self.fail_with {
            Some(message) => Err(HandlerError::message(message)),
            None => Ok(()),
        }
    }
}

mock! {
    Parser {}

    impl RequestParser for Parser {
        fn decode(&self, payload: &[u8]) -> ParseResult<DecodedPayload>;
        fn parse_request_type(&self, payload: &DecodedPayload) -> Option<RequestType>;
        fn parse_session(&self, payload: &DecodedPayload) -> Option<Session>;
        fn parse_launch_request(&self, payload: &DecodedPayload) -> Option<LaunchRequest>;
        fn parse_intent_request(&self, payload: &DecodedPayload) -> Option<IntentRequest>;
        fn parse_session_ended_request(&self, payload: &DecodedPayload) -> Option<SessionEndedRequest>;
    }
}

fn dispatcher(
    handler: &Arc<RecordingHandler>,
) -> RequestDispatcher<JsonRequestParser, RecordingHandler> {
    RequestDispatcher::new(Arc::new(JsonRequestParser::new()), Arc::clone(handler))
}

fn canned_session() -> Session {
    Session::new(
        false,
        SessionId::new("s1"),
        Application::new(ApplicationId::new("a1")),
        User::new(UserId::new("u1")),
    )
}

fn canned_request() -> Request {
    Request::new(
        RequestId::new("r1"),
        Utc.with_ymd_and_hms(2015, 5, 13, 12, 34, 56)
            .single()
            .expect("valid timestamp"),
        Locale::new("en-US"),
    )
}

// ============================================================================
// Routing tests
// ============================================================================

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dispatch_launch_invokes_exactly_one_handler_method() {
    let handler = Arc::new(RecordingHandler::default());

    let outcome = dispatcher(&handler)
        .dispatch(&to_bytes(&launch_payload()))
        .await
        .expect("dispatch should succeed");

    assert!(matches!(outcome, DispatchOutcome::Response(_)));
    assert_eq!(handler.call_counts(), (1, 0, 0));
    assert_eq!(
        *handler.seen_request_id.lock().expect("lock should not poison"),
        Some("r1".to_owned())
    );
    assert_eq!(
        *handler.seen_is_new.lock().expect("lock should not poison"),
        Some(false)
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dispatch_intent_routes_to_the_intent_handler() {
    let handler = Arc::new(RecordingHandler::default());

    let outcome = dispatcher(&handler)
        .dispatch(&to_bytes(&intent_payload()))
        .await
        .expect("dispatch should succeed");

    assert_eq!(handler.call_counts(), (0, 1, 0));
    assert_eq!(
        *handler.seen_slot_value.lock().expect("lock should not poison"),
        Some("virgo".to_owned())
    );
    match outcome {
        DispatchOutcome::Response(response) => {
            // The recording handler echoes the session attributes back.
            assert!(
                response
                    .session_attributes()
                    .contains_key("supportedHoroscopePeriods")
            );
        }
        DispatchOutcome::Acknowledged => panic!("intent dispatch must produce a response"),
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dispatch_session_ended_acknowledges_without_a_response() {
    let handler = Arc::new(RecordingHandler::default());

    let outcome = dispatcher(&handler)
        .dispatch(&to_bytes(&session_ended_payload(
            json!({"reason": "USER_INITIATED"}),
        )))
        .await
        .expect("dispatch should succeed");

    assert_eq!(outcome, DispatchOutcome::Acknowledged);
    assert_eq!(handler.call_counts(), (0, 0, 1));
}

// ============================================================================
// Failure tests
// ============================================================================

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dispatch_rejects_bytes_that_are_not_json() {
    let handler = Arc::new(RecordingHandler::default());

    let result = dispatcher(&handler).dispatch(b"definitely not json").await;

    assert!(matches!(result, Err(DispatchError::Decode(_))));
    assert_eq!(handler.call_counts(), (0, 0, 0));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dispatch_rejects_a_payload_without_a_discriminator() {
    let handler = Arc::new(RecordingHandler::default());
    let payload = json!({"session": {"new": true}});

    let result = dispatcher(&handler).dispatch(&to_bytes(&payload)).await;

    assert!(matches!(result, Err(DispatchError::UnrecognisedRequestType)));
    assert_eq!(handler.call_counts(), (0, 0, 0));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dispatch_rejects_a_payload_without_a_session() {
    let handler = Arc::new(RecordingHandler::default());
    let mut payload = launch_payload();
    payload.as_object_mut().expect("payload object").remove("session");

    let result = dispatcher(&handler).dispatch(&to_bytes(&payload)).await;

    assert!(matches!(result, Err(DispatchError::MissingSession)));
    assert_eq!(handler.call_counts(), (0, 0, 0));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dispatch_distinguishes_a_variant_shape_mismatch() {
    let handler = Arc::new(RecordingHandler::default());
    // The discriminator announces an intent, but no intent object follows.
    let mut payload = intent_payload();
    payload["request"]
        .as_object_mut()
        .expect("request object")
        .remove("intent");

    let result = dispatcher(&handler).dispatch(&to_bytes(&payload)).await;

    assert!(matches!(
        result,
        Err(DispatchError::MalformedRequest(RequestType::Intent))
    ));
    assert_eq!(handler.call_counts(), (0, 0, 0));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dispatch_passes_launch_handler_failures_through() {
    let handler = Arc::new(RecordingHandler::failing("backend unavailable"));

    let result = dispatcher(&handler)
        .dispatch(&to_bytes(&launch_payload()))
        .await;

    assert!(matches!(result, Err(DispatchError::Handler(_))));
    assert_eq!(handler.call_counts(), (1, 0, 0));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dispatch_passes_session_ended_handler_failures_through() {
    let handler = Arc::new(RecordingHandler::failing("cleanup failed"));

    let result = dispatcher(&handler)
        .dispatch(&to_bytes(&session_ended_payload(
            json!({"reason": "USER_INITIATED"}),
        )))
        .await;

    assert!(matches!(result, Err(DispatchError::Handler(_))));
    assert_eq!(handler.call_counts(), (0, 0, 1));
}

// ============================================================================
// Parser-contract tests (mocked parser)
// ============================================================================

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dispatch_consults_only_the_selected_variant_extractor() {
    let mut parser = MockParser::new();
    parser
        .expect_decode()
        .times(1)
        .returning(|_| Ok(DecodedPayload::from_value(Value::Null)));
    parser
        .expect_parse_request_type()
        .with(always())
        .times(1)
        .returning(|_| Some(RequestType::Launch));
    parser
        .expect_parse_session()
        .with(always())
        .times(1)
        .returning(|_| Some(canned_session()));
    parser
        .expect_parse_launch_request()
        .with(always())
        .times(1)
        .returning(|_| Some(LaunchRequest::new(canned_request())));
    // No expectations for the other extractors: touching them fails the test.

    let handler = Arc::new(RecordingHandler::default());
    let dispatcher = RequestDispatcher::new(Arc::new(parser), Arc::clone(&handler));

    let outcome = dispatcher
        .dispatch(b"irrelevant")
        .await
        .expect("dispatch should succeed");

    assert!(matches!(outcome, DispatchOutcome::Response(_)));
    assert_eq!(handler.call_counts(), (1, 0, 0));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dispatch_stops_at_a_decode_failure() {
    let mut parser = MockParser::new();
    parser.expect_decode().times(1).returning(|_| {
        let err = serde_json::from_slice::<Value>(b"nope")
            .expect_err("malformed JSON should not decode");
        Err(ParseError::json(err))
    });
    // No extraction expectations: decode failure must end the pipeline.

    let handler = Arc::new(RecordingHandler::default());
    let dispatcher = RequestDispatcher::new(Arc::new(parser), Arc::clone(&handler));

    let result = dispatcher.dispatch(b"irrelevant").await;

    assert!(matches!(result, Err(DispatchError::Decode(_))));
    assert_eq!(handler.call_counts(), (0, 0, 0));
}
