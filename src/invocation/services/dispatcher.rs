//! Request dispatch: the pipeline's only decision logic.
//!
//! [`RequestDispatcher`] drives decode, discriminator lookup, session and
//! variant extraction, and exactly one handler invocation per dispatch.
//! The result flows back through the single `Result` channel: one of a
//! response, an acknowledgement, or a failure, never more than one.

use crate::invocation::domain::{HandlerResponse, RequestType, ResponseEnvelope};
use crate::invocation::ports::handler::{HandlerError, RequestHandler};
use crate::invocation::ports::parser::{ParseError, RequestParser};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Result type for dispatch operations.
pub type DispatchResult = Result<DispatchOutcome, DispatchError>;

/// The single completion value of a successful dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    /// Launch or intent handling produced a response.
    Response(HandlerResponse),
    /// Session-ended handling completed without a response payload.
    Acknowledged,
}

impl From<DispatchOutcome> for ResponseEnvelope {
    fn from(outcome: DispatchOutcome) -> Self {
        match outcome {
            DispatchOutcome::Response(handler_response) => {
                let (response, session_attributes) = handler_response.into_parts();
                Self::new(Some(response), session_attributes)
            }
            DispatchOutcome::Acknowledged => Self::empty(),
        }
    }
}

/// Errors surfaced through the dispatch completion channel.
///
/// Decode failures and the three shape-mismatch kinds originate in the
/// pipeline itself; handler failures pass through verbatim. None are
/// retried here; retry policy belongs to the transport collaborator.
#[derive(Debug, Clone, Error)]
pub enum DispatchError {
    /// The payload bytes could not be decoded.
    #[error(transparent)]
    Decode(#[from] ParseError),

    /// The payload carries no recognised request discriminator.
    #[error("request payload carries no recognised request type")]
    UnrecognisedRequestType,

    /// The payload carries no well-formed session.
    #[error("request payload carries no well-formed session")]
    MissingSession,

    /// The payload does not match the shape its discriminator announced.
    #[error("request payload does not match the {0} shape its discriminator announced")]
    MalformedRequest(RequestType),

    /// The handler signalled a failure.
    #[error(transparent)]
    Handler(#[from] HandlerError),
}

/// Routes decoded requests to exactly one handler method.
///
/// The dispatcher owns a parser and a handler behind `Arc`, takes `&self`,
/// and decodes into an immutable payload value, so a single instance may
/// serve overlapping dispatches.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use oratory::invocation::adapters::json::JsonRequestParser;
/// use oratory::invocation::services::RequestDispatcher;
/// # use oratory::invocation::domain::*;
/// # use oratory::invocation::ports::handler::*;
/// # use async_trait::async_trait;
/// # struct MySkill;
/// # #[async_trait]
/// # impl RequestHandler for MySkill {
/// #     async fn handle_launch(&self, _: LaunchRequest, _: Session) -> HandlerResult<HandlerResponse> { todo!() }
/// #     async fn handle_intent(&self, _: IntentRequest, _: Session) -> HandlerResult<HandlerResponse> { todo!() }
/// #     async fn handle_session_ended(&self, _: SessionEndedRequest, _: Session) -> HandlerResult<()> { todo!() }
/// # }
///
/// # async fn example(payload: &[u8]) {
/// let dispatcher = RequestDispatcher::new(
///     Arc::new(JsonRequestParser::new()),
///     Arc::new(MySkill),
/// );
/// let outcome = dispatcher.dispatch(payload).await;
/// # let _ = outcome;
/// # }
/// ```
#[derive(Clone)]
pub struct RequestDispatcher<P, H>
where
    P: RequestParser,
    H: RequestHandler,
{
    parser: Arc<P>,
    handler: Arc<H>,
}

impl<P, H> RequestDispatcher<P, H>
where
    P: RequestParser,
    H: RequestHandler,
{
    /// Creates a dispatcher from a parser and a handler.
    #[must_use]
    pub const fn new(parser: Arc<P>, handler: Arc<H>) -> Self {
        Self { parser, handler }
    }

    /// Decodes a request payload and routes it to the matching handler
    /// method.
    ///
    /// At most one handler method runs per call, and it runs at most once;
    /// the returned `Result` is the single completion value.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Decode`] when the payload is not
    /// well-formed JSON, [`DispatchError::UnrecognisedRequestType`] when
    /// the discriminator is absent or unknown,
    /// [`DispatchError::MissingSession`] when the session is absent or
    /// malformed, [`DispatchError::MalformedRequest`] when the payload
    /// does not match the shape its discriminator announced, and
    /// [`DispatchError::Handler`] when the handler itself fails.
    pub async fn dispatch(&self, payload: &[u8]) -> DispatchResult {
        let decoded = self.parser.decode(payload).inspect_err(|err| {
            warn!(error = %err, "request payload failed to decode");
        })?;

        let request_type = self
            .parser
            .parse_request_type(&decoded)
            .ok_or(DispatchError::UnrecognisedRequestType)?;
        let session = self
            .parser
            .parse_session(&decoded)
            .ok_or(DispatchError::MissingSession)?;
        debug!(%request_type, session_id = %session.session_id(), "dispatching request");

        match request_type {
            RequestType::Launch => {
                let request = self
                    .parser
                    .parse_launch_request(&decoded)
                    .ok_or(DispatchError::MalformedRequest(RequestType::Launch))?;
                let response = self.handler.handle_launch(request, session).await?;
                Ok(DispatchOutcome::Response(response))
            }
            RequestType::Intent => {
                let request = self
                    .parser
                    .parse_intent_request(&decoded)
                    .ok_or(DispatchError::MalformedRequest(RequestType::Intent))?;
                let response = self.handler.handle_intent(request, session).await?;
                Ok(DispatchOutcome::Response(response))
            }
            RequestType::SessionEnded => {
                let request = self
                    .parser
                    .parse_session_ended_request(&decoded)
                    .ok_or(DispatchError::MalformedRequest(RequestType::SessionEnded))?;
                self.handler.handle_session_ended(request, session).await?;
                Ok(DispatchOutcome::Acknowledged)
            }
        }
    }
}
