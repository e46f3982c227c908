//! Handler port: the capability set a skill supplies to the dispatcher.
//!
//! Each method is invoked at most once per dispatch, with the variant the
//! discriminator selected. The async return channel is the completion
//! contract: a method resolves exactly once, so the exactly-once
//! obligation of the pipeline is discharged by construction rather than by
//! convention.

use crate::invocation::domain::{
    HandlerResponse, IntentRequest, LaunchRequest, Session, SessionEndedRequest,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for handler operations.
pub type HandlerResult<T> = Result<T, HandlerError>;

/// A failure signalled by the skill's own handling logic.
///
/// The dispatcher passes handler errors through verbatim; it never retries
/// and never swallows them.
#[derive(Debug, Clone, Error)]
#[error("handler failed: {0}")]
pub struct HandlerError(Arc<dyn std::error::Error + Send + Sync>);

impl HandlerError {
    /// Wraps an arbitrary handler-side error.
    pub fn new(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Arc::new(err))
    }

    /// Creates an error from a plain message.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self(Arc::new(MessageError(message.into())))
    }
}

/// Plain-text handler error carrier used by [`HandlerError::message`].
#[derive(Debug, Error)]
#[error("{0}")]
struct MessageError(String);

/// Port for the skill's request handling capability set.
///
/// Launch and intent handling produce a [`HandlerResponse`]; session-ended
/// handling only acknowledges, because a session that has ended cannot
/// receive a spoken reply.
#[async_trait]
pub trait RequestHandler: Send + Sync {
    /// Handles a launch request.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError`] when the skill cannot produce a response.
    async fn handle_launch(
        &self,
        request: LaunchRequest,
        session: Session,
    ) -> HandlerResult<HandlerResponse>;

    /// Handles an intent request.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError`] when the skill cannot produce a response.
    async fn handle_intent(
        &self,
        request: IntentRequest,
        session: Session,
    ) -> HandlerResult<HandlerResponse>;

    /// Acknowledges a session-ended request.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError`] when the skill fails to wind the session
    /// down.
    async fn handle_session_ended(
        &self,
        request: SessionEndedRequest,
        session: Session,
    ) -> HandlerResult<()>;
}
