//! Parser port for decoding request payloads.
//!
//! Decoding is the pipeline's only hard failure: bytes that are not
//! well-formed JSON abort the invocation before any handler runs. Every
//! extraction operation afterwards is a soft failure returning `Option`:
//! absence means "this payload does not contain this shape", which the
//! dispatcher interprets, not the parser.
//!
//! The decode operation returns an immutable [`DecodedPayload`] instead of
//! mutating parser state, so one parser instance may serve overlapping
//! dispatches without the extractions of one racing the decode of another.

use crate::invocation::domain::{
    IntentRequest, LaunchRequest, RequestType, Session, SessionEndedRequest,
};
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Result type for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors returned while decoding a request payload.
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// The payload bytes are not well-formed JSON.
    #[error("request payload is not valid JSON: {0}")]
    Json(#[source] Arc<serde_json::Error>),

    /// The payload exceeds the configured byte ceiling.
    #[error("request payload of {actual_bytes} bytes exceeds limit of {limit_bytes} bytes")]
    PayloadTooLarge {
        /// The payload size in bytes.
        actual_bytes: usize,
        /// The configured ceiling in bytes.
        limit_bytes: usize,
    },

    /// The payload file could not be read.
    #[error("failed to read request payload from {path}: {source}")]
    Io {
        /// The path that failed to read.
        path: String,
        /// The underlying I/O failure.
        #[source]
        source: Arc<std::io::Error>,
    },
}

impl ParseError {
    /// Wraps a JSON decode failure.
    #[must_use]
    pub fn json(err: serde_json::Error) -> Self {
        Self::Json(Arc::new(err))
    }

    /// Wraps an I/O failure for the given payload path.
    #[must_use]
    pub fn io(path: &Path, err: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source: Arc::new(err),
        }
    }
}

/// An immutable decoded request payload.
///
/// Produced by [`RequestParser::decode`] and borrowed by every extraction
/// operation. Wrapping the generic JSON tree keeps callers from depending
/// on the wire representation directly.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedPayload(Value);

impl DecodedPayload {
    /// Wraps an already-decoded JSON tree.
    #[must_use]
    pub const fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// Returns the decoded JSON tree.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }
}

/// Configuration for request decoding.
///
/// # Examples
///
/// ```
/// use oratory::invocation::ports::parser::ParserConfig;
///
/// let config = ParserConfig::default();
/// assert_eq!(config.max_payload_bytes, 1024 * 1024);
/// ```
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Maximum accepted payload size in bytes.
    pub max_payload_bytes: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_payload_bytes: 1024 * 1024, // 1 MiB
        }
    }
}

impl ParserConfig {
    /// Creates a configuration with a custom payload ceiling.
    #[must_use]
    pub const fn with_max_payload_bytes(max_payload_bytes: usize) -> Self {
        Self { max_payload_bytes }
    }
}

/// Port for decoding request payloads and extracting typed values.
///
/// Implementations must be stateless with respect to individual payloads:
/// `decode` returns a value, and extraction borrows it.
pub trait RequestParser: Send + Sync {
    /// Decodes raw bytes into an immutable JSON tree.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Json`] when the bytes are not well-formed JSON
    /// or [`ParseError::PayloadTooLarge`] when the payload exceeds the
    /// configured ceiling.
    fn decode(&self, payload: &[u8]) -> ParseResult<DecodedPayload>;

    /// Reads a payload file and decodes its contents.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Io`] when the file cannot be read, plus the
    /// failures of [`Self::decode`].
    fn decode_file(&self, path: &Path) -> ParseResult<DecodedPayload> {
        let bytes = std::fs::read(path).map_err(|err| ParseError::io(path, err))?;
        self.decode(&bytes)
    }

    /// Inspects the request discriminator.
    ///
    /// Returns `None` when the discriminator is absent or unrecognised.
    fn parse_request_type(&self, payload: &DecodedPayload) -> Option<RequestType>;

    /// Extracts the session object.
    ///
    /// Returns `None` when the session sub-tree is missing or malformed.
    fn parse_session(&self, payload: &DecodedPayload) -> Option<Session>;

    /// Extracts the launch-request shape.
    ///
    /// Returns `None` when the request core is missing or malformed.
    fn parse_launch_request(&self, payload: &DecodedPayload) -> Option<LaunchRequest>;

    /// Extracts the intent-request shape.
    ///
    /// Returns `None` when the request core or intent sub-tree is missing
    /// or malformed.
    fn parse_intent_request(&self, payload: &DecodedPayload) -> Option<IntentRequest>;

    /// Extracts the session-ended-request shape.
    ///
    /// Returns `None` when the request core is missing or malformed.
    fn parse_session_ended_request(
        &self,
        payload: &DecodedPayload,
    ) -> Option<SessionEndedRequest>;
}
