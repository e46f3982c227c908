//! Generator port for assembling response payloads.

use crate::invocation::domain::ResponseEnvelope;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Result type for generator operations.
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Errors returned while serialising a response envelope.
#[derive(Debug, Clone, Error)]
pub enum GenerateError {
    /// The response payload could not be serialised.
    ///
    /// This is a caller error in the response payload, not a pipeline
    /// invariant violation; it is surfaced to the transport and never
    /// retried.
    #[error("response payload could not be serialised: {0}")]
    Serialisation(#[source] Arc<serde_json::Error>),
}

impl GenerateError {
    /// Wraps a serialisation failure.
    #[must_use]
    pub fn serialisation(err: serde_json::Error) -> Self {
        Self::Serialisation(Arc::new(err))
    }
}

/// Output layout for generated response bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Minified JSON, the wire default.
    #[default]
    Compact,
    /// Human-readable indented JSON, for logs and fixtures.
    Pretty,
}

/// Port for assembling the wire response from a handler's result.
pub trait ResponseGenerator: Send + Sync {
    /// Builds the canonical wire-shaped model.
    ///
    /// An envelope without a response produces the minimal valid
    /// empty-response shape.
    fn generate_model(&self, envelope: &ResponseEnvelope) -> Value;

    /// Serialises the model to a byte buffer.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Serialisation`] when the response payload
    /// cannot be encoded.
    fn generate_bytes(
        &self,
        envelope: &ResponseEnvelope,
        format: OutputFormat,
    ) -> GenerateResult<Vec<u8>>;
}
