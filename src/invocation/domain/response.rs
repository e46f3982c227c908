//! Response-side value types.

use super::SessionAttributes;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The caller-owned response payload.
///
/// The pipeline treats the payload as an opaque JSON value: its shape is
/// owned by the skill author, not by this crate. The generator serialises
/// it verbatim under the wire's `response` field.
///
/// # Examples
///
/// ```
/// use oratory::invocation::domain::StandardResponse;
/// use serde_json::json;
///
/// let response = StandardResponse::from_value(json!({
///     "outputSpeech": {"type": "PlainText", "text": "Hello"},
///     "shouldEndSession": true,
/// }));
/// assert!(response.as_value().is_object());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StandardResponse(Value);

impl StandardResponse {
    /// Wraps a caller-built JSON value.
    #[must_use]
    pub const fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// Creates the minimal valid payload: an empty JSON object.
    #[must_use]
    pub fn empty() -> Self {
        Self(Value::Object(serde_json::Map::new()))
    }

    /// Returns the payload as a JSON value.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    /// Returns the inner JSON value.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl Default for StandardResponse {
    fn default() -> Self {
        Self::empty()
    }
}

/// The success payload of launch and intent handling.
///
/// Pairs the caller-owned response with the session attributes the
/// transport echoes back on the next turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandlerResponse {
    response: StandardResponse,
    session_attributes: SessionAttributes,
}

impl HandlerResponse {
    /// Combines a response payload with session attributes.
    #[must_use]
    pub const fn new(response: StandardResponse, session_attributes: SessionAttributes) -> Self {
        Self {
            response,
            session_attributes,
        }
    }

    /// Creates a response with empty session attributes.
    #[must_use]
    pub fn without_attributes(response: StandardResponse) -> Self {
        Self::new(response, SessionAttributes::new())
    }

    /// Returns the caller-owned response payload.
    #[must_use]
    pub const fn response(&self) -> &StandardResponse {
        &self.response
    }

    /// Returns the session attributes.
    #[must_use]
    pub const fn session_attributes(&self) -> &SessionAttributes {
        &self.session_attributes
    }

    /// Splits the pair for response generation.
    #[must_use]
    pub fn into_parts(self) -> (StandardResponse, SessionAttributes) {
        (self.response, self.session_attributes)
    }
}

/// The value the response generator serialises.
///
/// An absent response serialises as the minimal empty object, which is the
/// valid shape for acknowledged session-ended dispatches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    response: Option<StandardResponse>,
    session_attributes: SessionAttributes,
}

impl ResponseEnvelope {
    /// Creates an envelope from its parts.
    #[must_use]
    pub const fn new(
        response: Option<StandardResponse>,
        session_attributes: SessionAttributes,
    ) -> Self {
        Self {
            response,
            session_attributes,
        }
    }

    /// Creates an envelope with no response and no attributes.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(None, SessionAttributes::new())
    }

    /// Returns the response payload, when present.
    #[must_use]
    pub const fn response(&self) -> Option<&StandardResponse> {
        self.response.as_ref()
    }

    /// Returns the session attributes.
    #[must_use]
    pub const fn session_attributes(&self) -> &SessionAttributes {
        &self.session_attributes
    }
}
