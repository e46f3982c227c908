//! Session termination reasons.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a session ended.
///
/// Unrecognised or absent wire reasons map to [`Reason::Unknown`] so a new
/// platform reason never aborts parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reason {
    /// The user ended the session themselves.
    UserInitiated,
    /// The platform ended the session after a skill error.
    SessionError(SessionEndedError),
    /// The user failed to respond within the allowed reprompts.
    ExceededMaxReprompts,
    /// The wire reason was absent or not recognised.
    Unknown,
}

impl Reason {
    /// Maps a wire reason string to its variant.
    ///
    /// Returns `None` for unrecognised strings; `ERROR` is not mapped here
    /// because it carries a payload parsed from the sibling `error` field.
    #[must_use]
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "USER_INITIATED" => Some(Self::UserInitiated),
            "EXCEEDED_MAX_REPROMPTS" => Some(Self::ExceededMaxReprompts),
            _ => None,
        }
    }
}

/// The error payload attached to an `ERROR` session termination.
///
/// # Examples
///
/// ```
/// use oratory::invocation::domain::{SessionEndedError, SessionEndedErrorKind};
///
/// let error = SessionEndedError::new(
///     SessionEndedErrorKind::InvalidResponse,
///     "response contained no output speech",
/// );
/// assert_eq!(error.kind(), SessionEndedErrorKind::InvalidResponse);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionEndedError {
    kind: SessionEndedErrorKind,
    message: String,
}

impl SessionEndedError {
    /// Creates an error payload.
    #[must_use]
    pub fn new(kind: SessionEndedErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Returns the error kind.
    #[must_use]
    pub const fn kind(&self) -> SessionEndedErrorKind {
        self.kind
    }

    /// Returns the human-readable error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Platform error kinds reported with an `ERROR` termination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionEndedErrorKind {
    /// The skill returned a response the platform could not accept.
    InvalidResponse,
    /// The platform could not reach the user's device.
    DeviceCommunicationError,
    /// The platform failed internally.
    InternalServiceError,
    /// The wire kind was absent or not recognised.
    Unknown,
}

impl SessionEndedErrorKind {
    /// Maps a wire kind string to its variant, defaulting to
    /// [`Self::Unknown`] for unrecognised strings.
    #[must_use]
    pub fn from_wire(value: &str) -> Self {
        match value {
            "INVALID_RESPONSE" => Self::InvalidResponse,
            "DEVICE_COMMUNICATION_ERROR" => Self::DeviceCommunicationError,
            "INTERNAL_SERVICE_ERROR" => Self::InternalServiceError,
            _ => Self::Unknown,
        }
    }

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidResponse => "INVALID_RESPONSE",
            Self::DeviceCommunicationError => "DEVICE_COMMUNICATION_ERROR",
            Self::InternalServiceError => "INTERNAL_SERVICE_ERROR",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for SessionEndedErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
