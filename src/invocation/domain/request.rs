//! Request variants and the common request core.

use super::{Intent, Locale, Reason, RequestId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fields shared by every request variant.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use oratory::invocation::domain::{Locale, Request, RequestId};
///
/// let request = Request::new(
///     RequestId::new("amzn1.echo-api.request.1234"),
///     Utc.with_ymd_and_hms(2015, 5, 13, 12, 34, 56)
///         .single()
///         .expect("valid timestamp"),
///     Locale::new("en-US"),
/// );
/// assert_eq!(request.locale().as_str(), "en-US");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    request_id: RequestId,
    timestamp: DateTime<Utc>,
    locale: Locale,
}

impl Request {
    /// Creates the common request core.
    #[must_use]
    pub const fn new(request_id: RequestId, timestamp: DateTime<Utc>, locale: Locale) -> Self {
        Self {
            request_id,
            timestamp,
            locale,
        }
    }

    /// Returns the request identifier.
    #[must_use]
    pub const fn request_id(&self) -> &RequestId {
        &self.request_id
    }

    /// Returns the instant the platform issued the request.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns the request locale.
    #[must_use]
    pub const fn locale(&self) -> &Locale {
        &self.locale
    }
}

/// A request issued when the user opens the skill without an intent.
///
/// Carries no payload beyond the common request core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchRequest {
    request: Request,
}

impl LaunchRequest {
    /// Wraps the common request core.
    #[must_use]
    pub const fn new(request: Request) -> Self {
        Self { request }
    }

    /// Returns the common request core.
    #[must_use]
    pub const fn request(&self) -> &Request {
        &self.request
    }
}

/// A request carrying a recognised user intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentRequest {
    request: Request,
    intent: Intent,
}

impl IntentRequest {
    /// Combines the common request core with the recognised intent.
    #[must_use]
    pub const fn new(request: Request, intent: Intent) -> Self {
        Self { request, intent }
    }

    /// Returns the common request core.
    #[must_use]
    pub const fn request(&self) -> &Request {
        &self.request
    }

    /// Returns the recognised intent.
    #[must_use]
    pub const fn intent(&self) -> &Intent {
        &self.intent
    }
}

/// A request notifying the skill that its session has ended.
///
/// Session-ended requests cannot produce a spoken reply; handlers only
/// acknowledge them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionEndedRequest {
    request: Request,
    reason: Reason,
}

impl SessionEndedRequest {
    /// Combines the common request core with the termination reason.
    #[must_use]
    pub const fn new(request: Request, reason: Reason) -> Self {
        Self { request, reason }
    }

    /// Returns the common request core.
    #[must_use]
    pub const fn request(&self) -> &Request {
        &self.request
    }

    /// Returns why the session ended.
    #[must_use]
    pub const fn reason(&self) -> &Reason {
        &self.reason
    }
}

/// Discriminator naming which request variant a payload represents.
///
/// An unrecognised wire discriminator has no variant: discriminator lookup
/// yields `Option<RequestType>` and unknown strings map to `None`.
///
/// # Examples
///
/// ```
/// use oratory::invocation::domain::RequestType;
///
/// assert_eq!(RequestType::from_wire("LaunchRequest"), Some(RequestType::Launch));
/// assert_eq!(RequestType::from_wire("AudioPlayerRequest"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestType {
    /// The payload is a launch request.
    Launch,
    /// The payload is an intent request.
    Intent,
    /// The payload is a session-ended request.
    SessionEnded,
}

impl RequestType {
    /// Maps a wire discriminator string to its variant.
    ///
    /// Matching is exact; the wire protocol defines the casing.
    #[must_use]
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "LaunchRequest" => Some(Self::Launch),
            "IntentRequest" => Some(Self::Intent),
            "SessionEndedRequest" => Some(Self::SessionEnded),
            _ => None,
        }
    }

    /// Returns the canonical wire discriminator.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Launch => "LaunchRequest",
            Self::Intent => "IntentRequest",
            Self::SessionEnded => "SessionEndedRequest",
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}
