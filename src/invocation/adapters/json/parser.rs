//! JSON implementation of the request parser port.

use super::field;
use crate::invocation::domain::{
    Application, ApplicationId, Intent, IntentRequest, LaunchRequest, Locale, Reason, Request,
    RequestId, RequestType, Session, SessionEndedError, SessionEndedErrorKind, SessionEndedRequest,
    SessionId, Slot, User, UserId,
};
use crate::invocation::ports::parser::{
    DecodedPayload, ParseError, ParseResult, ParserConfig, RequestParser,
};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// JSON implementation of [`RequestParser`].
///
/// Decoding enforces the configured payload ceiling and well-formedness;
/// every extraction afterwards fails softly with `None` when the expected
/// sub-tree is missing or malformed.
///
/// # Examples
///
/// ```
/// use oratory::invocation::adapters::json::JsonRequestParser;
/// use oratory::invocation::domain::RequestType;
/// use oratory::invocation::ports::parser::RequestParser;
///
/// let parser = JsonRequestParser::new();
/// let payload = parser
///     .decode(br#"{"request": {"type": "LaunchRequest"}}"#)
///     .expect("well-formed JSON");
/// assert_eq!(parser.parse_request_type(&payload), Some(RequestType::Launch));
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonRequestParser {
    config: ParserConfig,
}

impl JsonRequestParser {
    /// Creates a parser with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with a custom configuration.
    #[must_use]
    pub const fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the parser configuration.
    #[must_use]
    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }
}

impl RequestParser for JsonRequestParser {
    fn decode(&self, payload: &[u8]) -> ParseResult<DecodedPayload> {
        if payload.len() > self.config.max_payload_bytes {
            return Err(ParseError::PayloadTooLarge {
                actual_bytes: payload.len(),
                limit_bytes: self.config.max_payload_bytes,
            });
        }
        let value = serde_json::from_slice(payload).map_err(ParseError::json)?;
        Ok(DecodedPayload::from_value(value))
    }

    fn parse_request_type(&self, payload: &DecodedPayload) -> Option<RequestType> {
        let request = request_object(payload)?;
        RequestType::from_wire(string(request, field::TYPE)?)
    }

    fn parse_session(&self, payload: &DecodedPayload) -> Option<Session> {
        let session = object(payload.as_value().as_object()?, field::SESSION)?;
        let is_new = session.get(field::NEW)?.as_bool()?;
        let session_id = SessionId::new(string(session, field::SESSION_ID)?);
        let application = parse_application(object(session, field::APPLICATION)?)?;
        let user = parse_user(object(session, field::USER)?)?;
        // Attributes are free-form; an absent map is an empty one.
        let attributes = object(session, field::ATTRIBUTES).cloned().unwrap_or_default();

        Some(
            Session::new(is_new, session_id, application, user).with_attributes(attributes),
        )
    }

    fn parse_launch_request(&self, payload: &DecodedPayload) -> Option<LaunchRequest> {
        let request = parse_request_core(request_object(payload)?)?;
        Some(LaunchRequest::new(request))
    }

    fn parse_intent_request(&self, payload: &DecodedPayload) -> Option<IntentRequest> {
        let raw_request = request_object(payload)?;
        let request = parse_request_core(raw_request)?;
        let intent = parse_intent(raw_request)?;
        Some(IntentRequest::new(request, intent))
    }

    fn parse_session_ended_request(
        &self,
        payload: &DecodedPayload,
    ) -> Option<SessionEndedRequest> {
        let raw_request = request_object(payload)?;
        let request = parse_request_core(raw_request)?;
        Some(SessionEndedRequest::new(request, parse_reason(raw_request)))
    }
}

fn request_object(payload: &DecodedPayload) -> Option<&Map<String, Value>> {
    object(payload.as_value().as_object()?, field::REQUEST)
}

fn object<'a>(parent: &'a Map<String, Value>, key: &str) -> Option<&'a Map<String, Value>> {
    parent.get(key).and_then(Value::as_object)
}

fn string<'a>(parent: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    parent.get(key).and_then(Value::as_str)
}

fn parse_request_core(request: &Map<String, Value>) -> Option<Request> {
    let request_id = RequestId::new(string(request, field::REQUEST_ID)?);
    let timestamp = DateTime::parse_from_rfc3339(string(request, field::TIMESTAMP)?)
        .ok()?
        .with_timezone(&Utc);
    let locale = Locale::new(string(request, field::LOCALE)?);
    Some(Request::new(request_id, timestamp, locale))
}

fn parse_application(application: &Map<String, Value>) -> Option<Application> {
    let application_id = ApplicationId::new(string(application, field::APPLICATION_ID)?);
    Some(Application::new(application_id))
}

fn parse_user(user: &Map<String, Value>) -> Option<User> {
    let mut parsed = User::new(UserId::new(string(user, field::USER_ID)?));
    if let Some(access_token) = string(user, field::ACCESS_TOKEN) {
        parsed = parsed.with_access_token(access_token);
    }
    Some(parsed)
}

fn parse_intent(request: &Map<String, Value>) -> Option<Intent> {
    let intent = object(request, field::INTENT)?;
    let name = string(intent, field::NAME)?;

    let mut slots = BTreeMap::new();
    if let Some(raw_slots) = object(intent, field::SLOTS) {
        for (key, raw_slot) in raw_slots {
            let slot = parse_slot(key, raw_slot)?;
            slots.insert(key.clone(), slot);
        }
    }

    Some(Intent::new(name).with_slots(slots))
}

fn parse_slot(key: &str, raw_slot: &Value) -> Option<Slot> {
    let slot = raw_slot.as_object()?;
    // The slot's own name field wins; the map key is the fallback.
    let name = string(slot, field::NAME).unwrap_or(key);
    match slot.get(field::VALUE) {
        None | Some(Value::Null) => Some(Slot::new(name)),
        Some(Value::String(value)) => Some(Slot::new(name).with_value(value.as_str())),
        Some(_) => None,
    }
}

fn parse_reason(request: &Map<String, Value>) -> Reason {
    match string(request, field::REASON) {
        Some("ERROR") => Reason::SessionError(parse_session_error(request)),
        Some(value) => Reason::from_wire(value).unwrap_or(Reason::Unknown),
        None => Reason::Unknown,
    }
}

fn parse_session_error(request: &Map<String, Value>) -> SessionEndedError {
    object(request, field::ERROR).map_or_else(
        || SessionEndedError::new(SessionEndedErrorKind::Unknown, ""),
        |error| {
            let kind = string(error, field::TYPE)
                .map_or(SessionEndedErrorKind::Unknown, SessionEndedErrorKind::from_wire);
            let message = string(error, field::MESSAGE).unwrap_or_default();
            SessionEndedError::new(kind, message)
        },
    )
}
