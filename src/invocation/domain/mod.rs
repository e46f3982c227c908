//! Domain types for voice-skill invocations.
//!
//! All types here are immutable value objects: they are constructed fresh
//! from a decoded payload at the start of an invocation, carry no
//! behaviour beyond accessors and wire-name mapping, and are discarded
//! once the response has been generated.

mod ids;
mod intent;
mod reason;
mod request;
mod response;
mod session;

pub use ids::{ApplicationId, Locale, RequestId, SessionId, UserId};
pub use intent::{Intent, Slot};
pub use reason::{Reason, SessionEndedError, SessionEndedErrorKind};
pub use request::{
    IntentRequest, LaunchRequest, Request, RequestType, SessionEndedRequest,
};
pub use response::{HandlerResponse, ResponseEnvelope, StandardResponse};
pub use session::{Application, Session, SessionAttributes, User};
