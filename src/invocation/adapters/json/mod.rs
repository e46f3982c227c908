//! JSON wire codec adapters.
//!
//! [`JsonRequestParser`] and [`JsonResponseGenerator`] implement the parser
//! and generator ports against the platform's JSON wire shapes.

mod generator;
mod parser;

pub use generator::JsonResponseGenerator;
pub use parser::JsonRequestParser;

/// Wire field names shared by the parser and generator adapters.
mod field {
    pub const SESSION: &str = "session";
    pub const NEW: &str = "new";
    pub const SESSION_ID: &str = "sessionId";
    pub const APPLICATION: &str = "application";
    pub const APPLICATION_ID: &str = "applicationId";
    pub const ATTRIBUTES: &str = "attributes";
    pub const USER: &str = "user";
    pub const USER_ID: &str = "userId";
    pub const ACCESS_TOKEN: &str = "accessToken";

    pub const REQUEST: &str = "request";
    pub const TYPE: &str = "type";
    pub const REQUEST_ID: &str = "requestId";
    pub const TIMESTAMP: &str = "timestamp";
    pub const LOCALE: &str = "locale";
    pub const INTENT: &str = "intent";
    pub const NAME: &str = "name";
    pub const SLOTS: &str = "slots";
    pub const VALUE: &str = "value";
    pub const REASON: &str = "reason";
    pub const ERROR: &str = "error";
    pub const MESSAGE: &str = "message";

    pub const RESPONSE: &str = "response";
    pub const SESSION_ATTRIBUTES: &str = "sessionAttributes";
}
