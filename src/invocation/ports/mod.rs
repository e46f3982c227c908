//! Port contracts for the invocation pipeline.
//!
//! Ports define infrastructure-agnostic interfaces so production and test
//! implementations of the parser, handler, and generator stay
//! interchangeable.

pub mod generator;
pub mod handler;
pub mod parser;

pub use generator::{GenerateError, GenerateResult, OutputFormat, ResponseGenerator};
pub use handler::{HandlerError, HandlerResult, RequestHandler};
pub use parser::{DecodedPayload, ParseError, ParseResult, ParserConfig, RequestParser};
