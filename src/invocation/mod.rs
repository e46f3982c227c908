//! Voice-skill invocation handling for Oratory.
//!
//! This module implements the three-stage invocation pipeline: request
//! parsing (raw bytes into a typed model), dispatch (discriminator into
//! exactly one handler invocation), and response generation (typed result
//! into wire bytes). The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//!
//! # Example
//!
//! ```
//! use oratory::invocation::adapters::json::JsonResponseGenerator;
//! use oratory::invocation::domain::{ResponseEnvelope, StandardResponse};
//! use oratory::invocation::ports::generator::{OutputFormat, ResponseGenerator};
//! use serde_json::json;
//!
//! let envelope = ResponseEnvelope::new(
//!     Some(StandardResponse::from_value(json!({"shouldEndSession": true}))),
//!     serde_json::Map::new(),
//! );
//! let generator = JsonResponseGenerator::new();
//! let bytes = generator
//!     .generate_bytes(&envelope, OutputFormat::Compact)
//!     .expect("serialisable envelope");
//! assert!(!bytes.is_empty());
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
