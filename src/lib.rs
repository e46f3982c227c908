//! Oratory: a voice-skill invocation pipeline.
//!
//! This crate decodes a voice-assistant request payload into a typed domain
//! model, routes it to exactly one caller-supplied handler based on the
//! request discriminator, and assembles the handler's result back into a
//! response payload. Each invocation is stateless: decode, route, encode,
//! discard.
//!
//! # Architecture
//!
//! Oratory follows hexagonal architecture principles:
//!
//! - **Domain**: Pure value types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for parsing, handling, and
//!   response generation
//! - **Adapters**: Concrete implementations of ports (JSON wire codec)
//! - **Services**: The request dispatcher that drives the pipeline
//!
//! # Modules
//!
//! - [`invocation`]: Request decoding, dispatch, and response generation

pub mod invocation;
