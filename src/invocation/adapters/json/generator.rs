//! JSON implementation of the response generator port.

use super::field;
use crate::invocation::domain::ResponseEnvelope;
use crate::invocation::ports::generator::{
    GenerateError, GenerateResult, OutputFormat, ResponseGenerator,
};
use serde_json::{Map, Value};

/// JSON implementation of [`ResponseGenerator`].
///
/// # Examples
///
/// ```
/// use oratory::invocation::adapters::json::JsonResponseGenerator;
/// use oratory::invocation::domain::ResponseEnvelope;
/// use oratory::invocation::ports::generator::ResponseGenerator;
///
/// let generator = JsonResponseGenerator::new();
/// let model = generator.generate_model(&ResponseEnvelope::empty());
/// assert_eq!(model["response"], serde_json::json!({}));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonResponseGenerator;

impl JsonResponseGenerator {
    /// Creates a generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ResponseGenerator for JsonResponseGenerator {
    fn generate_model(&self, envelope: &ResponseEnvelope) -> Value {
        let response = envelope
            .response()
            .map_or_else(|| Value::Object(Map::new()), |payload| payload.as_value().clone());

        let mut model = Map::new();
        model.insert(field::RESPONSE.to_owned(), response);
        model.insert(
            field::SESSION_ATTRIBUTES.to_owned(),
            Value::Object(envelope.session_attributes().clone()),
        );
        Value::Object(model)
    }

    fn generate_bytes(
        &self,
        envelope: &ResponseEnvelope,
        format: OutputFormat,
    ) -> GenerateResult<Vec<u8>> {
        let model = self.generate_model(envelope);
        match format {
            OutputFormat::Compact => serde_json::to_vec(&model),
            OutputFormat::Pretty => serde_json::to_vec_pretty(&model),
        }
        .map_err(GenerateError::serialisation)
    }
}
