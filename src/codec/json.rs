//! Adapter for structured data held as `serde_json::Value`.

use super::{Boundary, CuitAdapter};
use crate::cuit::CuitNumber;
use crate::error::{CodecError, CodecResult};
use log::trace;
use serde_json::Value;

/// Converts between [`CuitNumber`] and JSON values.
///
/// Only JSON strings are accepted. A bare number such as `20311111117` is
/// rejected even though its digits would pass validation, because the
/// canonical form can only be carried by a string.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonAdapter;

impl JsonAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Decode the CUIT stored under `field` in a JSON object.
    ///
    /// A missing field decodes like an explicit `null`.
    pub fn decode_field(&self, object: &Value, field: &str) -> CodecResult<CuitNumber> {
        self.decode(object.get(field).unwrap_or(&Value::Null))
    }
}

impl CuitAdapter for JsonAdapter {
    type Raw = Value;
    type Encoded = Value;

    fn boundary(&self) -> Boundary {
        Boundary::Json
    }

    fn decode(&self, raw: &Value) -> CodecResult<CuitNumber> {
        match raw {
            Value::String(value) => Ok(CuitNumber::new(value.clone())?),
            other => {
                trace!("Rejecting non-string JSON value for CUIT: {}", other);
                Err(CodecError::unexpected_shape(shape_of(other)))
            }
        }
    }

    fn encode(&self, cuit: &CuitNumber) -> Value {
        Value::String(cuit.formatted_value().to_string())
    }
}

fn shape_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
