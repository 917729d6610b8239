//! Problem-details reports for request binding failures.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Title used for every binding failure report.
pub const VALIDATION_PROBLEM_TITLE: &str = "One or more validation errors occurred.";

/// Problem type URI for a 400 Bad Request.
pub const VALIDATION_PROBLEM_TYPE: &str = "https://tools.ietf.org/html/rfc7231#section-6.5.1";

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The message reported when a required field has no usable value.
    pub fn required(field: impl Into<String>) -> Self {
        let field = field.into();
        let message = format!("The {} field is required.", field);
        Self { field, message }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Collected field errors for one request, shaped as a problem-details body.
///
/// ```json
/// {
///   "type": "https://tools.ietf.org/html/rfc7231#section-6.5.1",
///   "title": "One or more validation errors occurred.",
///   "status": 400,
///   "errors": { "cuit": ["The CUIT's verification digit is wrong."] }
/// }
/// ```
///
/// Fields are kept in a `BTreeMap` so the serialized report is stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationProblem {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: String,
    pub status: u16,
    pub errors: BTreeMap<String, Vec<String>>,
}

impl Default for ValidationProblem {
    fn default() -> Self {
        Self {
            problem_type: VALIDATION_PROBLEM_TYPE.to_string(),
            title: VALIDATION_PROBLEM_TITLE.to_string(),
            status: 400,
            errors: BTreeMap::new(),
        }
    }
}

impl ValidationProblem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error against a field. Messages for the same field accumulate.
    pub fn add_error(&mut self, error: FieldError) {
        self.errors
            .entry(error.field)
            .or_default()
            .push(error.message);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Messages recorded for a field, in insertion order.
    pub fn messages_for(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `Ok(value)` when nothing was recorded, otherwise the report itself.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl From<FieldError> for ValidationProblem {
    fn from(error: FieldError) -> Self {
        let mut problem = Self::new();
        problem.add_error(error);
        problem
    }
}
