//! Boundary adapters between [`CuitNumber`] and its external representations.
//!
//! Each adapter implements the same small capability set: validate-only,
//! decode (construct), and encode. Adapters are ordinary values that callers
//! wire up explicitly at the edge of their system; nothing is discovered at
//! runtime.
//!
//! | Adapter | Raw input | Encoded output |
//! |---|---|---|
//! | [`JsonAdapter`] | `serde_json::Value` | `Value::String` |
//! | [`RouteSegmentAdapter`] | `&str` path segment | `String` |
//! | [`PlainTextAdapter`] | `&str` | `String` |
//!
//! Every adapter encodes the formatted form and decodes through
//! [`CuitNumber::new`], so `decode(encode(x)) == x` for any valid `x`.
//!
//! ```rust
//! use cuit_number::codec::{CuitAdapter, JsonAdapter};
//! use serde_json::json;
//!
//! let adapter = JsonAdapter::new();
//! let cuit = adapter.decode(&json!("20311111117")).unwrap();
//! assert_eq!(adapter.encode(&cuit), json!("20-31111111-7"));
//!
//! // Numbers are never coerced
//! assert!(adapter.decode(&json!(20311111117u64)).is_err());
//! ```

mod json;
mod text;

pub use json::JsonAdapter;
pub use text::{PlainTextAdapter, RouteSegmentAdapter};

use crate::cuit::CuitNumber;
use crate::error::{CodecError, CodecResult};
use std::fmt;

/// The system boundary an adapter serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// Structured data such as JSON request and response bodies
    Json,
    /// A segment of a request path, e.g. `/taxinfo/by-cuit/{cuit}`
    RouteSegment,
    /// Any other string: query parameters, command-line arguments, config values
    PlainText,
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Json => "json",
            Self::RouteSegment => "route-segment",
            Self::PlainText => "plain-text",
        };
        f.write_str(name)
    }
}

/// Capability set shared by every CUIT boundary adapter.
pub trait CuitAdapter: Send + Sync {
    /// What the adapter reads from the outside world.
    type Raw: ?Sized;

    /// What the adapter hands back to the outside world.
    type Encoded;

    /// The boundary this adapter serves.
    fn boundary(&self) -> Boundary;

    /// Build a CuitNumber from its external representation.
    fn decode(&self, raw: &Self::Raw) -> CodecResult<CuitNumber>;

    /// Render a CuitNumber in its canonical external representation.
    fn encode(&self, cuit: &CuitNumber) -> Self::Encoded;

    /// Check a raw value without keeping the result.
    ///
    /// Never panics; the outcome carries the same error `decode` would return.
    fn validate(&self, raw: &Self::Raw) -> ValidationOutcome {
        self.decode(raw).into()
    }
}

/// Result of a validate-only check.
///
/// An invalid outcome keeps the full [`CodecError`]; its `Display` is the
/// user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(CodecError),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The user-facing message for an invalid value.
    pub fn error_message(&self) -> Option<String> {
        match self {
            Self::Valid => None,
            Self::Invalid(error) => Some(error.to_string()),
        }
    }

    pub fn error(&self) -> Option<&CodecError> {
        match self {
            Self::Valid => None,
            Self::Invalid(error) => Some(error),
        }
    }
}

impl<T> From<CodecResult<T>> for ValidationOutcome {
    fn from(result: CodecResult<T>) -> Self {
        match result {
            Ok(_) => Self::Valid,
            Err(error) => Self::Invalid(error),
        }
    }
}
