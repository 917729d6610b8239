//! Argentine CUIT tax identifiers for Rust.
//!
//! Provides a validated [`CuitNumber`] value type together with explicit
//! adapters for the places a CUIT crosses a system boundary: JSON bodies,
//! request paths and plain text.
//!
//! # Core Components
//!
//! - [`CuitNumber`] - Immutable, self-validating identifier
//! - [`validation`] - Ordered structural rules and the modulo-11 verification digit
//! - [`codec`] - Boundary adapters sharing the validate/decode/encode capability set
//! - [`binding`] - Field binders producing problem-details reports
//! - [`provider`] - Request description for the external tax information provider
//!
//! # Quick Start
//!
//! ```rust
//! use cuit_number::CuitNumber;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let cuit: CuitNumber = "20311111117".parse()?;
//! assert_eq!(cuit.to_string(), "20-31111111-7");
//! assert_eq!(serde_json::to_string(&cuit)?, "\"20-31111111-7\"");
//! # Ok(())
//! # }
//! ```
//!
//! # Logging
//!
//! The crate logs through the [`log`] facade at `debug` and `trace` level and
//! never installs a logger itself.

pub mod binding;
pub mod codec;
pub mod cuit;
pub mod error;
pub mod provider;
pub mod validation;

// Re-export commonly used types for convenience
pub use binding::{BindingResult, FieldError, ModelBinder, ValidationProblem};
pub use codec::{
    Boundary, CuitAdapter, JsonAdapter, PlainTextAdapter, RouteSegmentAdapter, ValidationOutcome,
};
pub use cuit::CuitNumber;
pub use error::{
    CodecError, CodecResult, ConfigError, ConfigResult, ValidationError, ValidationErrorKind,
    ValidationResult,
};
pub use provider::{TaxInfoProviderConfig, TaxInfoRequest};
