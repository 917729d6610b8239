//! Error types for CUIT validation, codecs and provider configuration.
//!
//! Every failure in this crate is a deterministic function of its input, so
//! none of these errors are retryable. The `Display` text of
//! [`ValidationError`] is part of the public contract: request-binding layers
//! surface it verbatim as the field-level error message.

/// Validation errors produced by the CUIT construction pipeline.
///
/// Variants are listed in evaluation order. When an input breaks several rules
/// only the first failing rule is reported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// No value was supplied at all
    #[error("Value cannot be null.")]
    NullInput,

    /// Nothing but dashes and whitespace
    #[error("The CUIT number cannot be empty.")]
    EmptyNumber,

    /// Something other than ASCII digits once dashes are removed
    #[error("The CUIT number cannot have other characters than numbers and dashes.")]
    InvalidCharacters,

    /// Digit count is not 11
    #[error("The CUIT number must have 11 digits.")]
    WrongLength,

    /// The 11th digit does not match the modulo-11 checksum
    #[error("The CUIT's verification digit is wrong.")]
    BadChecksum,
}

/// Stable, machine-readable codes for [`ValidationError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    NullInput,
    EmptyNumber,
    InvalidCharacters,
    WrongLength,
    BadChecksum,
}

impl ValidationErrorKind {
    /// Upper snake case code, suitable for logs and error payloads.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NullInput => "NULL_INPUT",
            Self::EmptyNumber => "EMPTY_NUMBER",
            Self::InvalidCharacters => "INVALID_CHARACTERS",
            Self::WrongLength => "WRONG_LENGTH",
            Self::BadChecksum => "BAD_CHECKSUM",
        }
    }
}

impl ValidationError {
    /// The kind of rule that rejected the input.
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::NullInput => ValidationErrorKind::NullInput,
            Self::EmptyNumber => ValidationErrorKind::EmptyNumber,
            Self::InvalidCharacters => ValidationErrorKind::InvalidCharacters,
            Self::WrongLength => ValidationErrorKind::WrongLength,
            Self::BadChecksum => ValidationErrorKind::BadChecksum,
        }
    }
}

/// Errors raised when converting between CUIT numbers and their external
/// representations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The external value was not a string (number, null, boolean, ...)
    #[error("Expected a CUIT number as a string, found {found}.")]
    UnexpectedShape { found: &'static str },

    /// The string was rejected by the validation pipeline
    #[error("{0}")]
    Invalid(#[from] ValidationError),
}

impl CodecError {
    /// Create an unexpected shape error
    pub fn unexpected_shape(found: &'static str) -> Self {
        Self::UnexpectedShape { found }
    }

    /// The underlying validation error, if the value was a string.
    pub fn validation_error(&self) -> Option<&ValidationError> {
        match self {
            Self::Invalid(error) => Some(error),
            Self::UnexpectedShape { .. } => None,
        }
    }
}

/// Errors in the tax information provider configuration.
///
/// These are typically deployment mistakes and should surface at startup
/// rather than on the first request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required setting is empty
    #[error("Tax info provider setting '{setting}' cannot be empty")]
    MissingSetting { setting: &'static str },

    /// The URI template never mentions the CUIT
    #[error("URI template '{template}' does not reference the {{cuit}} parameter")]
    MissingCuitParameter { template: String },

    /// The URI template references a parameter we cannot expand
    #[error("URI template '{template}' references unknown parameter '{parameter}'")]
    UnknownParameter { template: String, parameter: String },

    /// A `{` without a matching `}`
    #[error("URI template '{template}' has an unterminated expression")]
    UnterminatedExpression { template: String },
}

// Result type aliases for convenience
pub type ValidationResult<T> = Result<T, ValidationError>;
pub type CodecResult<T> = Result<T, CodecError>;
pub type ConfigResult<T> = Result<T, ConfigError>;
