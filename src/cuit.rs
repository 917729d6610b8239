//! CuitNumber value object for Argentine tax identifiers.
//!
//! This module provides a type-safe wrapper around CUIT numbers with built-in
//! validation. A `CuitNumber` keeps three views of the same identifier: the
//! exact input, the dash-free digits and the canonical `NN-NNNNNNNN-N` form.

use crate::error::{CodecError, ValidationError, ValidationResult};
use crate::validation::{self, CUIT_LENGTH, SEPARATOR};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A validated CUIT number.
///
/// CuitNumber enforces validation at construction time, ensuring that only
/// well-formed identifiers with a correct verification digit can exist in the
/// system.
///
/// ## Validation Rules
///
/// - A value must be supplied
/// - Dashes may appear anywhere and are ignored
/// - After removing dashes, exactly 11 ASCII digits must remain
/// - The last digit must match the modulo-11 verification digit
///
/// ## Equality
///
/// Dash placement carries no meaning: two numbers are equal when their
/// simplified digits are equal, whatever their original input looked like.
///
/// ## Examples
///
/// ```rust
/// use cuit_number::CuitNumber;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let cuit = CuitNumber::new("3-3-1-2-3-4-5-6-7-8-0".to_string())?;
///     assert_eq!(cuit.simplified_value(), "33123456780");
///     assert_eq!(cuit.to_string(), "33-12345678-0");
///
///     // Invalid verification digit - returns ValidationError
///     let invalid = CuitNumber::new("20-31111111-8".to_string());
///     assert!(invalid.is_err());
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CuitNumber {
    original: String,
    simplified: String,
    formatted: String,
}

impl CuitNumber {
    /// Create a new CuitNumber with validation.
    ///
    /// This is the primary constructor that enforces all validation rules.
    /// Use this method when creating CuitNumber instances from untrusted input.
    ///
    /// # Arguments
    ///
    /// * `value` - The string value to validate, with or without dashes
    ///
    /// # Returns
    ///
    /// * `Ok(CuitNumber)` - If the value is a valid CUIT
    /// * `Err(ValidationError)` - The first rule the value violates
    pub fn new(value: String) -> ValidationResult<Self> {
        let simplified = validation::validate_number(Some(&value))?;
        Ok(Self::from_parts(value, simplified))
    }

    /// Create a CuitNumber from a value that may be absent.
    ///
    /// `None` fails with [`ValidationError::NullInput`]; anything else goes
    /// through [`CuitNumber::new`].
    pub fn from_optional(value: Option<String>) -> ValidationResult<Self> {
        match value {
            Some(value) => Self::new(value),
            None => Err(ValidationError::NullInput),
        }
    }

    fn from_parts(original: String, simplified: String) -> Self {
        let formatted = format!(
            "{}{sep}{}{sep}{}",
            &simplified[..2],
            &simplified[2..CUIT_LENGTH - 1],
            &simplified[CUIT_LENGTH - 1..],
            sep = SEPARATOR
        );

        Self {
            original,
            simplified,
            formatted,
        }
    }

    /// The exact string this number was built from.
    pub fn original_value(&self) -> &str {
        &self.original
    }

    /// The 11 digits without any dash.
    ///
    /// This is the form handed to downstream collaborators such as the tax
    /// information provider.
    pub fn simplified_value(&self) -> &str {
        &self.simplified
    }

    /// The canonical `NN-NNNNNNNN-N` representation.
    pub fn formatted_value(&self) -> &str {
        &self.formatted
    }

    /// The trailing verification digit.
    pub fn verification_digit(&self) -> u8 {
        self.simplified.as_bytes()[CUIT_LENGTH - 1] - b'0'
    }

    /// Consume the CuitNumber and keep only its simplified digits.
    pub fn into_simplified(self) -> String {
        self.simplified
    }
}

impl PartialEq for CuitNumber {
    fn eq(&self, other: &Self) -> bool {
        self.simplified == other.simplified
    }
}

impl Eq for CuitNumber {}

impl Hash for CuitNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.simplified.hash(state);
    }
}

impl fmt::Display for CuitNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted)
    }
}

impl FromStr for CuitNumber {
    type Err = ValidationError;

    fn from_str(value: &str) -> ValidationResult<Self> {
        Self::new(value.to_string())
    }
}

impl TryFrom<String> for CuitNumber {
    type Error = ValidationError;

    fn try_from(value: String) -> ValidationResult<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for CuitNumber {
    type Error = ValidationError;

    fn try_from(value: &str) -> ValidationResult<Self> {
        Self::new(value.to_string())
    }
}

impl Serialize for CuitNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.formatted)
    }
}

impl<'de> Deserialize<'de> for CuitNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Self-describing formats go through `deserialize_any` so non-string
        // tokens reach the visitor and get our own error message. Binary
        // formats carry no type tags and can only be asked for a string.
        if deserializer.is_human_readable() {
            deserializer.deserialize_any(CuitNumberVisitor)
        } else {
            deserializer.deserialize_str(CuitNumberVisitor)
        }
    }
}

struct CuitNumberVisitor;

impl CuitNumberVisitor {
    fn reject<E: de::Error>(found: &'static str) -> Result<CuitNumber, E> {
        Err(E::custom(CodecError::unexpected_shape(found)))
    }
}

impl<'de> Visitor<'de> for CuitNumberVisitor {
    type Value = CuitNumber;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a CUIT number as a string")
    }

    fn visit_str<E>(self, value: &str) -> Result<CuitNumber, E>
    where
        E: de::Error,
    {
        CuitNumber::new(value.to_string()).map_err(|e| E::custom(CodecError::from(e)))
    }

    fn visit_string<E>(self, value: String) -> Result<CuitNumber, E>
    where
        E: de::Error,
    {
        CuitNumber::new(value).map_err(|e| E::custom(CodecError::from(e)))
    }

    fn visit_bool<E: de::Error>(self, _value: bool) -> Result<CuitNumber, E> {
        Self::reject("a boolean")
    }

    fn visit_i64<E: de::Error>(self, _value: i64) -> Result<CuitNumber, E> {
        Self::reject("a number")
    }

    fn visit_u64<E: de::Error>(self, _value: u64) -> Result<CuitNumber, E> {
        Self::reject("a number")
    }

    fn visit_f64<E: de::Error>(self, _value: f64) -> Result<CuitNumber, E> {
        Self::reject("a number")
    }

    fn visit_unit<E: de::Error>(self) -> Result<CuitNumber, E> {
        Self::reject("null")
    }

    fn visit_none<E: de::Error>(self) -> Result<CuitNumber, E> {
        Self::reject("null")
    }

    fn visit_seq<A>(self, _seq: A) -> Result<CuitNumber, A::Error>
    where
        A: de::SeqAccess<'de>,
    {
        Self::reject("an array")
    }

    fn visit_map<A>(self, _map: A) -> Result<CuitNumber, A::Error>
    where
        A: de::MapAccess<'de>,
    {
        Self::reject("an object")
    }
}
