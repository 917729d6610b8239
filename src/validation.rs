//! Structural and checksum rules for CUIT numbers.
//!
//! This module is the single source of truth for "is this string a CUIT".
//! [`CuitNumber`](crate::CuitNumber) construction, the boundary adapters in
//! [`codec`](crate::codec), the request binder and the command-line validator
//! all run [`validate_number`], so validate-only checks and construction can
//! never disagree.
//!
//! ## Rules
//!
//! Evaluated in order, the first failure wins:
//!
//! 1. The value must be present ([`ValidationError::NullInput`])
//! 2. Once dashes are removed it must not be blank ([`ValidationError::EmptyNumber`])
//! 3. Only ASCII digits may remain ([`ValidationError::InvalidCharacters`])
//! 4. Exactly 11 of them ([`ValidationError::WrongLength`])
//! 5. The last one must be the verification digit ([`ValidationError::BadChecksum`])

use crate::error::{ValidationError, ValidationResult};

/// Number of digits in a simplified CUIT.
pub const CUIT_LENGTH: usize = 11;

/// The only separator accepted between digits.
pub const SEPARATOR: char = '-';

/// Weights applied to the first ten digits when computing the verification digit.
pub const WEIGHTS: [u32; 10] = [5, 4, 3, 2, 7, 6, 5, 4, 3, 2];

/// Remove every dash from the input.
///
/// No other character is touched; whitespace and letters survive so that the
/// later rules can reject them.
pub fn simplify(value: &str) -> String {
    value.chars().filter(|c| *c != SEPARATOR).collect()
}

/// Run the full ordered rule set against a raw value.
///
/// Returns the simplified 11-digit candidate when every rule passes.
///
/// # Examples
///
/// ```rust
/// use cuit_number::validation::validate_number;
/// use cuit_number::error::ValidationError;
///
/// assert_eq!(validate_number(Some("20-31111111-7")).unwrap(), "20311111117");
/// assert_eq!(validate_number(Some("---")), Err(ValidationError::EmptyNumber));
/// assert_eq!(validate_number(None), Err(ValidationError::NullInput));
/// ```
pub fn validate_number(value: Option<&str>) -> ValidationResult<String> {
    let value = value.ok_or(ValidationError::NullInput)?;
    let candidate = simplify(value);

    if candidate.trim().is_empty() {
        return Err(ValidationError::EmptyNumber);
    }

    if !candidate.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidCharacters);
    }

    // Only ASCII digits are left, so bytes and characters coincide
    if candidate.len() != CUIT_LENGTH {
        return Err(ValidationError::WrongLength);
    }

    if !is_verification_digit_valid(&candidate) {
        return Err(ValidationError::BadChecksum);
    }

    Ok(candidate)
}

/// Validate-only check.
pub fn is_valid(value: Option<&str>) -> bool {
    validate_number(value).is_ok()
}

/// Check the 11th digit of a simplified CUIT against its first ten digits.
///
/// Inputs that are not exactly 11 ASCII digits are reported as invalid rather
/// than causing a panic.
pub fn is_verification_digit_valid(simplified: &str) -> bool {
    let bytes = simplified.as_bytes();
    if bytes.len() != CUIT_LENGTH || !bytes.iter().all(u8::is_ascii_digit) {
        return false;
    }

    let expected = compute_verification_digit(&simplified[..CUIT_LENGTH - 1]);
    expected == Some(bytes[CUIT_LENGTH - 1] - b'0')
}

/// Compute the verification digit for a ten-digit prefix.
///
/// Returns `None` if the prefix is not ten ASCII digits, or if the modulo-11
/// remainder works out to 10: no single digit can complete such a prefix.
///
/// ```rust
/// use cuit_number::validation::compute_verification_digit;
///
/// assert_eq!(compute_verification_digit("2031111111"), Some(7));
/// assert_eq!(compute_verification_digit("3312345678"), Some(0));
/// assert_eq!(compute_verification_digit("20311"), None);
/// ```
pub fn compute_verification_digit(prefix: &str) -> Option<u8> {
    let bytes = prefix.as_bytes();
    if bytes.len() != WEIGHTS.len() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }

    let sum: u32 = bytes
        .iter()
        .zip(WEIGHTS.iter())
        .map(|(digit, weight)| u32::from(digit - b'0') * weight)
        .sum();

    match 11 - (sum % 11) {
        11 => Some(0),
        10 => None,
        digit => Some(digit as u8),
    }
}
