//! Shared fixtures and helpers for the CUIT integration tests.

#![allow(dead_code)]

use cuit_number::validation::compute_verification_digit;

/// Valid CUITs as they might arrive from users, with their expected views.
///
/// Each entry is `(original, simplified, formatted)`.
pub const VALID_CUITS: &[(&str, &str, &str)] = &[
    ("20311111117", "20311111117", "20-31111111-7"),
    ("33123456780", "33123456780", "33-12345678-0"),
    ("20-31111111-7", "20311111117", "20-31111111-7"),
    ("3-3-1-2-3-4-5-6-7-8-0", "33123456780", "33-12345678-0"),
];

pub const BAD_CHECKSUM_CUITS: &[&str] = &["20-31111111-8", "20-31111111-6", "20-31111111-1"];

pub const WRONG_LENGTH_CUITS: &[&str] = &["20-3111111-8", "20-311111111-6"];

pub const BLANK_CUITS: &[&str] = &["", "    ", "---", " - - - ", "-", "-----"];

pub const INVALID_CHARACTER_CUITS: &[&str] = &[
    "1234a5890",
    "1234a",
    "20 31111111 7",
    "20x31111111x7",
    "20,31111111,7",
    "20_31111111_7",
];

/// Complete a ten-digit prefix into a valid CUIT, if the prefix has one.
pub fn complete_cuit(prefix: &str) -> Option<String> {
    compute_verification_digit(prefix).map(|digit| format!("{}{}", prefix, digit))
}

/// Spread dashes through a digit string: one after each position flagged in `mask`.
pub fn insert_dashes(digits: &str, mask: &[bool]) -> String {
    let mut out = String::with_capacity(digits.len() * 2);
    for (i, c) in digits.chars().enumerate() {
        out.push(c);
        if mask.get(i).copied().unwrap_or(false) {
            out.push('-');
        }
    }
    out
}

/// Install a test logger once; honours `RUST_LOG`.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
