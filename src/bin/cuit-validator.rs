//! # CUIT Validator
//!
//! A command-line utility that checks CUIT numbers with the same rules the
//! library applies at every boundary.
//!
//! ## Usage
//!
//! ### Validate Arguments
//!
//! ```bash
//! cargo run --bin cuit-validator 20-31111111-7 33123456780
//! ```
//!
//! ### Validate Standard Input
//!
//! With no arguments, every non-empty line of standard input is validated:
//!
//! ```bash
//! cat cuits.txt | cargo run --bin cuit-validator
//! ```
//!
//! ## Output Examples
//!
//! ```text
//! ✓ 20-31111111-7
//! ❌ 20-31111111-8: The CUIT's verification digit is wrong.
//!
//! Validation Summary:
//!   Valid CUITs: 1
//!   Invalid CUITs: 1
//! ```
//!
//! ## Exit Codes
//!
//! - `0`: Every input is a valid CUIT
//! - `1`: At least one input is invalid, or standard input could not be read

use cuit_number::codec::{CuitAdapter, PlainTextAdapter};
use std::env;
use std::io::{self, BufRead};
use std::process;

/// Outcome of checking one input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Verdict {
    Valid(String),
    Invalid { input: String, message: String },
}

/// Verdicts for a whole run, in input order.
#[derive(Debug, Default)]
struct Report {
    verdicts: Vec<Verdict>,
}

impl Report {
    fn valid_count(&self) -> usize {
        self.verdicts
            .iter()
            .filter(|verdict| matches!(verdict, Verdict::Valid(_)))
            .count()
    }

    fn error_count(&self) -> usize {
        self.verdicts.len() - self.valid_count()
    }

    /// Non-zero as soon as a single input is invalid.
    fn exit_code(&self) -> i32 {
        if self.error_count() > 0 { 1 } else { 0 }
    }
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.iter().any(|arg| arg == "-h" || arg == "--help") {
        print_usage();
        return;
    }

    let inputs = match collect_inputs(args, io::stdin().lock()) {
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("Error reading standard input: {}", e);
            process::exit(1);
        }
    };

    if inputs.is_empty() {
        print_usage();
        process::exit(1);
    }

    let report = validate_inputs(&inputs);
    for verdict in &report.verdicts {
        match verdict {
            Verdict::Valid(formatted) => println!("✓ {}", formatted),
            Verdict::Invalid { input, message } => eprintln!("❌ {}: {}", input, message),
        }
    }

    if inputs.len() > 1 {
        println!("\nValidation Summary:");
        println!("  Valid CUITs: {}", report.valid_count());
        println!("  Invalid CUITs: {}", report.error_count());
    }

    process::exit(report.exit_code());
}

/// Arguments win; with none, every non-blank line of `reader` is an input.
fn collect_inputs<R: BufRead>(args: Vec<String>, reader: R) -> io::Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args);
    }

    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim_end_matches(['\r', '\n']);
        if !trimmed.trim().is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    Ok(lines)
}

fn validate_inputs(inputs: &[String]) -> Report {
    let adapter = PlainTextAdapter::new();
    let verdicts = inputs
        .iter()
        .map(|input| match adapter.decode(input) {
            Ok(cuit) => Verdict::Valid(adapter.encode(&cuit)),
            Err(e) => Verdict::Invalid {
                input: input.clone(),
                message: e.to_string(),
            },
        })
        .collect();

    Report { verdicts }
}

fn print_usage() {
    eprintln!("Usage: cuit-validator [CUIT...]");
    eprintln!();
    eprintln!("Validates each CUIT given as an argument, or each line of standard input.");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  cuit-validator 20-31111111-7");
    eprintln!("  cuit-validator 20311111117 33-12345678-0");
    eprintln!("  cat cuits.txt | cuit-validator");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn inputs(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn test_all_valid_exits_zero() {
        let report = validate_inputs(&inputs(&["20-31111111-7", "33123456780"]));

        assert_eq!(report.valid_count(), 2);
        assert_eq!(report.error_count(), 0);
        assert_eq!(report.exit_code(), 0);
        assert_eq!(report.verdicts[1], Verdict::Valid("33-12345678-0".to_string()));
    }

    #[test]
    fn test_any_invalid_exits_one() {
        let report = validate_inputs(&inputs(&["20-31111111-7", "20-31111111-8", "33123456780"]));

        assert_eq!(report.valid_count(), 2);
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.exit_code(), 1);
        assert_eq!(
            report.verdicts[1],
            Verdict::Invalid {
                input: "20-31111111-8".to_string(),
                message: "The CUIT's verification digit is wrong.".to_string(),
            }
        );
    }

    #[test]
    fn test_arguments_take_precedence_over_stdin() {
        let stdin = Cursor::new("33123456780\n");
        let collected = collect_inputs(inputs(&["20311111117"]), stdin).unwrap();
        assert_eq!(collected, inputs(&["20311111117"]));
    }

    #[test]
    fn test_stdin_skips_blank_lines() {
        let stdin = Cursor::new("20-31111111-7\r\n\n   \n20-3111111-8\n");
        let collected = collect_inputs(Vec::new(), stdin).unwrap();
        assert_eq!(collected, inputs(&["20-31111111-7", "20-3111111-8"]));

        let report = validate_inputs(&collected);
        assert_eq!(report.exit_code(), 1);
    }
}
