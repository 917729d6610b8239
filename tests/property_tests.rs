//! Property-based tests for the CUIT validation rules and codecs.
//!
//! Uses proptest to generate digit strings, dash placements and stray
//! characters, checking that rule precedence and round-trip guarantees hold
//! for every input rather than a handful of fixtures.

mod common;

use common::{complete_cuit, insert_dashes};
use cuit_number::codec::{CuitAdapter, JsonAdapter, PlainTextAdapter, RouteSegmentAdapter};
use cuit_number::validation::compute_verification_digit;
use cuit_number::{CuitNumber, ValidationError};
use proptest::prelude::*;

/// Ten-digit prefixes that have a verification digit.
fn completable_prefix() -> impl Strategy<Value = String> {
    "[0-9]{10}".prop_filter("prefix has a verification digit", |prefix| {
        compute_verification_digit(prefix).is_some()
    })
}

/// Valid simplified CUITs.
fn valid_cuit() -> impl Strategy<Value = String> {
    completable_prefix().prop_map(|prefix| complete_cuit(&prefix).unwrap_or_default())
}

/// Digit strings of any length except 11.
fn wrong_length_digits() -> impl Strategy<Value = String> {
    prop_oneof!["[0-9]{1,10}", "[0-9]{12,20}"]
}

/// Characters that are neither ASCII digits nor dashes.
fn stray_char() -> impl Strategy<Value = char> {
    any::<char>().prop_filter("not a digit or dash", |c| !c.is_ascii_digit() && *c != '-')
}

proptest! {
    #[test]
    fn prop_wrong_length_is_reported(
        digits in wrong_length_digits(),
        mask in prop::collection::vec(any::<bool>(), 0..20),
    ) {
        let input = insert_dashes(&digits, &mask);
        prop_assert_eq!(CuitNumber::new(input).unwrap_err(), ValidationError::WrongLength);
    }

    #[test]
    fn prop_invalid_characters_take_precedence(
        digits in "[0-9]{0,15}",
        stray in stray_char(),
        position in any::<prop::sample::Index>(),
    ) {
        let mut input: Vec<char> = digits.chars().collect();
        let at = position.index(input.len() + 1);
        input.insert(at, stray);
        let input: String = input.into_iter().collect();

        let error = CuitNumber::new(input.clone()).unwrap_err();
        if input.trim().is_empty() {
            prop_assert_eq!(error, ValidationError::EmptyNumber);
        } else {
            prop_assert_eq!(error, ValidationError::InvalidCharacters);
        }
    }

    #[test]
    fn prop_wrong_verification_digit_is_bad_checksum(
        prefix in completable_prefix(),
        offset in 1u8..10,
    ) {
        let expected = compute_verification_digit(&prefix).unwrap_or_default();
        let wrong = (expected + offset) % 10;
        let input = format!("{}{}", prefix, wrong);

        prop_assert_eq!(CuitNumber::new(input).unwrap_err(), ValidationError::BadChecksum);
    }

    #[test]
    fn prop_dash_placement_does_not_matter(
        digits in valid_cuit(),
        mask_a in prop::collection::vec(any::<bool>(), 11),
        mask_b in prop::collection::vec(any::<bool>(), 11),
    ) {
        let a = CuitNumber::new(insert_dashes(&digits, &mask_a)).unwrap();
        let b = CuitNumber::new(insert_dashes(&digits, &mask_b)).unwrap();

        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.formatted_value(), b.formatted_value());
        prop_assert_eq!(a.simplified_value(), digits.as_str());
    }

    #[test]
    fn prop_formatted_shape(digits in valid_cuit()) {
        let cuit = CuitNumber::new(digits.clone()).unwrap();
        let formatted = cuit.formatted_value();

        prop_assert_eq!(formatted.len(), 13);
        prop_assert_eq!(&formatted[2..3], "-");
        prop_assert_eq!(&formatted[11..12], "-");
        prop_assert_eq!(formatted.replace('-', ""), digits);
    }

    #[test]
    fn prop_json_round_trip(
        digits in valid_cuit(),
        mask in prop::collection::vec(any::<bool>(), 11),
    ) {
        let cuit = CuitNumber::new(insert_dashes(&digits, &mask)).unwrap();

        let json = serde_json::to_string(&cuit).unwrap();
        let decoded: CuitNumber = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(&decoded, &cuit);
        prop_assert_eq!(decoded.formatted_value(), cuit.formatted_value());

        let adapter = JsonAdapter::new();
        prop_assert_eq!(adapter.decode(&adapter.encode(&cuit)).unwrap(), cuit);
    }

    #[test]
    fn prop_text_adapters_round_trip(digits in valid_cuit()) {
        let cuit = CuitNumber::new(digits).unwrap();

        let route = RouteSegmentAdapter::new();
        prop_assert_eq!(route.decode(&route.encode(&cuit)).unwrap(), cuit.clone());

        let text = PlainTextAdapter::new();
        prop_assert_eq!(text.decode(&text.encode(&cuit)).unwrap(), cuit);
    }

    #[test]
    fn prop_json_numbers_never_decode(digits in valid_cuit()) {
        let number: u64 = digits.parse().unwrap();
        let raw = number.to_string();

        prop_assert!(serde_json::from_str::<CuitNumber>(&raw).is_err());
        prop_assert!(!JsonAdapter::new().validate(&serde_json::json!(number)).is_valid());
    }
}
