//! Adapters for plain string boundaries: route segments and generic text.

use super::{Boundary, CuitAdapter};
use crate::cuit::CuitNumber;
use crate::error::CodecResult;
use log::debug;

/// Converts between [`CuitNumber`] and a request path segment.
///
/// The segment is expected to be percent-decoded already, which is what
/// routers hand to their extractors. No trimming happens here: a segment such
/// as `"20 31111111 7"` is rejected for its spaces.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteSegmentAdapter;

impl RouteSegmentAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl CuitAdapter for RouteSegmentAdapter {
    type Raw = str;
    type Encoded = String;

    fn boundary(&self) -> Boundary {
        Boundary::RouteSegment
    }

    fn decode(&self, raw: &str) -> CodecResult<CuitNumber> {
        CuitNumber::new(raw.to_string()).map_err(|error| {
            debug!("Route segment {:?} is not a CUIT: {:?}", raw, error.kind());
            error.into()
        })
    }

    fn encode(&self, cuit: &CuitNumber) -> String {
        cuit.formatted_value().to_string()
    }
}

/// Converts between [`CuitNumber`] and arbitrary text.
///
/// Used for query parameters, command-line arguments and configuration
/// values. Equivalent to [`str::parse`] and [`ToString::to_string`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextAdapter;

impl PlainTextAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl CuitAdapter for PlainTextAdapter {
    type Raw = str;
    type Encoded = String;

    fn boundary(&self) -> Boundary {
        Boundary::PlainText
    }

    fn decode(&self, raw: &str) -> CodecResult<CuitNumber> {
        Ok(raw.parse::<CuitNumber>()?)
    }

    fn encode(&self, cuit: &CuitNumber) -> String {
        cuit.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CodecError, ValidationError};

    #[test]
    fn test_route_segment_decode() {
        let adapter = RouteSegmentAdapter::new();
        let cuit = adapter.decode("3-3-1-2-3-4-5-6-7-8-0").unwrap();
        assert_eq!(cuit.formatted_value(), "33-12345678-0");
    }

    #[test]
    fn test_route_segment_does_not_trim() {
        let adapter = RouteSegmentAdapter::new();
        assert_eq!(
            adapter.decode(" 20311111117 ").unwrap_err(),
            CodecError::Invalid(ValidationError::InvalidCharacters)
        );
    }

    #[test]
    fn test_route_segment_messages() {
        let adapter = RouteSegmentAdapter::new();
        let cases = [
            ("20-31111111-8", "The CUIT's verification digit is wrong."),
            ("20-3111111-8", "The CUIT number must have 11 digits."),
            ("-----", "The CUIT number cannot be empty."),
            (
                "20_31111111_7",
                "The CUIT number cannot have other characters than numbers and dashes.",
            ),
        ];

        for (segment, message) in cases {
            let outcome = adapter.validate(segment);
            assert_eq!(outcome.error_message().as_deref(), Some(message));
        }
    }

    #[test]
    fn test_plain_text_round_trip() {
        let adapter = PlainTextAdapter::new();
        let cuit = adapter.decode("20311111117").unwrap();
        let text = adapter.encode(&cuit);
        assert_eq!(text, "20-31111111-7");
        assert_eq!(adapter.decode(&text).unwrap(), cuit);
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(RouteSegmentAdapter::new().boundary(), Boundary::RouteSegment);
        assert_eq!(PlainTextAdapter::new().boundary(), Boundary::PlainText);
    }
}
