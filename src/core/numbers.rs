//! Comma-separated integer list parsing.

use super::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How malformed segments are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParsePolicy {
    /// The first malformed segment fails the whole parse
    #[default]
    Strict,
    /// Malformed segments are set aside and parsing continues
    Lenient,
}

/// A segment that could not be parsed under [`ParsePolicy::Lenient`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedSegment {
    /// Index among the non-empty segments of the input
    pub position: usize,
    pub text: String,
}

/// Parse result: accepted values in input order plus rejected segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedNumbers {
    pub values: Vec<i64>,
    pub rejected: Vec<RejectedSegment>,
}

impl ParsedNumbers {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Non-empty, trimmed segments of a comma-separated list.
fn segments(text: &str) -> impl Iterator<Item = &str> {
    text.split(',').map(str::trim).filter(|s| !s.is_empty())
}

/// Parse a comma-separated list of base-10 integers.
///
/// Whitespace around segments is ignored and empty segments are skipped.
/// Any malformed segment is an error.
pub fn parse_numbers(text: &str) -> Result<Vec<i64>> {
    parse_numbers_with(text, ParsePolicy::Strict).map(|parsed| parsed.values)
}

/// Parse a comma-separated list under the given policy.
pub fn parse_numbers_with(text: &str, policy: ParsePolicy) -> Result<ParsedNumbers> {
    let mut parsed = ParsedNumbers::default();

    for (position, segment) in segments(text).enumerate() {
        match segment.parse::<i64>() {
            Ok(value) => parsed.values.push(value),
            Err(source) => match policy {
                ParsePolicy::Strict => {
                    return Err(Error::InvalidNumber {
                        position,
                        segment: segment.to_string(),
                        source,
                    })
                }
                ParsePolicy::Lenient => {
                    debug!(position, segment, "Rejecting malformed segment");
                    parsed.rejected.push(RejectedSegment {
                        position,
                        text: segment.to_string(),
                    });
                }
            },
        }
    }

    Ok(parsed)
}
