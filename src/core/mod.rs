pub mod errors;
pub mod greeting;
pub mod numbers;
pub mod parity;
pub mod summary;

use serde::{Deserialize, Serialize};

pub use errors::{Error, Result};
pub use greeting::Greeter;
pub use numbers::{parse_numbers, parse_numbers_with, ParsePolicy, ParsedNumbers, RejectedSegment};
pub use parity::{compute, compute_closed_form, Parity, MAX_COMPUTE_N};
pub use summary::{bucket_of, compute_summary, BucketHistogram, Summary, BUCKET_WIDTH};

/// An `even: i` / `odd: i` line of the demo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParityMarker {
    pub index: u32,
    pub parity: Parity,
}

impl ParityMarker {
    pub fn new(index: u32) -> Self {
        Self {
            index,
            parity: Parity::of(i64::from(index)),
        }
    }
}

/// Everything one demo run prints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoReport {
    pub greeting: String,
    pub iterations: Vec<u32>,
    pub parity_markers: Vec<ParityMarker>,
    pub compute_n: i64,
    pub value: i64,
    pub values: Vec<i64>,
    pub summary: Summary,
}

/// Result of `compute <n>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputeReport {
    pub n: i64,
    pub value: i64,
}

/// Result of `summarize <text>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub values: Vec<i64>,
    pub rejected: Vec<RejectedSegment>,
    pub summary: Summary,
}

impl SummaryReport {
    pub fn from_parsed(parsed: ParsedNumbers) -> Self {
        let summary = compute_summary(&parsed.values);
        Self {
            values: parsed.values,
            rejected: parsed.rejected,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parity_marker_classifies_index() {
        assert_eq!(ParityMarker::new(0).parity, Parity::Even);
        assert_eq!(ParityMarker::new(3).parity, Parity::Odd);
    }

    #[test]
    fn test_summary_report_keeps_rejections() {
        let parsed = parse_numbers_with("4, nope, 6", ParsePolicy::Lenient).unwrap();
        let report = SummaryReport::from_parsed(parsed);
        assert_eq!(report.values, vec![4, 6]);
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.summary.even, 2);
        assert_eq!(report.summary.count(), report.values.len());
    }
}
