//! Summary aggregation over a list of integers.
//!
//! The summary carries the total, even/odd counts and the lower bound of the
//! most populated width-10 bucket. Bucket ties resolve to the bucket seen
//! first, so the histogram must iterate in insertion order.

use super::parity::Parity;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Width of a histogram bucket.
pub const BUCKET_WIDTH: i64 = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: i64,
    pub even: usize,
    pub odd: usize,
    pub top_bucket: i64,
}

impl Summary {
    /// Number of values the summary was computed from.
    pub fn count(&self) -> usize {
        self.even + self.odd
    }
}

/// Lower bound of the bucket holding `value`, using floor division.
///
/// The lowest eight values belong to a bucket below `i64::MIN`; they report
/// `i64::MIN` instead.
pub fn bucket_of(value: i64) -> i64 {
    value.saturating_sub(value.rem_euclid(BUCKET_WIDTH))
}

/// Insertion-ordered bucket counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BucketHistogram {
    entries: Vec<(i64, usize)>,
    index: HashMap<i64, usize>,
}

impl BucketHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values(values: &[i64]) -> Self {
        let mut histogram = Self::new();
        for &value in values {
            histogram.record(value);
        }
        histogram
    }

    /// Count `value` in its bucket.
    pub fn record(&mut self, value: i64) {
        let bucket = bucket_of(value);
        match self.index.get(&bucket) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(bucket, self.entries.len());
                self.entries.push((bucket, 1));
            }
        }
    }

    /// `(bucket, count)` pairs in first-seen order.
    pub fn entries(&self) -> &[(i64, usize)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bucket with the strictly greatest count; earliest wins ties.
    /// Empty histograms report bucket 0.
    pub fn top_bucket(&self) -> i64 {
        let mut top = 0;
        let mut top_count = 0;
        for &(bucket, count) in &self.entries {
            if count > top_count {
                top_count = count;
                top = bucket;
            }
        }
        top
    }
}

/// Summarize `values`. Total wraps on overflow.
pub fn compute_summary(values: &[i64]) -> Summary {
    let mut summary = Summary::default();
    for &value in values {
        summary.total = summary.total.wrapping_add(value);
        match Parity::of(value) {
            Parity::Even => summary.even += 1,
            Parity::Odd => summary.odd += 1,
        }
    }

    summary.top_bucket = BucketHistogram::from_values(values).top_bucket();
    summary
}
