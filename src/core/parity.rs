//! Parity-weighted summation.
//!
//! Even indices contribute their own value, odd indices contribute twice
//! their value. `compute` is the loop every fixture carries;
//! `compute_closed_form` is the O(1) equivalent used to check it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest count accepted from config or the command line. Sits below the
/// first count whose sum overflows (~2.4e9).
pub const MAX_COMPUTE_N: i64 = 1_000_000_000;

/// Parity of an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    /// Classify a value. Negative odd values are odd.
    pub fn of(value: i64) -> Self {
        if value % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Parity::Even => "even",
            Parity::Odd => "odd",
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weight applied to a single index: even as-is, odd doubled.
fn weighted(i: i64) -> i64 {
    match Parity::of(i) {
        Parity::Even => i,
        Parity::Odd => i.wrapping_mul(2),
    }
}

/// Sum `i` for even `i` and `2*i` for odd `i` over `0..n`.
///
/// Negative `n` yields 0. Overflow wraps.
pub fn compute(n: i64) -> i64 {
    (0..n.max(0)).fold(0i64, |total, i| total.wrapping_add(weighted(i)))
}

/// Closed form of [`compute`].
///
/// With `e = ceil(n/2)` even indices and `o = floor(n/2)` odd ones, the sum
/// is `e*(e-1) + 2*o*o`. Evaluated in 128-bit and truncated, so it matches the
/// wrapping loop for every `n`.
pub fn compute_closed_form(n: i64) -> i64 {
    if n <= 0 {
        return 0;
    }
    let n = i128::from(n);
    let evens = (n + 1) / 2;
    let odds = n / 2;
    let total = evens * (evens - 1) + 2 * odds * odds;
    total as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_small_values() {
        assert_eq!(compute(0), 0);
        assert_eq!(compute(1), 0);
        assert_eq!(compute(2), 2);
        assert_eq!(compute(3), 4);
        assert_eq!(compute(10), 70);
    }

    #[test]
    fn test_compute_negative_is_zero() {
        assert_eq!(compute(-1), 0);
        assert_eq!(compute(i64::MIN), 0);
        assert_eq!(compute_closed_form(-42), 0);
    }

    #[test]
    fn test_closed_form_matches_loop() {
        for n in 0..500 {
            assert_eq!(compute(n), compute_closed_form(n), "n = {}", n);
        }
    }

    #[test]
    fn test_closed_form_wraps_at_large_n() {
        // n = 2^32: e = o = 2^31, sum = 3 * 2^62 - 2^31, which wraps past i64::MAX
        assert_eq!(compute_closed_form(1 << 32), -4611686020574871552);
        // n = 2^63 - 1: e = 2^62, o = 2^62 - 1, sum = -2^62 + 2 modulo 2^64
        assert_eq!(compute_closed_form(i64::MAX), -4611686018427387902);
        // n = 2^63 - 2: drops the final term 2^63 - 2 (an even index, not doubled)
        assert_eq!(compute_closed_form(i64::MAX - 1), 4611686018427387908);
    }

    #[test]
    fn test_parity_of_negative_values() {
        assert_eq!(Parity::of(-3), Parity::Odd);
        assert_eq!(Parity::of(-4), Parity::Even);
        assert_eq!(Parity::of(0), Parity::Even);
    }

    #[test]
    fn test_parity_display() {
        assert_eq!(Parity::Even.to_string(), "even");
        assert_eq!(Parity::Odd.to_string(), "odd");
    }
}
