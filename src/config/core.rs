use serde::{Deserialize, Serialize};

use crate::core::errors::{Error, Result};
use crate::core::greeting::DEFAULT_PREFIX;
use crate::core::{ParsePolicy, MAX_COMPUTE_N};
use crate::io::output::OutputFormat;

/// Upper bound for `iterations` and `parity_markers`
pub const MAX_MARKERS: u32 = 10_000;

pub const DEFAULT_NUMBERS: &str = "1,2,3,4,5,6,7,8,9,10,21,22,23,24,25,26,27,28,29,30";

/// Root configuration structure for fixture-calc
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FixtureConfig {
    /// Inputs of the demo driver
    #[serde(default)]
    pub demo: DemoConfig,

    /// Number list parsing
    #[serde(default)]
    pub parsing: ParsingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl FixtureConfig {
    pub fn validate(&self) -> Result<()> {
        self.demo.validate()
    }
}

/// Demo driver inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default = "default_greeting_prefix")]
    pub greeting_prefix: String,

    #[serde(default = "default_name")]
    pub name: String,

    /// Number of `i: n` lines
    #[serde(default = "default_iterations")]
    pub iterations: u32,

    /// Number of `even: n` / `odd: n` lines
    #[serde(default = "default_parity_markers")]
    pub parity_markers: u32,

    /// Argument passed to the parity sum
    #[serde(default = "default_compute_n")]
    pub compute_n: i64,

    /// Comma-separated list to summarize
    #[serde(default = "default_numbers")]
    pub numbers: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            greeting_prefix: default_greeting_prefix(),
            name: default_name(),
            iterations: default_iterations(),
            parity_markers: default_parity_markers(),
            compute_n: default_compute_n(),
            numbers: default_numbers(),
        }
    }
}

impl DemoConfig {
    fn validate(&self) -> Result<()> {
        if self.greeting_prefix.trim().is_empty() {
            return Err(Error::configuration("demo.greeting_prefix must not be empty"));
        }
        if self.name.trim().is_empty() {
            return Err(Error::configuration("demo.name must not be empty"));
        }
        if self.iterations > MAX_MARKERS {
            return Err(Error::configuration(format!(
                "demo.iterations must be at most {}, got {}",
                MAX_MARKERS, self.iterations
            )));
        }
        if self.parity_markers > MAX_MARKERS {
            return Err(Error::configuration(format!(
                "demo.parity_markers must be at most {}, got {}",
                MAX_MARKERS, self.parity_markers
            )));
        }
        if self.compute_n > MAX_COMPUTE_N {
            return Err(Error::configuration(format!(
                "demo.compute_n must be at most {}, got {}",
                MAX_COMPUTE_N, self.compute_n
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ParsingConfig {
    #[serde(default)]
    pub policy: ParsePolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_greeting_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

fn default_name() -> String {
    "world".to_string()
}

fn default_iterations() -> u32 {
    3
}

fn default_parity_markers() -> u32 {
    5
}

fn default_compute_n() -> i64 {
    10
}

fn default_numbers() -> String {
    DEFAULT_NUMBERS.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixture_inputs() {
        let config = FixtureConfig::default();
        assert_eq!(config.demo.greeting_prefix, "Hello");
        assert_eq!(config.demo.name, "world");
        assert_eq!(config.demo.iterations, 3);
        assert_eq!(config.demo.parity_markers, 5);
        assert_eq!(config.demo.compute_n, 10);
        assert_eq!(config.demo.numbers, DEFAULT_NUMBERS);
        assert_eq!(config.parsing.policy, ParsePolicy::Strict);
        assert_eq!(config.output.format, OutputFormat::Terminal);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_marker_counts_are_capped() {
        let mut config = FixtureConfig::default();
        config.demo.iterations = MAX_MARKERS;
        config.demo.parity_markers = MAX_MARKERS;
        assert!(config.validate().is_ok());

        config.demo.iterations = 4_000_000_000;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("demo.iterations must be at most 10000"));

        config.demo.iterations = 3;
        config.demo.parity_markers = MAX_MARKERS + 1;
        assert!(matches!(config.validate(), Err(Error::Configuration(_))));
    }

    #[test]
    fn test_compute_n_is_capped() {
        let mut config = FixtureConfig::default();
        config.demo.compute_n = MAX_COMPUTE_N;
        assert!(config.validate().is_ok());

        config.demo.compute_n = i64::MAX;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("demo.compute_n must be at most"));

        // Negative counts are valid and yield 0
        config.demo.compute_n = i64::MIN;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let mut config = FixtureConfig::default();
        config.demo.name = "  ".to_string();
        assert!(matches!(config.validate(), Err(Error::Configuration(_))));
    }
}
