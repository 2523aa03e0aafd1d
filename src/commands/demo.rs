//! The demo driver: greeting, markers, parity sum and list summary.

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::config::DemoConfig;
use crate::core::{
    compute, compute_summary, parse_numbers_with, DemoReport, Greeter, ParityMarker, ParsePolicy,
    RejectedSegment,
};
use crate::io::output::OutputWriter;

/// Build everything a demo run prints, without printing it.
pub fn build_demo_report(config: &DemoConfig, policy: ParsePolicy) -> Result<DemoReport> {
    let greeting = Greeter::new(config.greeting_prefix.as_str()).greet(&config.name);
    let iterations = (0..config.iterations).collect();
    let parity_markers = (0..config.parity_markers).map(ParityMarker::new).collect();
    let value = compute(config.compute_n);

    let parsed = parse_numbers_with(&config.numbers, policy)
        .context("Failed to parse demo.numbers")?;
    log_rejections(&parsed.rejected);
    let summary = compute_summary(&parsed.values);

    Ok(DemoReport {
        greeting,
        iterations,
        parity_markers,
        compute_n: config.compute_n,
        value,
        values: parsed.values,
        summary,
    })
}

pub fn run_demo(
    config: &DemoConfig,
    policy: ParsePolicy,
    writer: &mut dyn OutputWriter,
) -> Result<()> {
    let report = build_demo_report(config, policy)?;
    info!(value = report.value, total = report.summary.total, "Demo computed");
    writer.write_demo(&report)
}

pub(crate) fn log_rejections(rejected: &[RejectedSegment]) {
    for segment in rejected {
        warn!(
            "Skipping malformed number {:?} at position {}",
            segment.text, segment.position
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Parity, Summary};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_demo_report() {
        let report = build_demo_report(&DemoConfig::default(), ParsePolicy::Strict).unwrap();
        assert_eq!(report.greeting, "Hello, world");
        assert_eq!(report.iterations, vec![0, 1, 2]);
        assert_eq!(report.parity_markers.len(), 5);
        assert_eq!(report.parity_markers[4].parity, Parity::Even);
        assert_eq!(report.value, 70);
        assert_eq!(report.values.len(), 20);
        assert_eq!(
            report.summary,
            Summary {
                total: 310,
                even: 10,
                odd: 10,
                top_bucket: 0
            }
        );
    }

    #[test]
    fn test_demo_with_malformed_numbers_fails_when_strict() {
        let config = DemoConfig {
            numbers: "1,two,3".to_string(),
            ..DemoConfig::default()
        };
        assert!(build_demo_report(&config, ParsePolicy::Strict).is_err());

        let report = build_demo_report(&config, ParsePolicy::Lenient).unwrap();
        assert_eq!(report.values, vec![1, 3]);
        assert_eq!(report.summary.odd, 2);
    }

    #[test]
    fn test_zero_markers() {
        let config = DemoConfig {
            iterations: 0,
            parity_markers: 0,
            ..DemoConfig::default()
        };
        let report = build_demo_report(&config, ParsePolicy::Strict).unwrap();
        assert!(report.iterations.is_empty());
        assert!(report.parity_markers.is_empty());
    }
}
