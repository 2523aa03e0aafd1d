use anyhow::{Context, Result};
use tracing::debug;

use super::demo::log_rejections;
use crate::core::{parse_numbers_with, ParsePolicy, SummaryReport};
use crate::io::output::OutputWriter;

pub fn build_summary_report(text: &str, policy: ParsePolicy) -> Result<SummaryReport> {
    let parsed = parse_numbers_with(text, policy).context("Failed to parse number list")?;
    log_rejections(&parsed.rejected);
    Ok(SummaryReport::from_parsed(parsed))
}

pub fn run_summarize(text: &str, policy: ParsePolicy, writer: &mut dyn OutputWriter) -> Result<()> {
    let report = build_summary_report(text, policy)?;
    debug!(
        values = report.values.len(),
        rejected = report.rejected.len(),
        "Summarized number list"
    );
    writer.write_summary(&report)
}
