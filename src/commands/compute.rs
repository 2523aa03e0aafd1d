use anyhow::Result;
use tracing::debug;

use crate::core::{compute, ComputeReport};
use crate::io::output::OutputWriter;

pub fn run_compute(n: i64, writer: &mut dyn OutputWriter) -> Result<()> {
    let report = ComputeReport { n, value: compute(n) };
    debug!(n, value = report.value, "Computed parity sum");
    writer.write_compute(&report)
}
