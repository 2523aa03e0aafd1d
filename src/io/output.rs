use crate::core::{ComputeReport, DemoReport, Summary, SummaryReport};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Labeled lines, as the fixtures print them
    #[default]
    Terminal,
    /// One pretty-printed JSON document
    Json,
}

pub trait OutputWriter {
    fn write_demo(&mut self, report: &DemoReport) -> anyhow::Result<()>;
    fn write_compute(&mut self, report: &ComputeReport) -> anyhow::Result<()>;
    fn write_summary(&mut self, report: &SummaryReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_json<T: Serialize>(&mut self, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(self.writer, "{}", json)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_demo(&mut self, report: &DemoReport) -> anyhow::Result<()> {
        self.write_json(report)
    }

    fn write_compute(&mut self, report: &ComputeReport) -> anyhow::Result<()> {
        self.write_json(report)
    }

    fn write_summary(&mut self, report: &SummaryReport) -> anyhow::Result<()> {
        self.write_json(report)
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_value(&mut self, value: i64) -> anyhow::Result<()> {
        writeln!(self.writer, "value: {}", value)?;
        Ok(())
    }

    fn write_summary_line(&mut self, summary: &Summary) -> anyhow::Result<()> {
        writeln!(self.writer, "summary: {:?}", summary)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_demo(&mut self, report: &DemoReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", report.greeting)?;
        for i in &report.iterations {
            writeln!(self.writer, "i: {}", i)?;
        }
        for marker in &report.parity_markers {
            writeln!(self.writer, "{}: {}", marker.parity, marker.index)?;
        }
        self.write_value(report.value)?;
        self.write_summary_line(&report.summary)
    }

    fn write_compute(&mut self, report: &ComputeReport) -> anyhow::Result<()> {
        self.write_value(report.value)
    }

    fn write_summary(&mut self, report: &SummaryReport) -> anyhow::Result<()> {
        self.write_summary_line(&report.summary)
    }
}

pub fn create_writer<W: Write + 'static>(format: OutputFormat, writer: W) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}
