// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;

// Re-export commonly used types
pub use crate::core::{
    bucket_of, compute, compute_closed_form, compute_summary, parse_numbers, parse_numbers_with,
    BucketHistogram, ComputeReport, DemoReport, Error, Greeter, Parity, ParityMarker,
    ParsePolicy, ParsedNumbers, RejectedSegment, Result, Summary, SummaryReport, BUCKET_WIDTH,
    MAX_COMPUTE_N,
};

pub use crate::config::{FixtureConfig, CONFIG_FILE_NAME};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
