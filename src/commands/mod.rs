//! CLI command implementations.
//!
//! Available commands:
//! - **demo**: the fixture run (default when no subcommand is given)
//! - **compute**: parity-weighted sum of `0..n`
//! - **summarize**: parse a number list and summarize it
//! - **init**: write a default `.fixture-calc.toml`

pub mod compute;
pub mod demo;
pub mod init;
pub mod summarize;

pub use compute::run_compute;
pub use demo::{build_demo_report, run_demo};
pub use init::{init_config, init_config_in};
pub use summarize::{build_summary_report, run_summarize};
