//! CLI module for fixture-calc
//!
//! - Argument parsing (`args`)
//! - Command dispatch (`commands`)
//! - Runtime setup (`setup`)

pub mod args;
pub mod commands;
pub mod setup;

pub use args::{Cli, Commands};
pub use commands::dispatch;
pub use setup::{init_tracing, resolve_format, resolve_policy, verbosity_level};

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    args::parse_args()
}
