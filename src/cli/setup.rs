//! Setup and initialization functions for CLI
//!
//! Logging goes to stderr so stdout carries only fixture output.

use std::sync::Once;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use super::args::{Cli, Commands};
use crate::config::FixtureConfig;
use crate::core::ParsePolicy;
use crate::io::output::OutputFormat;

static TRACING_INIT: Once = Once::new();

/// Map `-v` occurrences to a default level
pub fn verbosity_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `-v`. Safe to call more than once.
pub fn init_tracing(verbosity: u8) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::builder()
            .with_default_directive(verbosity_level(verbosity).into())
            .from_env_lossy();
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_level(true),
            )
            .with(filter)
            .try_init();
    });
}

/// Output format: CLI flag, then config file
pub fn resolve_format(cli: &Cli, config: &FixtureConfig) -> OutputFormat {
    cli.format.unwrap_or(config.output.format)
}

/// Parse policy: `--lenient` forces lenient, otherwise the config decides
pub fn resolve_policy(command: &Commands, config: &FixtureConfig) -> ParsePolicy {
    match command {
        Commands::Summarize { lenient: true, .. } => ParsePolicy::Lenient,
        _ => config.parsing.policy,
    }
}
