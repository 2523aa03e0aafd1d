//! Command handlers for CLI subcommands
//!
//! Resolves configuration and output for a parsed [`Cli`] and hands off to
//! the implementations in [`crate::commands`].

use anyhow::{Context, Result};
use tracing::debug;

use super::args::{Cli, Commands};
use super::setup::{resolve_format, resolve_policy};
use crate::commands;
use crate::config::{resolve_config, FixtureConfig};
use crate::core::ParsePolicy;
use crate::io::output::{create_writer, OutputWriter};

/// Everything a command needs once configuration is resolved
struct RunContext {
    config: FixtureConfig,
    policy: ParsePolicy,
    writer: Box<dyn OutputWriter>,
}

impl RunContext {
    fn resolve(cli: &Cli, command: &Commands) -> Result<Self> {
        let config =
            resolve_config(cli.config.as_deref()).context("Failed to load configuration")?;
        let format = resolve_format(cli, &config);
        let policy = resolve_policy(command, &config);
        debug!(?command, ?format, ?policy, "Dispatching command");

        Ok(Self {
            config,
            policy,
            writer: create_writer(format, std::io::stdout()),
        })
    }
}

/// Run the command selected by `cli`, writing results to stdout.
pub fn dispatch(cli: Cli) -> Result<()> {
    let command = cli.command.clone().unwrap_or(Commands::Demo);

    match &command {
        Commands::Init { force } => commands::init_config(*force),
        Commands::Demo => {
            let mut ctx = RunContext::resolve(&cli, &command)?;
            commands::run_demo(&ctx.config.demo, ctx.policy, ctx.writer.as_mut())
        }
        Commands::Compute { n } => {
            let mut ctx = RunContext::resolve(&cli, &command)?;
            commands::run_compute(*n, ctx.writer.as_mut())
        }
        Commands::Summarize { text, .. } => {
            let mut ctx = RunContext::resolve(&cli, &command)?;
            commands::run_summarize(text, ctx.policy, ctx.writer.as_mut())
        }
    }
}
