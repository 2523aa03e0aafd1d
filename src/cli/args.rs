use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::MAX_COMPUTE_N;
use crate::io::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "fixture-calc")]
#[command(about = "Parity sums and number-list summaries for documentation fixtures", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format (overrides output.format from the config file)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Configuration file (defaults to the nearest .fixture-calc.toml)
    #[arg(long, global = true, env = "FIXTURE_CALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the fixture demo (default)
    Demo,

    /// Parity-weighted sum of 0..N: evens as-is, odds doubled
    Compute {
        /// Upper bound (exclusive); negative values yield 0
        #[arg(
            allow_negative_numbers = true,
            value_parser = clap::value_parser!(i64).range(..=MAX_COMPUTE_N)
        )]
        n: i64,
    },

    /// Parse a comma-separated number list and summarize it
    Summarize {
        /// Numbers, e.g. "1, 2, 3"
        text: String,

        /// Skip malformed numbers instead of failing
        #[arg(long)]
        lenient: bool,
    },

    /// Write a default .fixture-calc.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
