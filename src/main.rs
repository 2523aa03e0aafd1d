use anyhow::Result;
use fixture_calc::cli;

fn main() -> Result<()> {
    let cli = cli::parse_args();
    cli::init_tracing(cli.verbosity);
    cli::dispatch(cli)
}
