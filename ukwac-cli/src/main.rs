//! ukwac command-line entry point

use clap::Parser;
use ukwac_cli::{Cli, CliResult};

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
