//! optiseg command-line entry point

use clap::Parser;
use optiseg_cli::{commands::Commands, CliResult};

/// Optimal subword segmentation
#[derive(Debug, Parser)]
#[command(name = "optiseg", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
