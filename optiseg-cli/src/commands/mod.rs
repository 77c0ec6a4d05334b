//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod decode;
pub mod encode;
pub mod generate_config;
pub mod inspect;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Segment text into subword tokens
    Encode(encode::EncodeArgs),

    /// Join subword tokens back into words
    Decode(decode::DecodeArgs),

    /// Validate a vocabulary source and print statistics
    Inspect(inspect::InspectArgs),

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Encode(args) => args.execute(),
            Commands::Decode(args) => args.execute(),
            Commands::Inspect(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// Initialize logging based on verbosity level
///
/// `RUST_LOG` takes precedence over the verbosity-derived default.
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // Ignore repeat initialization.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
