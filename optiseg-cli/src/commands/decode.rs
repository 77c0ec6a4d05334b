//! Decode command implementation

use super::init_logging;
use crate::{
    config::CliConfig,
    error::CliError,
    input::{resolve_inputs, FileReader},
    output::{open_output, OutputFormatter, TextFormatter},
};
use anyhow::Result;
use clap::Args;
use optiseg_engine::EncoderConfig;
use std::path::PathBuf;

/// Arguments for the decode command
#[derive(Debug, Args)]
pub struct DecodeArgs {
    /// Input files or patterns (supports glob, `-` for stdin; default: stdin)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Continuation marker used when encoding [default: @@]
    #[arg(short, long, value_name = "SEP")]
    pub separator: Option<String>,

    /// Configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl DecodeArgs {
    /// Execute the decode command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, false);

        let config = CliConfig::load(self.config.as_deref())?;
        let separator = self
            .separator
            .clone()
            .unwrap_or(config.encoding.separator);
        validate_separator(&separator)?;
        log::debug!("Decoding with separator {separator:?}");

        let mut formatter = TextFormatter::new(open_output(self.output.as_deref())?);
        for source in resolve_inputs(&self.input)? {
            let source_name = source.to_string();
            let text = FileReader::read_source(&source)?;
            for (index, line) in text.lines().enumerate() {
                let decoded = optiseg_engine::decode(line, &separator);
                formatter.format_line(&source_name, index + 1, line, &decoded)?;
            }
        }
        formatter.finish()
    }
}

/// Apply the separator rules `encode` enforces
fn validate_separator(separator: &str) -> Result<()> {
    EncoderConfig::builder()
        .separator(separator)
        .build()
        .map_err(|e| CliError::ConfigError(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_rules_match_encode() {
        assert!(validate_separator("@@").is_ok());
        assert!(validate_separator("-").is_ok());

        for bad in ["", "@ @", "@@\t"] {
            let err = validate_separator(bad).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<CliError>(),
                Some(CliError::ConfigError(_))
            ));
        }
    }
}
