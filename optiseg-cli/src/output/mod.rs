//! Output formatting module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub mod json;
pub mod text;

pub use json::{JsonFormatter, LineRecord};
pub use text::TextFormatter;

/// Trait for output formatters
pub trait OutputFormatter: Send {
    /// Emit one processed line
    ///
    /// `source` names the input the line came from and `line` is 1-based
    /// within it; `input` is the raw line and `output` the encoded or
    /// decoded result.
    fn format_line(&mut self, source: &str, line: usize, input: &str, output: &str)
        -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One result per line
    Text,
    /// JSON array of line records
    Json,
}

/// Build the formatter for `format` over `writer`
pub fn create_formatter<W>(
    format: OutputFormat,
    writer: W,
    pretty: bool,
) -> Box<dyn OutputFormatter>
where
    W: Write + Send + 'static,
{
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty)),
    }
}

/// Open the output destination; stdout when no path is given
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write + Send>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout()))),
    }
}
