//! Configuration module

use crate::output::OutputFormat;
use anyhow::{Context, Result};
use optiseg_engine::{
    config::{DEFAULT_END_OF_WORD, DEFAULT_SEPARATOR},
    FailurePolicy,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Encoding configuration
    #[serde(default)]
    pub encoding: EncodingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl CliConfig {
    /// Load a configuration file, or the defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig = toml::from_str(&text)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}

/// Encoding-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct EncodingConfig {
    /// Continuation marker appended to non-final pieces
    pub separator: String,

    /// Dropout rate (0 keeps memoization on)
    pub dropout: f64,

    /// Handling of words that cannot be segmented
    pub on_error: FailurePolicy,

    /// Replacement for the `</w>` marker in merge codes
    pub end_of_word: String,
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            dropout: 0.0,
            on_error: FailurePolicy::default(),
            end_of_word: DEFAULT_END_OF_WORD.to_string(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Encode lines in parallel
    pub parallel: bool,

    /// Number of worker threads (0 = auto)
    pub threads: usize,
}

impl PerformanceConfig {
    /// Worker count, resolving 0 to the number of logical CPUs
    pub fn resolved_threads(&self) -> usize {
        if self.threads == 0 {
            num_cpus::get()
        } else {
            self.threads
        }
    }
}
