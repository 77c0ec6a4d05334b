//! Encode command implementation

use super::init_logging;
use crate::{
    config::CliConfig,
    error::CliError,
    input::{resolve_inputs, FileReader},
    output::{create_formatter, open_output, OutputFormat, OutputFormatter},
    progress::ProgressReporter,
    vocab_source::VocabularySourceArgs,
};
use anyhow::{Context, Result};
use clap::Args;
use optiseg_engine::{FailurePolicy, SegmentationCache, SentenceEncoder};
use std::path::PathBuf;

/// Arguments for the encode command
#[derive(Debug, Args)]
pub struct EncodeArgs {
    #[command(flatten)]
    pub source: VocabularySourceArgs,

    /// Input files or patterns (supports glob, `-` for stdin; default: stdin)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Continuation marker appended to non-final pieces [default: @@]
    #[arg(short, long, value_name = "SEP")]
    pub separator: Option<String>,

    /// Dropout rate in [0, 1]; any positive value disables the cache
    #[arg(long, value_name = "RATE")]
    pub dropout: Option<f64>,

    /// What to do with words that cannot be segmented: fail, skip, passthrough
    #[arg(long, value_name = "POLICY", value_parser = parse_policy)]
    pub on_error: Option<FailurePolicy>,

    /// Replacement for the `</w>` marker in merge codes [default: " "]
    #[arg(long, value_name = "STRING")]
    pub end_of_word: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Encode lines in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads (implies --parallel)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn parse_policy(value: &str) -> Result<FailurePolicy, optiseg_engine::EngineError> {
    value.parse()
}

/// Effective settings after merging flags over the config file
#[derive(Debug, Clone, PartialEq)]
pub struct EncodeSettings {
    /// Continuation marker
    pub separator: String,
    /// Dropout rate
    pub dropout: f64,
    /// Failure handling
    pub on_error: FailurePolicy,
    /// `</w>` replacement
    pub end_of_word: String,
    /// Output format
    pub format: OutputFormat,
    /// Pretty print JSON
    pub pretty_json: bool,
    /// Worker threads when encoding in parallel
    pub threads: Option<usize>,
}

impl EncodeArgs {
    /// Execute the encode command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting encoding");
        log::debug!("Arguments: {self:?}");

        let config = CliConfig::load(self.config.as_deref())?;
        let settings = self.settings(&config);
        log::debug!("Settings: {settings:?}");

        log::info!("{}", self.source.display_name());
        let loaded = self.source.load(&settings.end_of_word)?;

        let mut encoder = SentenceEncoder::builder()
            .vocabulary(loaded.vocabulary)
            .separator(settings.separator.as_str())
            .dropout(settings.dropout)
            .failure_policy(settings.on_error)
            .end_of_word(settings.end_of_word.as_str())
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        let inputs = resolve_inputs(&self.input)?;
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(inputs.len() as u64);

        let writer = open_output(self.output.as_deref())?;
        let mut formatter = create_formatter(settings.format, writer, settings.pretty_json);

        let mut total_lines = 0;
        for source in &inputs {
            let source_name = source.to_string();
            let text = FileReader::read_source(source)?;
            let lines: Vec<&str> = text.lines().collect();

            match settings.threads {
                Some(threads) => {
                    let results = encoder
                        .encode_batch(&lines, Some(threads))
                        .context("Failed to start worker pool")?;
                    for (index, (input, result)) in lines.iter().zip(results).enumerate() {
                        emit(formatter.as_mut(), &source_name, index, input, result)?;
                    }
                }
                None => {
                    for (index, input) in lines.iter().enumerate() {
                        let result = encoder.encode(input);
                        emit(formatter.as_mut(), &source_name, index, input, result)?;
                    }
                }
            }

            total_lines += lines.len();
            progress.file_completed(&source_name, lines.len());
        }

        formatter.finish()?;
        progress.finish();

        log::info!(
            "{}",
            run_summary(total_lines, inputs.len(), settings.threads, encoder.cache())
        );
        Ok(())
    }

    /// Merge command-line flags over config file values
    pub fn settings(&self, config: &CliConfig) -> EncodeSettings {
        let parallel = self.parallel || self.threads.is_some() || config.performance.parallel;
        let threads = parallel.then(|| {
            self.threads
                .unwrap_or_else(|| config.performance.resolved_threads())
        });

        EncodeSettings {
            separator: self
                .separator
                .clone()
                .unwrap_or_else(|| config.encoding.separator.clone()),
            dropout: self.dropout.unwrap_or(config.encoding.dropout),
            on_error: self.on_error.unwrap_or(config.encoding.on_error),
            end_of_word: self
                .end_of_word
                .clone()
                .unwrap_or_else(|| config.encoding.end_of_word.clone()),
            format: self.format.unwrap_or(config.output.format),
            pretty_json: config.output.pretty_json,
            threads,
        }
    }
}

fn emit(
    formatter: &mut dyn OutputFormatter,
    source: &str,
    index: usize,
    input: &str,
    result: optiseg_engine::Result<String>,
) -> Result<()> {
    let output = result.map_err(|e| CliError::EncodingError {
        source: source.to_string(),
        line: index + 1,
        message: e.to_string(),
    })?;
    formatter.format_line(source, index + 1, input, &output)
}

/// Closing log line. Parallel workers encode with forked caches, so only a
/// sequential run has cache figures to report.
fn run_summary(
    lines: usize,
    inputs: usize,
    threads: Option<usize>,
    cache: &SegmentationCache,
) -> String {
    match threads {
        Some(threads) => {
            format!("Encoded {lines} lines from {inputs} input(s) on {threads} threads")
        }
        None => {
            let stats = cache.stats();
            format!(
                "Encoded {lines} lines from {inputs} input(s); cache: {} words, {} hits, {} misses",
                cache.len(),
                stats.hits,
                stats.misses
            )
        }
    }
}
