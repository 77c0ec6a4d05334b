//! Inspect command implementation

use super::init_logging;
use crate::vocab_source::VocabularySourceArgs;
use anyhow::{Context, Result};
use clap::Args;
use optiseg_engine::{config::DEFAULT_END_OF_WORD, segment, Vocabulary};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Arguments for the inspect command
#[derive(Debug, Args)]
pub struct InspectArgs {
    #[command(flatten)]
    pub source: VocabularySourceArgs,

    /// Replacement for the `</w>` marker in merge codes
    #[arg(long, value_name = "STRING", default_value = DEFAULT_END_OF_WORD)]
    pub end_of_word: String,

    /// Write the derived vocabulary as JSON
    #[arg(long, value_name = "FILE")]
    pub export: Option<PathBuf>,

    /// Show the segmentation of these words
    #[arg(short, long, value_name = "WORD")]
    pub word: Vec<String>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Summary of a vocabulary
#[derive(Debug, Clone, PartialEq)]
pub struct VocabularySummary {
    /// Number of entries
    pub entries: usize,
    /// Number of single-character entries
    pub alphabet: usize,
    /// Longest key, in characters
    pub longest_key: usize,
}

impl VocabularySummary {
    /// Summarize `vocabulary`
    pub fn of(vocabulary: &Vocabulary) -> Self {
        let alphabet = vocabulary
            .iter()
            .filter(|(key, _)| key.chars().count() == 1)
            .count();
        Self {
            entries: vocabulary.len(),
            alphabet,
            longest_key: vocabulary.max_key_chars(),
        }
    }
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, false);

        let loaded = self.source.load(&self.end_of_word)?;
        let summary = VocabularySummary::of(&loaded.vocabulary);

        println!("{}", self.source.display_name());
        if let Some(codes) = &loaded.codes {
            println!("  Version: {}", codes.version().unwrap_or("none"));
            println!("  Merges: {}", codes.len());
        }
        println!("  Entries: {}", summary.entries);
        println!("  Alphabet size: {}", summary.alphabet);
        println!("  Longest key: {} chars", summary.longest_key);

        for word in &self.word {
            match segment(word, &loaded.vocabulary) {
                Ok(segmentation) => println!(
                    "  {word}: {} ({} pieces, weight {})",
                    segmentation,
                    segmentation.len(),
                    segmentation.weight()
                ),
                Err(e) => println!("  {word}: {e}"),
            }
        }

        if let Some(path) = &self.export {
            let sorted: BTreeMap<&str, f64> = loaded.vocabulary.iter().collect();
            let file = File::create(path)
                .with_context(|| format!("Failed to create export file: {}", path.display()))?;
            serde_json::to_writer_pretty(BufWriter::new(file), &sorted)
                .with_context(|| format!("Failed to write vocabulary: {}", path.display()))?;
            println!("✓ Exported {} entries to {}", summary.entries, path.display());
        }

        Ok(())
    }
}
