//! Vocabulary source selection for CLI commands

use anyhow::{Context, Result};
use clap::Args;
use optiseg_engine::{MergeCodes, Vocabulary};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Where the vocabulary comes from; exactly one source is required
#[derive(Debug, Clone, Args)]
#[group(required = true, multiple = false)]
pub struct VocabularySourceArgs {
    /// subword-nmt merge codes file
    #[arg(short, long, value_name = "FILE")]
    pub codes: Option<PathBuf>,

    /// JSON vocabulary file: {"substring": weight, ...}
    #[arg(long, value_name = "FILE")]
    pub vocab: Option<PathBuf>,
}

/// A loaded vocabulary, with the merge codes it came from when applicable
#[derive(Debug)]
pub struct LoadedVocabulary {
    /// The validated vocabulary
    pub vocabulary: Vocabulary,
    /// Merge codes, for codes sources
    pub codes: Option<MergeCodes>,
}

impl VocabularySourceArgs {
    /// Load and validate the selected source
    pub fn load(&self, end_of_word: &str) -> Result<LoadedVocabulary> {
        match (&self.codes, &self.vocab) {
            (Some(path), _) => {
                let codes = MergeCodes::from_path(path)
                    .with_context(|| format!("Failed to load merge codes: {}", path.display()))?;
                let vocabulary = codes.to_vocabulary(end_of_word).with_context(|| {
                    format!("Failed to build vocabulary from: {}", path.display())
                })?;
                Ok(LoadedVocabulary {
                    vocabulary,
                    codes: Some(codes),
                })
            }
            (None, Some(path)) => {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open vocabulary: {}", path.display()))?;
                let vocabulary: Vocabulary = serde_json::from_reader(BufReader::new(file))
                    .with_context(|| format!("Invalid vocabulary file: {}", path.display()))?;
                log::info!(
                    "Loaded {} vocabulary entries from {}",
                    vocabulary.len(),
                    path.display()
                );
                Ok(LoadedVocabulary {
                    vocabulary,
                    codes: None,
                })
            }
            (None, None) => anyhow::bail!("Either --codes or --vocab is required"),
        }
    }

    /// Get the display name for the vocabulary source
    pub fn display_name(&self) -> String {
        match (&self.codes, &self.vocab) {
            (Some(path), _) => format!("Merge codes: {}", path.display()),
            (None, Some(path)) => format!("Vocabulary: {}", path.display()),
            (None, None) => "none".to_string(),
        }
    }
}
