//! Vocabulary supplier for subword-nmt style merge codes
//!
//! A codes file lists learned merges, most frequent first:
//!
//! ```text
//! #version: 0.2
//! a b
//! b c
//! a b</w>
//! ```
//!
//! The merge on (0-based) line `r` contributes the concatenated symbol with
//! weight `1 / (r + 1)`, so earlier merges are preferred.

use crate::error::{EngineError, Result};
use optiseg_core::Vocabulary;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// End-of-word marker written by the merge learner
pub const END_OF_WORD_MARKER: &str = "</w>";

const VERSION_PREFIX: &str = "#version:";

/// One learned merge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Merge {
    /// Left symbol
    pub left: String,
    /// Right symbol
    pub right: String,
    /// 0-based position among merge lines
    pub rank: usize,
}

/// Parsed merge codes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeCodes {
    version: Option<String>,
    merges: Vec<Merge>,
}

impl MergeCodes {
    /// Parse codes from a string
    pub fn parse(text: &str) -> Result<Self> {
        Self::from_reader(text.as_bytes())
    }

    /// Parse codes from a file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            EngineError::Io(format!("failed to open merge codes {}: {e}", path.display()))
        })?;
        let codes = Self::from_reader(BufReader::new(file))?;
        log::info!(
            "loaded {} merges from {} (version {})",
            codes.len(),
            path.display(),
            codes.version().unwrap_or("unspecified")
        );
        Ok(codes)
    }

    /// Parse codes line by line.
    ///
    /// Blank lines are skipped. A pair that appears twice keeps its first rank.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut codes = Self::default();
        let mut seen: HashSet<(String, String)> = HashSet::new();
        let mut rank = 0;

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = idx + 1;
            let trimmed = line.trim_matches(|c| c == '\r' || c == '\n' || c == ' ');

            if idx == 0 {
                if let Some(version) = trimmed.strip_prefix(VERSION_PREFIX) {
                    codes.version = Some(version.trim().to_string());
                    continue;
                }
            }
            if trimmed.is_empty() {
                continue;
            }

            let mut symbols = trimmed.split(' ');
            let (left, right) = match (symbols.next(), symbols.next(), symbols.next()) {
                (Some(left), Some(right), None) if !left.is_empty() && !right.is_empty() => {
                    (left, right)
                }
                _ => {
                    return Err(EngineError::Codes {
                        line: line_no,
                        reason: format!("expected two space-separated symbols, got {trimmed:?}"),
                    })
                }
            };

            if seen.insert((left.to_string(), right.to_string())) {
                codes.merges.push(Merge {
                    left: left.to_string(),
                    right: right.to_string(),
                    rank,
                });
            }
            rank += 1;
        }

        Ok(codes)
    }

    /// Version from the `#version:` header, if present
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Distinct merges in rank order
    pub fn merges(&self) -> &[Merge] {
        &self.merges
    }

    /// Number of distinct merges
    pub fn len(&self) -> usize {
        self.merges.len()
    }

    /// Whether there are no merges
    pub fn is_empty(&self) -> bool {
        self.merges.is_empty()
    }

    /// Rank of the merge `left right`
    pub fn rank(&self, left: &str, right: &str) -> Option<usize> {
        self.merges
            .iter()
            .find(|m| m.left == left && m.right == right)
            .map(|m| m.rank)
    }

    /// Derive the weighted vocabulary.
    ///
    /// `</w>` is replaced by `end_of_word`. Merges that produce the same
    /// string keep the highest weight. Every character of every symbol gets
    /// a zero-weight single-character entry if it has none, so words over
    /// the learned alphabet are always segmentable.
    pub fn to_vocabulary(&self, end_of_word: &str) -> Result<Vocabulary> {
        let mut weights: HashMap<String, f64> = HashMap::new();

        for merge in &self.merges {
            let key = format!("{}{}", merge.left, merge.right).replace(END_OF_WORD_MARKER, end_of_word);
            let weight = 1.0 / (merge.rank as f64 + 1.0);
            weights
                .entry(key)
                .and_modify(|w| *w = w.max(weight))
                .or_insert(weight);
        }

        for merge in &self.merges {
            for symbol in [&merge.left, &merge.right] {
                for ch in symbol.replace(END_OF_WORD_MARKER, "").chars() {
                    weights.entry(ch.to_string()).or_insert(0.0);
                }
            }
        }

        let vocabulary = Vocabulary::from_entries(weights)?;
        log::debug!(
            "derived vocabulary: {} entries, longest key {} chars",
            vocabulary.len(),
            vocabulary.max_key_chars()
        );
        Ok(vocabulary)
    }
}
