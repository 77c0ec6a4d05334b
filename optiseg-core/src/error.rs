//! Core error types (deterministic only)

use thiserror::Error;

/// Rejections raised while building a [`Vocabulary`](crate::Vocabulary)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VocabularyError {
    /// The empty string cannot be a vocabulary key
    #[error("vocabulary keys must be non-empty")]
    EmptyKey,

    /// A key was supplied more than once
    #[error("duplicate vocabulary key {key:?}")]
    DuplicateKey {
        /// The repeated key
        key: String,
    },

    /// Weight is negative, NaN or infinite
    #[error("invalid weight {weight} for vocabulary key {key:?}")]
    InvalidWeight {
        /// The key the weight was attached to
        key: String,
        /// The rejected weight
        weight: f64,
    },
}

/// Segmentation errors (no I/O, no external failures)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A character of the word has no single-character vocabulary entry
    #[error("character {character:?} at position {position} of {word:?} has no single-character vocabulary entry")]
    CoverageViolation {
        /// The word being segmented
        word: String,
        /// The uncovered character
        character: char,
        /// Character (not byte) position of the first occurrence
        position: usize,
    },

    /// Words are non-empty by definition
    #[error("cannot segment an empty word")]
    EmptyWord,

    /// Recovered pieces do not concatenate back to the word.
    ///
    /// Signals a defect in the dynamic program, never bad input.
    #[error("internal error: segmentation of {word:?} reconstructs {reconstructed:?}")]
    ReconstructionMismatch {
        /// The word being segmented
        word: String,
        /// What the recovered pieces concatenate to
        reconstructed: String,
    },
}

impl CoreError {
    /// Whether this error reflects an internal defect rather than bad input
    pub fn is_internal(&self) -> bool {
        matches!(self, CoreError::ReconstructionMismatch { .. })
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
