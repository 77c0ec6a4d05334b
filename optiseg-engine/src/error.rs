//! Layered error types

use optiseg_core::{CoreError, VocabularyError};
use thiserror::Error;

/// Engine-level errors (Application Layer)
#[derive(Error, Debug)]
pub enum EngineError {
    /// Segmentation of a single word failed
    #[error("segmentation error: {0}")]
    Core(#[from] CoreError),

    /// The vocabulary being built is malformed
    #[error("vocabulary error: {0}")]
    Vocabulary(#[from] VocabularyError),

    /// Malformed merge-codes input
    #[error("invalid merge codes at line {line}: {reason}")]
    Codes {
        /// 1-based line number
        line: usize,
        /// What was wrong with the line
        reason: String,
    },

    /// Configuration error
    #[error("invalid configuration: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(String),

    /// Parallel execution error
    #[cfg(feature = "parallel")]
    #[error("parallel execution failed: {0}")]
    Parallel(String),
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::Io(err.to_string())
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
