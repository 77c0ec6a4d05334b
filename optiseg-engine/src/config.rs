//! Configuration types for the engine

use crate::error::{EngineError, Result};
use std::fmt;
use std::str::FromStr;

/// Continuation marker used by subword-nmt style encoders
pub const DEFAULT_SEPARATOR: &str = "@@";

/// Replacement for the learned `</w>` end-of-word marker
pub const DEFAULT_END_OF_WORD: &str = " ";

/// What to do with a word that cannot be segmented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum FailurePolicy {
    /// Report the error to the caller
    #[default]
    Fail,
    /// Drop the word from the output
    Skip,
    /// Emit the word unsegmented, as a single token
    Passthrough,
}

impl FailurePolicy {
    /// Lowercase name, as accepted by [`FromStr`]
    pub fn as_str(&self) -> &'static str {
        match self {
            FailurePolicy::Fail => "fail",
            FailurePolicy::Skip => "skip",
            FailurePolicy::Passthrough => "passthrough",
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FailurePolicy {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "fail" => Ok(FailurePolicy::Fail),
            "skip" => Ok(FailurePolicy::Skip),
            "passthrough" => Ok(FailurePolicy::Passthrough),
            other => Err(EngineError::Config(format!(
                "unknown failure policy '{other}' (expected fail, skip or passthrough)"
            ))),
        }
    }
}

/// Encoder configuration
#[derive(Debug, Clone, PartialEq)]
pub struct EncoderConfig {
    /// Marker appended to every piece of a word except its last
    pub separator: String,
    /// Dropout rate in `[0, 1]`; any positive value disables memoization
    pub dropout: f64,
    /// Handling of words that cannot be segmented
    pub failure_policy: FailurePolicy,
    /// String substituted for `</w>` when deriving a vocabulary from merge codes
    pub end_of_word: String,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            dropout: 0.0,
            failure_policy: FailurePolicy::Fail,
            end_of_word: DEFAULT_END_OF_WORD.to_string(),
        }
    }
}

impl EncoderConfig {
    /// Create a builder
    pub fn builder() -> EncoderConfigBuilder {
        EncoderConfigBuilder::new()
    }

    /// Whether dropout is active (memoization bypassed)
    pub fn dropout_enabled(&self) -> bool {
        self.dropout > 0.0
    }

    /// Check the invariants [`EncoderConfigBuilder::build`] enforces
    pub fn validate(&self) -> Result<()> {
        if self.separator.is_empty() {
            return Err(EngineError::Config(
                "separator cannot be empty".to_string(),
            ));
        }
        if self.separator.chars().any(char::is_whitespace) {
            return Err(EngineError::Config(format!(
                "separator {:?} cannot contain whitespace",
                self.separator
            )));
        }
        if !self.dropout.is_finite() || !(0.0..=1.0).contains(&self.dropout) {
            return Err(EngineError::Config(format!(
                "dropout must be within [0, 1], got {}",
                self.dropout
            )));
        }
        Ok(())
    }
}

/// Builder for EncoderConfig
#[derive(Debug, Default)]
pub struct EncoderConfigBuilder {
    config: EncoderConfig,
}

impl EncoderConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the continuation marker
    pub fn separator<S: Into<String>>(mut self, separator: S) -> Self {
        self.config.separator = separator.into();
        self
    }

    /// Set the dropout rate
    pub fn dropout(mut self, dropout: f64) -> Self {
        self.config.dropout = dropout;
        self
    }

    /// Set the failure policy
    pub fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.config.failure_policy = policy;
        self
    }

    /// Set the end-of-word replacement
    pub fn end_of_word<S: Into<String>>(mut self, end_of_word: S) -> Self {
        self.config.end_of_word = end_of_word.into();
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<EncoderConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
