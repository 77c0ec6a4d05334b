//! Encoder builder
//!
//! Resolves the vocabulary source and validates configuration up front, so a
//! built [`SentenceEncoder`] never has to check either while encoding.

use crate::{
    cache::SegmentationCache,
    codes::MergeCodes,
    config::{EncoderConfig, FailurePolicy},
    error::{EngineError, Result},
    sentence::SentenceEncoder,
};
use optiseg_core::{Unperturbed, Vocabulary, VocabularyView};
use std::path::PathBuf;
use std::sync::Arc;

/// Where the vocabulary comes from
enum VocabularySource {
    Vocabulary(Arc<Vocabulary>),
    Codes(MergeCodes),
    CodesFile(PathBuf),
}

/// Builder for SentenceEncoder
///
/// Provides a fluent interface for configuring the encoder.
pub struct EncoderBuilder {
    config: EncoderConfig,
    source: Option<VocabularySource>,
    view: Arc<dyn VocabularyView>,
}

impl Default for EncoderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EncoderBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: EncoderConfig::default(),
            source: None,
            view: Arc::new(Unperturbed),
        }
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: EncoderConfig) -> Self {
        self.config = config;
        self
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

    /// Set the `</w>` replacement used when deriving from merge codes
    pub fn end_of_word<S: Into<String>>(mut self, end_of_word: S) -> Self {
        self.config.end_of_word = end_of_word.into();
        self
    }

    /// Set the view applied to the vocabulary while dropout is active
    pub fn view(mut self, view: Arc<dyn VocabularyView>) -> Self {
        self.view = view;
        self
    }

    /// Use a ready-made vocabulary
    pub fn vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.source = Some(VocabularySource::Vocabulary(Arc::new(vocabulary)));
        self
    }

    /// Use a vocabulary shared with other encoders
    pub fn shared_vocabulary(mut self, vocabulary: Arc<Vocabulary>) -> Self {
        self.source = Some(VocabularySource::Vocabulary(vocabulary));
        self
    }

    /// Derive the vocabulary from parsed merge codes
    pub fn codes(mut self, codes: MergeCodes) -> Self {
        self.source = Some(VocabularySource::Codes(codes));
        self
    }

    /// Derive the vocabulary from a merge-codes file, read at build time
    pub fn codes_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.source = Some(VocabularySource::CodesFile(path.into()));
        self
    }

    /// Build the encoder
    pub fn build(self) -> Result<SentenceEncoder> {
        self.config.validate()?;

        let vocabulary = match self.source {
            Some(VocabularySource::Vocabulary(vocabulary)) => vocabulary,
            Some(VocabularySource::Codes(codes)) => {
                Arc::new(codes.to_vocabulary(&self.config.end_of_word)?)
            }
            Some(VocabularySource::CodesFile(path)) => Arc::new(
                MergeCodes::from_path(path)?.to_vocabulary(&self.config.end_of_word)?,
            ),
            None => {
                return Err(EngineError::Config(
                    "a vocabulary or merge codes source is required".to_string(),
                ))
            }
        };

        log::debug!(
            "building encoder: {} vocabulary entries, separator {:?}, dropout {}",
            vocabulary.len(),
            self.config.separator,
            self.config.dropout
        );

        let cache = SegmentationCache::with_dropout(vocabulary, self.config.dropout, self.view);
        Ok(SentenceEncoder::from_parts(self.config, cache))
    }
}

impl SentenceEncoder {
    /// Create a builder
    pub fn builder() -> EncoderBuilder {
        EncoderBuilder::new()
    }
}
