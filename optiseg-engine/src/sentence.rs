//! Line-level encoding and decoding

use crate::{
    cache::SegmentationCache,
    config::EncoderConfig,
    error::Result,
    stream::SubTokens,
};
use optiseg_core::{Segmentation, Vocabulary};
use std::sync::Arc;

/// Encodes raw lines into space-separated sub-tokens.
///
/// Each instance owns its segmentation cache. Use [`SentenceEncoder::fork`]
/// to get an independent encoder for another thread.
#[derive(Debug)]
pub struct SentenceEncoder {
    cache: SegmentationCache,
    config: EncoderConfig,
}

impl SentenceEncoder {
    /// Create an encoder from a validated configuration and its cache
    pub(crate) fn from_parts(config: EncoderConfig, cache: SegmentationCache) -> Self {
        Self { cache, config }
    }

    /// Create an encoder over `vocabulary` with memoization and the given separator
    pub fn new(vocabulary: Vocabulary, separator: &str) -> Result<Self> {
        let config = EncoderConfig::builder().separator(separator).build()?;
        let cache = SegmentationCache::new(Arc::new(vocabulary));
        Ok(Self::from_parts(config, cache))
    }

    /// Encode one line.
    ///
    /// Surrounding whitespace and line terminators are dropped, runs of
    /// whitespace separate words, and sub-tokens are joined by single spaces.
    /// A blank line encodes to the empty string.
    pub fn encode(&mut self, line: &str) -> Result<String> {
        let mut encoded = String::with_capacity(line.len() * 2);
        for token in self.segment_words(line.split_whitespace()) {
            let token = token?;
            if !encoded.is_empty() {
                encoded.push(' ');
            }
            encoded.push_str(&token);
        }
        Ok(encoded)
    }

    /// Lazily encode a stream of already-split words
    pub fn segment_words<I>(&mut self, words: I) -> SubTokens<'_, I::IntoIter>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        SubTokens::new(
            &mut self.cache,
            words.into_iter(),
            &self.config.separator,
            self.config.failure_policy,
        )
    }

    /// Segment a single word through the cache
    pub fn segment_word(&mut self, word: &str) -> Result<Arc<Segmentation>> {
        self.cache.segment_word(word)
    }

    /// Undo [`encode`](Self::encode): glue marked pieces back onto their successors
    pub fn decode(&self, line: &str) -> String {
        decode(line, &self.config.separator)
    }

    /// The active configuration
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// The underlying cache
    pub fn cache(&self) -> &SegmentationCache {
        &self.cache
    }

    /// An encoder with the same configuration and vocabulary and an empty cache
    pub fn fork(&self) -> Self {
        Self {
            cache: self.cache.fork(),
            config: self.config.clone(),
        }
    }
}

/// Remove continuation markers from an encoded line
pub fn decode(line: &str, separator: &str) -> String {
    let marker = format!("{separator} ");
    let padded = format!("{line} ");
    padded.replace(&marker, "").trim_end().to_string()
}
