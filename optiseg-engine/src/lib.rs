//! Encoding orchestration for optimal subword segmentation
//!
//! This crate wraps the segmenter from `optiseg-core` with per-encoder
//! memoization, a lazy word-stream encoder, line-level encoding and
//! decoding, and a vocabulary supplier for subword-nmt merge codes.
//!
//! # Example
//!
//! ```rust
//! use optiseg_engine::{MergeCodes, SentenceEncoder};
//!
//! let codes = MergeCodes::parse("#version: 0.2\na b\nb c\nc b\na b</w>\n").unwrap();
//! let mut encoder = SentenceEncoder::builder().codes(codes).build().unwrap();
//!
//! let encoded = encoder.encode("abccbaba bcaab\n").unwrap();
//! assert_eq!(encoded, "ab@@ c@@ cb@@ ab@@ a bc@@ a@@ ab");
//! assert_eq!(encoder.decode(&encoded), "abccbaba bcaab");
//! ```

#![warn(missing_docs)]

pub mod cache;
pub mod codes;
pub mod config;
pub mod encoder;
pub mod error;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sentence;
pub mod stream;

// Re-export key types
pub use cache::{CacheStats, SegmentationCache};
pub use codes::{Merge, MergeCodes, END_OF_WORD_MARKER};
pub use config::{EncoderConfig, EncoderConfigBuilder, FailurePolicy};
pub use encoder::EncoderBuilder;
pub use error::{EngineError, Result};
pub use sentence::{decode, SentenceEncoder};
pub use stream::{segment_words, SubTokens};

// Re-export from core for convenience
pub use optiseg_core::{
    segment, CoreError, Segmentation, Segmenter, Unperturbed, Vocabulary, VocabularyError,
    VocabularyView,
};
