//! Per-call vocabulary views
//!
//! Dropout regularization perturbs the vocabulary before each segmentation
//! so that repeated words can segment differently. The perturbation itself is
//! left to implementors of [`VocabularyView`]; the engine only decides when a
//! view is consulted.

use crate::vocab::Vocabulary;
use std::borrow::Cow;

/// Vocabulary transformation applied before a dynamic-program run.
///
/// Implementations must keep every single-character entry the words rely
/// on, or segmentation fails with a coverage violation.
pub trait VocabularyView: Send + Sync {
    /// Produce the vocabulary the next segmentation runs against
    fn apply<'v>(&self, vocabulary: &'v Vocabulary, dropout: f64) -> Cow<'v, Vocabulary>;

    /// Short name used in logs
    fn name(&self) -> &'static str {
        "custom"
    }
}

/// The identity view: segment against the vocabulary as supplied
#[derive(Debug, Clone, Copy, Default)]
pub struct Unperturbed;

impl VocabularyView for Unperturbed {
    fn apply<'v>(&self, vocabulary: &'v Vocabulary, _dropout: f64) -> Cow<'v, Vocabulary> {
        Cow::Borrowed(vocabulary)
    }

    fn name(&self) -> &'static str {
        "unperturbed"
    }
}
