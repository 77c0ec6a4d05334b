//! Per-encoder memoization of word segmentations

use crate::error::Result;
use optiseg_core::{Segmentation, Segmenter, Unperturbed, Vocabulary, VocabularyView};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Hit/miss counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the map
    pub hits: u64,
    /// Lookups that ran the segmenter
    pub misses: u64,
}

/// Memoizes segmentations per distinct word.
///
/// Entries are filled lazily and never evicted. Failed segmentations are not
/// stored. The map is owned by one encoder and carries no locking; wrap the
/// owner in a `Mutex` to share it between threads.
pub struct SegmentationCache {
    vocabulary: Arc<Vocabulary>,
    view: Arc<dyn VocabularyView>,
    dropout: f64,
    segmenter: Segmenter,
    entries: HashMap<String, Arc<Segmentation>>,
    stats: CacheStats,
}

impl fmt::Debug for SegmentationCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegmentationCache")
            .field("vocabulary", &format!("<{} entries>", self.vocabulary.len()))
            .field("view", &self.view.name())
            .field("dropout", &self.dropout)
            .field("entries", &self.entries.len())
            .field("stats", &self.stats)
            .finish()
    }
}

impl SegmentationCache {
    /// Create a cache over `vocabulary` with memoization enabled
    pub fn new(vocabulary: Arc<Vocabulary>) -> Self {
        Self::with_dropout(vocabulary, 0.0, Arc::new(Unperturbed))
    }

    /// Create a cache with a dropout rate and the view applied while it is active
    pub fn with_dropout(
        vocabulary: Arc<Vocabulary>,
        dropout: f64,
        view: Arc<dyn VocabularyView>,
    ) -> Self {
        if dropout > 0.0 {
            log::debug!(
                "dropout {dropout} active: memoization bypassed, view '{}'",
                view.name()
            );
        }
        Self {
            vocabulary,
            view,
            dropout,
            segmenter: Segmenter::new(),
            entries: HashMap::new(),
            stats: CacheStats::default(),
        }
    }

    /// Segment `word`, reusing the stored result when there is one.
    ///
    /// With dropout active every call applies the view and recomputes.
    pub fn segment_word(&mut self, word: &str) -> Result<Arc<Segmentation>> {
        if self.is_bypassed() {
            self.stats.misses += 1;
            let vocabulary = self.view.apply(&self.vocabulary, self.dropout);
            let segmentation = self.segmenter.segment(word, &vocabulary)?;
            return Ok(Arc::new(segmentation));
        }

        if let Some(hit) = self.entries.get(word) {
            self.stats.hits += 1;
            return Ok(Arc::clone(hit));
        }

        self.stats.misses += 1;
        let segmentation = Arc::new(self.segmenter.segment(word, &self.vocabulary)?);
        self.entries
            .insert(word.to_string(), Arc::clone(&segmentation));
        Ok(segmentation)
    }

    /// Stored segmentation for `word`, without computing it
    pub fn get(&self, word: &str) -> Option<&Arc<Segmentation>> {
        self.entries.get(word)
    }

    /// Number of memoized words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is memoized
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether dropout disables memoization
    pub fn is_bypassed(&self) -> bool {
        self.dropout > 0.0
    }

    /// Hit/miss counters since construction
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// The vocabulary segmentations run against
    pub fn vocabulary(&self) -> &Arc<Vocabulary> {
        &self.vocabulary
    }

    /// A cache sharing this one's vocabulary and view, with an empty map
    pub fn fork(&self) -> Self {
        Self {
            vocabulary: Arc::clone(&self.vocabulary),
            view: Arc::clone(&self.view),
            dropout: self.dropout,
            segmenter: Segmenter::new(),
            entries: HashMap::new(),
            stats: CacheStats::default(),
        }
    }
}
