//! Lazy word-stream encoding
//!
//! Turns a stream of words into a stream of sub-tokens, one per step. Only
//! the segmentation of the word currently being emitted is held.

use crate::{cache::SegmentationCache, config::FailurePolicy, error::Result};
use optiseg_core::Segmentation;
use std::sync::Arc;

/// Sub-token iterator over a word stream.
///
/// Every piece of a word except the last carries the separator. The
/// iterator consumes its input once and cannot be restarted. Under
/// [`FailurePolicy::Fail`] a word that cannot be segmented yields a single
/// `Err` and iteration continues with the next word.
pub struct SubTokens<'a, I> {
    cache: &'a mut SegmentationCache,
    words: I,
    separator: &'a str,
    policy: FailurePolicy,
    current: Option<Arc<Segmentation>>,
    index: usize,
}

impl<'a, I> SubTokens<'a, I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    /// Create a sub-token stream over `words`
    pub fn new(
        cache: &'a mut SegmentationCache,
        words: I,
        separator: &'a str,
        policy: FailurePolicy,
    ) -> Self {
        Self {
            cache,
            words,
            separator,
            policy,
            current: None,
            index: 0,
        }
    }

    /// Next piece of the current word, marked unless it is the last
    fn next_piece(&mut self) -> Option<String> {
        let segmentation = self.current.as_ref()?;
        let piece = segmentation.pieces().get(self.index)?;
        self.index += 1;

        if self.index < segmentation.len() {
            let mut token = String::with_capacity(piece.len() + self.separator.len());
            token.push_str(piece);
            token.push_str(self.separator);
            Some(token)
        } else {
            let token = piece.clone();
            self.current = None;
            Some(token)
        }
    }
}

impl<I> Iterator for SubTokens<'_, I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.next_piece() {
                return Some(Ok(token));
            }

            let word = self.words.next()?;
            let word = word.as_ref();
            match self.cache.segment_word(word) {
                Ok(segmentation) => {
                    self.current = Some(segmentation);
                    self.index = 0;
                }
                Err(err) => match self.policy {
                    FailurePolicy::Fail => return Some(Err(err)),
                    FailurePolicy::Skip => {
                        log::warn!("skipping word {word:?}: {err}");
                    }
                    FailurePolicy::Passthrough => {
                        log::warn!("passing word {word:?} through unsegmented: {err}");
                        return Some(Ok(word.to_string()));
                    }
                },
            }
        }
    }
}

/// Encode a word stream with `cache`, appending `separator` to non-final pieces
pub fn segment_words<'a, I>(
    cache: &'a mut SegmentationCache,
    words: I,
    separator: &'a str,
) -> SubTokens<'a, I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    SubTokens::new(cache, words.into_iter(), separator, FailurePolicy::Fail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use optiseg_core::Vocabulary;

    fn sample_cache() -> SegmentationCache {
        let vocab = Vocabulary::from_entries([
            ("a", 5.0),
            ("b", 9.0),
            ("c", 50.0),
            ("ab", 11.0),
            ("bc", 20.0),
            ("cb", 31.0),
            ("a ", 5.0),
            ("ab ", 11.0),
        ])
        .unwrap();
        SegmentationCache::new(Arc::new(vocab))
    }

    #[test]
    fn test_word_stream() {
        let mut cache = sample_cache();
        let tokens: Vec<String> = segment_words(&mut cache, ["abccbaba", "bcaab"], "-")
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(
            tokens,
            vec!["ab-", "c-", "cb-", "ab-", "a", "bc-", "a-", "ab"]
        );
    }

    #[test]
    fn test_marker_on_all_but_last() {
        let mut cache = sample_cache();
        let tokens: Vec<String> = segment_words(&mut cache, ["abccbaba"], "@@")
            .collect::<Result<_>>()
            .unwrap();

        let marked = tokens.iter().filter(|t| t.ends_with("@@")).count();
        assert_eq!(marked, tokens.len() - 1);
        assert!(!tokens.last().unwrap().ends_with("@@"));
    }

    #[test]
    fn test_single_piece_word_unmarked() {
        let mut cache = sample_cache();
        let tokens: Vec<String> = segment_words(&mut cache, vec!["ab".to_string()], "-")
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(tokens, vec!["ab"]);
    }

    #[test]
    fn test_lazy_over_unbounded_input() {
        let mut cache = sample_cache();
        let words = std::iter::repeat("abc");
        let tokens: Vec<String> = segment_words(&mut cache, words, "-")
            .take(5)
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(tokens, vec!["ab-", "c", "ab-", "c", "ab-"]);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_failure_does_not_stop_stream() {
        let mut cache = sample_cache();
        let items: Vec<Result<String>> =
            segment_words(&mut cache, ["ab", "xyz", "bc"], "-").collect();

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].as_ref().unwrap(), "ab");
        assert!(items[1].is_err());
        assert_eq!(items[2].as_ref().unwrap(), "bc");
    }

    #[test]
    fn test_skip_policy() {
        let mut cache = sample_cache();
        let tokens: Vec<String> = SubTokens::new(
            &mut cache,
            ["ab", "xyz", "bc"].into_iter(),
            "-",
            FailurePolicy::Skip,
        )
        .collect::<Result<_>>()
        .unwrap();
        assert_eq!(tokens, vec!["ab", "bc"]);
    }

    #[test]
    fn test_passthrough_policy() {
        let mut cache = sample_cache();
        let tokens: Vec<String> = SubTokens::new(
            &mut cache,
            ["abc", "xyz"].into_iter(),
            "-",
            FailurePolicy::Passthrough,
        )
        .collect::<Result<_>>()
        .unwrap();
        assert_eq!(tokens, vec!["ab-", "c", "xyz"]);
    }
}
