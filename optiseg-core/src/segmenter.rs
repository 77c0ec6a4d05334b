//! Shortest-segmentation dynamic program
//!
//! For a word of `N` chars, state `i` describes the best segmentation of the
//! first `i` chars. Every vocabulary key `word[n..m]` is a transition from
//! state `n` to state `m` adding one segment and the key's weight, so the
//! program is semi-Markov: transitions span variable-length substrings. A
//! state keeps the incoming transition with the fewest total segments, then
//! the highest total weight. Backpointers from state `N` recover the pieces.

use crate::{
    error::{CoreError, Result},
    types::Segmentation,
    vocab::Vocabulary,
};

/// Segment count of a state no transition reaches
const UNREACHABLE: usize = usize::MAX;

#[derive(Debug, Clone, Copy)]
struct State {
    segments: usize,
    weight: f64,
    /// Start (in chars) of the last piece
    back: usize,
}

impl State {
    const START: State = State {
        segments: 0,
        weight: 0.0,
        back: 0,
    };

    const UNREACHED: State = State {
        segments: UNREACHABLE,
        weight: 0.0,
        back: 0,
    };

    #[inline(always)]
    fn is_reached(&self) -> bool {
        self.segments != UNREACHABLE
    }

    /// Fewer segments wins, then strictly higher weight
    #[inline(always)]
    fn improves_on(&self, other: &State) -> bool {
        self.segments < other.segments
            || (self.segments == other.segments && self.weight > other.weight)
    }
}

/// Reusable segmenter.
///
/// Holds the DP scratch buffers so that segmenting many words does not
/// reallocate per word. Results depend only on the word and vocabulary.
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    /// Byte offset of every char boundary, `N + 1` entries
    offsets: Vec<usize>,
    states: Vec<State>,
}

impl Segmenter {
    /// Create a segmenter with empty buffers
    pub fn new() -> Self {
        Self::default()
    }

    /// Find the minimal-length, maximal-weight segmentation of `word`.
    ///
    /// Every character of `word` must have a single-character entry in
    /// `vocabulary`; otherwise [`CoreError::CoverageViolation`] names the
    /// first one that does not. Among fully tied candidates the one whose
    /// last piece starts earliest is kept, recursively, so output is
    /// deterministic.
    pub fn segment(&mut self, word: &str, vocabulary: &Vocabulary) -> Result<Segmentation> {
        if word.is_empty() {
            return Err(CoreError::EmptyWord);
        }

        self.offsets.clear();
        for (position, (offset, ch)) in word.char_indices().enumerate() {
            if !vocabulary.covers(ch) {
                return Err(CoreError::CoverageViolation {
                    word: word.to_string(),
                    character: ch,
                    position,
                });
            }
            self.offsets.push(offset);
        }
        self.offsets.push(word.len());

        let len_char = self.offsets.len() - 1;
        // No key is longer than this, so earlier states cannot transition to m.
        let span = vocabulary.max_key_chars().max(1);

        self.states.clear();
        self.states.resize(len_char + 1, State::UNREACHED);
        self.states[0] = State::START;

        for m in 1..=len_char {
            let mut best = State::UNREACHED;
            for n in m.saturating_sub(span)..m {
                let from = self.states[n];
                if !from.is_reached() {
                    continue;
                }
                let Some(weight) = vocabulary.weight(&word[self.offsets[n]..self.offsets[m]])
                else {
                    continue;
                };
                let candidate = State {
                    segments: from.segments + 1,
                    weight: from.weight + weight,
                    back: n,
                };
                if candidate.improves_on(&best) {
                    best = candidate;
                }
            }
            self.states[m] = best;
        }

        let last = self.states[len_char];
        if !last.is_reached() {
            // Single-character entries always reach the end.
            return Err(CoreError::ReconstructionMismatch {
                word: word.to_string(),
                reconstructed: String::new(),
            });
        }

        let mut pieces = Vec::with_capacity(last.segments);
        let mut m = len_char;
        while m > 0 {
            let n = self.states[m].back;
            pieces.push(word[self.offsets[n]..self.offsets[m]].to_string());
            m = n;
        }
        pieces.reverse();

        let reconstructed = pieces.concat();
        if reconstructed != word {
            return Err(CoreError::ReconstructionMismatch {
                word: word.to_string(),
                reconstructed,
            });
        }

        Ok(Segmentation::new(pieces, last.weight))
    }
}

/// Segment a single word with a throwaway [`Segmenter`]
pub fn segment(word: &str, vocabulary: &Vocabulary) -> Result<Segmentation> {
    Segmenter::new().segment(word, vocabulary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_vocab() -> Vocabulary {
        Vocabulary::from_entries([
            ("a", 5.0),
            ("b", 9.0),
            ("c", 50.0),
            ("ab", 11.0),
            ("bc", 20.0),
            ("cb", 31.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_sample_word() {
        let seg = segment("abccbaba", &sample_vocab()).unwrap();
        assert_eq!(seg.pieces(), ["ab", "c", "cb", "ab", "a"]);
        assert_eq!(seg.weight(), 108.0);
    }

    #[test]
    fn test_fewer_pieces_beat_heavier_pieces() {
        let vocab = Vocabulary::from_entries([("a", 100.0), ("b", 100.0), ("ab", 0.0)]).unwrap();
        let seg = segment("ab", &vocab).unwrap();
        assert_eq!(seg.pieces(), ["ab"]);
        assert_eq!(seg.weight(), 0.0);
    }

    #[test]
    fn test_weight_breaks_length_ties() {
        let vocab =
            Vocabulary::from_entries([("a", 0.0), ("b", 0.0), ("c", 0.0), ("ab", 1.0), ("bc", 2.0)])
                .unwrap();
        let seg = segment("abc", &vocab).unwrap();
        assert_eq!(seg.pieces(), ["a", "bc"]);
    }

    #[test]
    fn test_full_tie_is_deterministic() {
        let vocab =
            Vocabulary::from_entries([("a", 0.0), ("b", 0.0), ("c", 0.0), ("ab", 1.0), ("bc", 1.0)])
                .unwrap();
        let first = segment("abc", &vocab).unwrap();
        for _ in 0..10 {
            assert_eq!(segment("abc", &vocab).unwrap(), first);
        }
        // the earliest-starting last piece is kept
        assert_eq!(first.pieces(), ["a", "bc"]);
    }

    #[test]
    fn test_single_character_word() {
        let seg = segment("c", &sample_vocab()).unwrap();
        assert_eq!(seg.pieces(), ["c"]);
        assert_eq!(seg.weight(), 50.0);
    }

    #[test]
    fn test_coverage_violation() {
        let err = segment("abxa", &sample_vocab()).unwrap_err();
        assert_eq!(
            err,
            CoreError::CoverageViolation {
                word: "abxa".to_string(),
                character: 'x',
                position: 2,
            }
        );
        assert!(!err.is_internal());
    }

    #[test]
    fn test_coverage_requires_single_char_entry() {
        // "ab" alone could cover the word, but the single chars are missing
        let vocab = Vocabulary::from_entries([("ab", 1.0)]).unwrap();
        assert!(matches!(
            segment("ab", &vocab),
            Err(CoreError::CoverageViolation { character: 'a', .. })
        ));
    }

    #[test]
    fn test_empty_word() {
        assert_eq!(segment("", &sample_vocab()), Err(CoreError::EmptyWord));
    }

    #[test]
    fn test_multibyte_characters() {
        let vocab = Vocabulary::from_entries([
            ("日", 0.0),
            ("本", 0.0),
            ("語", 0.0),
            ("日本", 1.0),
            ("é", 0.0),
        ])
        .unwrap();
        let seg = segment("日本語é", &vocab).unwrap();
        assert_eq!(seg.pieces(), ["日本", "語", "é"]);
    }

    #[test]
    fn test_segmenter_reuse_across_words() {
        let vocab = sample_vocab();
        let mut segmenter = Segmenter::new();

        let long = segmenter.segment("abccbaba", &vocab).unwrap();
        let short = segmenter.segment("bcaab", &vocab).unwrap();
        let again = segmenter.segment("abccbaba", &vocab).unwrap();

        assert_eq!(short.pieces(), ["bc", "a", "ab"]);
        assert_eq!(long, again);
    }

    #[test]
    fn test_error_does_not_poison_segmenter() {
        let vocab = sample_vocab();
        let mut segmenter = Segmenter::new();

        assert!(segmenter.segment("abz", &vocab).is_err());
        assert_eq!(segmenter.segment("ab", &vocab).unwrap().pieces(), ["ab"]);
    }
}
