//! End-to-end encoding tests for optiseg-engine

use optiseg_engine::*;
use proptest::prelude::*;
use std::sync::Arc;

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
fn test_sample_word_segmentation() {
    let mut cache = SegmentationCache::new(Arc::new(sample_vocab()));
    let seg = cache.segment_word("abccbaba").unwrap();
    assert_eq!(seg.pieces(), ["ab", "c", "cb", "ab", "a"]);
}

#[test]
fn test_sample_sentence() {
    let mut encoder = SentenceEncoder::builder()
        .vocabulary(sample_vocab())
        .separator("-")
        .build()
        .unwrap();

    assert_eq!(
        encoder.encode("abccbaba bcaab\n").unwrap(),
        "ab- c- cb- ab- a bc- a- ab"
    );
}

#[test]
fn test_word_stream_with_end_of_word_entries() {
    let mut vocab = sample_vocab();
    vocab.insert("a ", 5.0).unwrap();
    vocab.insert("ab ", 11.0).unwrap();

    let mut encoder = SentenceEncoder::builder()
        .vocabulary(vocab)
        .separator("-")
        .build()
        .unwrap();

    let tokens: Vec<String> = encoder
        .segment_words(["abccbaba", "bcaab"])
        .collect::<Result<_>>()
        .unwrap();
    assert_eq!(tokens, ["ab-", "c-", "cb-", "ab-", "a", "bc-", "a-", "ab"]);
}

#[test]
fn test_coverage_violation_returns_no_partial_result() {
    let vocab = Vocabulary::from_entries([("a", 1.0), ("ab", 2.0)]).unwrap();
    let mut encoder = SentenceEncoder::new(vocab, "-").unwrap();

    let err = encoder.encode("aab").unwrap_err();
    assert!(matches!(
        err,
        EngineError::Core(CoreError::CoverageViolation { character: 'b', position: 2, .. })
    ));
    assert!(encoder.cache().is_empty());
}

#[test]
fn test_cache_holds_exactly_one_entry_per_word() {
    let mut encoder = SentenceEncoder::new(sample_vocab(), "-").unwrap();

    let first = encoder.segment_word("abccbaba").unwrap();
    let second = encoder.segment_word("abccbaba").unwrap();

    assert_eq!(first, second);
    assert_eq!(encoder.cache().len(), 1);
    assert_eq!(encoder.cache().get("abccbaba"), Some(&first));
    assert_eq!(encoder.cache().stats().misses, 1);
}

#[test]
fn test_repeated_words_in_a_line_hit_the_cache() {
    let mut encoder = SentenceEncoder::new(sample_vocab(), "-").unwrap();
    encoder.encode("ab ab ab cb ab").unwrap();

    assert_eq!(encoder.cache().len(), 2);
    assert_eq!(encoder.cache().stats(), CacheStats { hits: 3, misses: 2 });
}

#[test]
fn test_independent_encoders_do_not_share_caches() {
    let vocab = Arc::new(sample_vocab());
    let mut first = SentenceEncoder::builder()
        .shared_vocabulary(Arc::clone(&vocab))
        .build()
        .unwrap();
    let second = SentenceEncoder::builder()
        .shared_vocabulary(vocab)
        .build()
        .unwrap();

    first.encode("abc").unwrap();
    assert_eq!(first.cache().len(), 1);
    assert!(second.cache().is_empty());
}

#[test]
fn test_decode_round_trip_with_codes() {
    let codes = MergeCodes::parse("#version: 0.2\na b\nb c\nc b\na b</w>\n").unwrap();
    let mut encoder = SentenceEncoder::builder().codes(codes).build().unwrap();

    let encoded = encoder.encode("abccbaba bcaab\n").unwrap();
    assert_eq!(encoded, "ab@@ c@@ cb@@ ab@@ a bc@@ a@@ ab");
    assert_eq!(encoder.decode(&encoded), "abccbaba bcaab");
}

#[test]
fn test_encoder_usable_behind_mutex() {
    use std::sync::Mutex;
    use std::thread;

    let encoder = Arc::new(Mutex::new(SentenceEncoder::new(sample_vocab(), "-").unwrap()));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let encoder = Arc::clone(&encoder);
            thread::spawn(move || encoder.lock().unwrap().encode("abccbaba bcaab").unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "ab- c- cb- ab- a bc- a- ab");
    }
    assert_eq!(encoder.lock().unwrap().cache().len(), 2);
}

proptest! {
    #[test]
    fn prop_surrounding_whitespace_is_ignored(
        word in "[abc]{1,12}",
        lead in "[ \t]{0,3}",
        trail in "[ \t]{0,3}(\r?\n)?",
    ) {
        let mut encoder = SentenceEncoder::new(sample_vocab(), "-").unwrap();
        let padded = format!("{lead}{word}{trail}");
        prop_assert_eq!(encoder.encode(&padded).unwrap(), encoder.encode(&word).unwrap());
    }

    #[test]
    fn prop_marker_placement(word in "[abc]{1,12}") {
        let mut encoder = SentenceEncoder::new(sample_vocab(), "@@").unwrap();
        let pieces = encoder.segment_word(&word).unwrap().len();
        let tokens: Vec<String> = encoder
            .segment_words([word.as_str()])
            .collect::<Result<_>>()
            .unwrap();

        prop_assert_eq!(tokens.len(), pieces);
        for (i, token) in tokens.iter().enumerate() {
            prop_assert_eq!(token.ends_with("@@"), i + 1 < pieces);
        }
    }

    #[test]
    fn prop_decode_inverts_encode(words in prop::collection::vec("[abc]{1,8}", 0..6)) {
        let mut encoder = SentenceEncoder::new(sample_vocab(), "@@").unwrap();
        let line = words.join(" ");
        let encoded = encoder.encode(&line).unwrap();
        prop_assert_eq!(encoder.decode(&encoded), line);
    }
}
