//! Benchmarks for segmentation and line encoding

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use optiseg_engine::{segment, SentenceEncoder, Vocabulary};
use std::hint::black_box;

/// Vocabulary over a-z with every bigram and a handful of longer keys
fn build_vocabulary() -> Vocabulary {
    let letters: Vec<char> = ('a'..='z').collect();
    let mut vocab = Vocabulary::new();
    for &a in &letters {
        vocab.insert(a.to_string(), 0.0).unwrap();
        for &b in &letters {
            let weight = f64::from((a as u32 * 31 + b as u32) % 17);
            vocab.insert(format!("{a}{b}"), weight).unwrap();
        }
    }
    for key in ["the", "ing", "tion", "ment", "segment", "encode"] {
        vocab.insert(key, 5.0).unwrap();
    }
    vocab
}

/// Generate roughly `size_kb` kilobytes of lowercase text
fn generate_test_text(size_kb: usize) -> String {
    let base_text = "the segmentation engine encodes every word into the fewest pieces ";
    base_text.repeat(size_kb * 1024 / base_text.len())
}

fn benchmark_segment_word(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment_word");
    let vocab = build_vocabulary();

    for len in [8usize, 32, 128] {
        let word: String = "segmentation".chars().cycle().take(len).collect();
        group.bench_with_input(BenchmarkId::from_parameter(len), &word, |b, word| {
            b.iter(|| segment(black_box(word), &vocab).unwrap());
        });
    }

    group.finish();
}

fn benchmark_encode_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_lines");
    let text = generate_test_text(64);
    let lines: Vec<&str> = text.split_inclusive("pieces ").collect();

    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("cold_cache", |b| {
        b.iter(|| {
            let mut encoder = SentenceEncoder::new(build_vocabulary(), "@@").unwrap();
            for line in &lines {
                black_box(encoder.encode(line).unwrap());
            }
        });
    });

    let mut warm = SentenceEncoder::new(build_vocabulary(), "@@").unwrap();
    for line in &lines {
        warm.encode(line).unwrap();
    }
    group.bench_function("warm_cache", |b| {
        b.iter(|| {
            for line in &lines {
                black_box(warm.encode(line).unwrap());
            }
        });
    });

    #[cfg(feature = "parallel")]
    {
        let encoder = SentenceEncoder::new(build_vocabulary(), "@@").unwrap();
        group.bench_function("batch_parallel", |b| {
            b.iter(|| black_box(encoder.encode_batch(&lines, None).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_segment_word, benchmark_encode_lines);
criterion_main!(benches);
