//! Criterion benchmarks for miniparse.
//!
//! Covers the three hot paths:
//! - Character-class tokenization
//! - Entity extraction over raw text
//! - Full pipeline runs

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use miniparse::prelude::*;

/// Generate test messages for benchmarking.
fn generate_test_messages(count: usize) -> Vec<String> {
    let fragments = [
        "please",
        "call",
        "me",
        "at",
        "555-123-4567",
        "or",
        "email",
        "jane.doe@example.com",
        "about",
        "the",
        "3.5",
        "release,",
        "see",
        "https://example.com/notes",
        "for",
        "details!",
        "Um,",
        "thanks",
        "#42",
        "café",
    ];

    let mut messages = Vec::with_capacity(count);
    for i in 0..count {
        let length = 20 + (i % 40);
        let mut words = Vec::with_capacity(length);

        for j in 0..length {
            let idx = (i * 7 + j * 13) % fragments.len(); // Pseudo-random distribution
            words.push(fragments[idx]);
        }

        messages.push(words.join(" "));
    }

    messages
}

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");
    let messages = generate_test_messages(1000);

    let config = TokenizerConfig::default();
    group.bench_function("single_message", |b| {
        b.iter(|| black_box(tokenize(black_box(&messages[0]), &config)))
    });

    let merged = TokenizerConfig::default().with_merge_symbols(true);
    group.throughput(Throughput::Elements(100));
    group.bench_function("batch_merge_symbols", |b| {
        b.iter(|| {
            for text in messages.iter().take(100) {
                black_box(tokenize(black_box(text), &merged));
            }
        })
    });

    group.finish();
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");
    let messages = generate_test_messages(1000);
    let extractor = EntityExtractor::default();

    group.throughput(Throughput::Elements(100));
    group.bench_function("all_scanners", |b| {
        b.iter(|| {
            for text in messages.iter().take(100) {
                black_box(extractor.scan(black_box(text)));
            }
        })
    });

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let messages = generate_test_messages(1000);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();
    let pipeline = Pipeline::new()
        .add_stage(Arc::new(CleanStage::new().remove_whitespace(true)))
        .add_stage(Arc::new(EntityExtractor::default()));

    group.throughput(Throughput::Elements(100));
    group.bench_function("clean_and_extract", |b| {
        b.iter(|| {
            runtime.block_on(async {
                for text in messages.iter().take(100) {
                    black_box(pipeline.process(black_box(text)).await.unwrap());
                }
            })
        })
    });

    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_extract, bench_pipeline);
criterion_main!(benches);
