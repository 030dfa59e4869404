//! Criterion benchmarks for the end-to-end selection pipeline.

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use augur_cache::ResultCache;
use augur_core::config::AugurConfig;
use augur_core::models::{Answer, QuestionGroup};
use augur_engine::{init_tracing_with_filter, DivinationEngine};

const TEXT: &str = "Lately I feel torn between my career and my family. \
    I keep switching roles and wonder whether it is time for a real change, \
    or whether I should wait until things are calmer.";

fn answers() -> Vec<Answer> {
    let groups = [QuestionGroup::A, QuestionGroup::B, QuestionGroup::C];
    (0..12)
        .map(|i| Answer::new(format!("q{i}"), groups[i % 3], (i % 5) as u8 + 1))
        .collect()
}

fn bench_answers_uncached(c: &mut Criterion) {
    init_tracing_with_filter("warn");
    let engine = DivinationEngine::new(AugurConfig::default()).unwrap();
    let answers = answers();
    c.bench_function("answers_uncached", |b| {
        b.iter(|| engine.divine_answers(black_box(&answers)).unwrap())
    });
}

fn bench_text_uncached(c: &mut Criterion) {
    let engine = DivinationEngine::new(AugurConfig::default()).unwrap();
    c.bench_function("text_uncached", |b| {
        b.iter(|| engine.divine_text(black_box(TEXT)).unwrap())
    });
}

fn bench_text_cached(c: &mut Criterion) {
    let config = AugurConfig::default();
    let cache = Arc::new(ResultCache::new(&config.cache).unwrap());
    let engine = DivinationEngine::builder(config).cache(cache).build().unwrap();
    engine.divine_text(TEXT).unwrap();
    c.bench_function("text_cached", |b| {
        b.iter(|| engine.divine_text(black_box(TEXT)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_answers_uncached,
    bench_text_uncached,
    bench_text_cached
);
criterion_main!(benches);
