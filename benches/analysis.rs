//! Benchmarks for chatpulse parsing and analysis.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench analysis -- assembly`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatpulse::config::{AnalysisConfig, StopWords};
use chatpulse::metrics::word_cloud;
use chatpulse::parsing::{AssemblyOptions, LineClassifier, assemble};
use chatpulse::sentiment::{LexiconScorer, PolarityScorer, annotate};
use chatpulse::{Analyzer, Message};

// =============================================================================
// Test Data Generators
// =============================================================================

const BODIES: &[&str] = &[
    "good morning, how are you doing today?",
    "terrible traffic again, I hate mondays 😡",
    "haha that's amazing 😂😂",
    "see you at the station at five",
    "not bad at all, thanks!",
];

fn generate_bracketed(count: usize) -> String {
    let mut lines = Vec::with_capacity(count);
    for i in 0..count {
        let sender = if i % 2 == 0 { "Alice" } else { "Bob" };
        let day = 1 + (i / 1440) % 28;
        let hour = (i / 60) % 24;
        let minute = i % 60;
        lines.push(format!(
            "[2024-01-{:02}, {:02}:{:02}:00] {}: {}",
            day,
            hour,
            minute,
            sender,
            BODIES[i % BODIES.len()]
        ));
        if i % 10 == 0 {
            lines.push("a continuation line".to_string());
        }
    }
    lines.join("\n")
}

fn generate_us_dash(count: usize) -> String {
    let mut lines = Vec::with_capacity(count);
    for i in 0..count {
        let sender = if i % 2 == 0 { "Alice" } else { "Bob" };
        let hour = (i / 60) % 12 + 1;
        let minute = i % 60;
        let ampm = if (i / 720) % 2 == 0 { "AM" } else { "PM" };
        lines.push(format!(
            "1/15/24, {}:{:02} {} - {}: {}",
            hour,
            minute,
            ampm,
            sender,
            BODIES[i % BODIES.len()]
        ));
    }
    lines.join("\n")
}

// =============================================================================
// Parsing Benchmarks
// =============================================================================

fn bench_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("assembly");
    let classifier = LineClassifier::standard();

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let txt = generate_bracketed(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("bracketed", size), &txt, |b, txt| {
            b.iter(|| {
                let assembly = assemble(black_box(txt), classifier, AssemblyOptions::default());
                black_box(assembly)
            });
        });

        let txt = generate_us_dash(size);
        group.bench_with_input(BenchmarkId::new("us_dash", size), &txt, |b, txt| {
            b.iter(|| {
                let assembly = assemble(black_box(txt), classifier, AssemblyOptions::default());
                black_box(assembly)
            });
        });
    }
    group.finish();
}

// =============================================================================
// Sentiment Benchmarks
// =============================================================================

fn parsed(count: usize) -> Vec<Message> {
    assemble(
        &generate_bracketed(count),
        LineClassifier::standard(),
        AssemblyOptions::default(),
    )
    .messages
}

fn bench_scoring(c: &mut Criterion) {
    let scorer = LexiconScorer::new();
    c.bench_function("lexicon_polarity", |b| {
        b.iter(|| {
            for body in BODIES {
                black_box(scorer.polarity(black_box(body)));
            }
        });
    });
}

fn bench_annotate(c: &mut Criterion) {
    let mut group = c.benchmark_group("annotate");
    let scorer = LexiconScorer::new();
    let config = AnalysisConfig::default();

    for size in [1_000_usize, 10_000] {
        let messages = parsed(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &messages, |b, messages| {
            b.iter(|| black_box(annotate(messages.clone(), &scorer, &config)));
        });
    }
    group.finish();
}

fn bench_word_cloud(c: &mut Criterion) {
    let messages = parsed(10_000);
    let stop_words = StopWords::for_participants(["Alice", "Bob"]);
    c.bench_function("word_cloud_10000", |b| {
        b.iter(|| black_box(word_cloud(black_box(&messages), &stop_words, 4, 50)));
    });
}

// =============================================================================
// End-to-End Pipeline Benchmark
// =============================================================================

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    let analyzer = Analyzer::new();

    for size in [1_000_usize, 10_000, 50_000] {
        let txt = generate_bracketed(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| {
                // Full pipeline: decode -> parse -> annotate -> reduce -> JSON
                let report = analyzer.analyze_bytes(black_box(txt.as_bytes())).unwrap();
                black_box(report.to_json().unwrap())
            });
        });
    }
    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(
    benches,
    bench_assembly,
    bench_scoring,
    bench_annotate,
    bench_word_cloud,
    bench_full_pipeline,
);

criterion_main!(benches);
