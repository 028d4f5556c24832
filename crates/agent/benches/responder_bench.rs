//! Responder hot-path benchmarks
//!
//! Run with: cargo bench -p concierge-agent --bench responder_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use concierge_agent::{ratio, FirstResponseSelector, Responder};
use concierge_core::IntentCatalog;
use concierge_text_processing::normalize;

const HOTEL_CATALOG: &str = include_str!("../../../config/intents.json");

fn responder() -> Responder {
    let catalog = IntentCatalog::from_json_str("config/intents.json", HOTEL_CATALOG)
        .expect("shipped catalog is valid");
    Responder::new(catalog)
        .expect("shipped catalog compiles")
        .with_selector(std::sync::Arc::new(FirstResponseSelector))
}

// =============================================================================
// Normalization
// =============================================================================

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for input in [
        "hello",
        "Could I get some extra towels, please?",
        "I'd like to know what time the rooftop pool closes and whether towels are provided",
    ] {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(input.len()), input, |b, input| {
            b.iter(|| normalize(black_box(input)))
        });
    }

    group.finish();
}

// =============================================================================
// Similarity ratio
// =============================================================================

fn bench_ratio(c: &mut Criterion) {
    let mut group = c.benchmark_group("similarity_ratio");

    group.bench_function("short_typo", |b| {
        b.iter(|| ratio(black_box("helo"), black_box("hello")))
    });
    group.bench_function("sentence", |b| {
        b.iter(|| {
            ratio(
                black_box("the air conditioning in my room is not working"),
                black_box("the air conditioning is not working"),
            )
        })
    });

    group.finish();
}

// =============================================================================
// Full reply
// =============================================================================

fn bench_respond(c: &mut Criterion) {
    let responder = responder();
    let mut group = c.benchmark_group("respond");

    group.bench_function("exact_hit", |b| {
        b.iter(|| responder.respond(black_box("could I get extra towels")))
    });
    group.bench_function("fuzzy_hit", |b| {
        b.iter(|| responder.respond(black_box("brekfast time")))
    });
    group.bench_function("fallback", |b| {
        b.iter(|| responder.respond(black_box("the quick brown fox jumps over the lazy dog")))
    });

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_ratio, bench_respond);
criterion_main!(benches);
