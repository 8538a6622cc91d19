use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pprof::criterion::{Output, PProfProfiler};
use quiz_topics::{TopicRegistry, TOPICS};
use std::time::Duration;

/// Benchmark id and slug lookups at the front and back of the catalog
fn lookup_benchmark(c: &mut Criterion) {
    let registry = TopicRegistry::new();
    let mut group = c.benchmark_group("registry_lookup");
    group.measurement_time(Duration::from_secs(5));

    let first = TOPICS[0].id();
    let last = TOPICS[TOPICS.len() - 1].id();

    for id in [first, last, "does-not-exist"] {
        group.bench_with_input(BenchmarkId::new("by_id", id), &id, |b, &id| {
            b.iter(|| registry.get_topic(black_box(id)));
        });
        group.bench_with_input(BenchmarkId::new("by_slug", id), &id, |b, &id| {
            b.iter(|| registry.get_topic_by_slug(black_box(id)));
        });
    }

    group.finish();
}

/// Benchmark full passes over the catalog, as a listing screen would do
fn listing_benchmark(c: &mut Criterion) {
    let registry = TopicRegistry::new();
    let mut group = c.benchmark_group("registry_listing");

    group.bench_function("iterate_names", |b| {
        b.iter(|| {
            for topic in registry.iter() {
                black_box(topic.name());
            }
        });
    });

    group.bench_function("total_questions", |b| {
        b.iter(|| black_box(registry.total_questions()));
    });

    group.finish();
}

// Configure criterion to use pprof for flamegraph generation
fn criterion_config() -> Criterion {
    Criterion::default()
        .with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)))
}

criterion_group! {
    name = benches;
    config = criterion_config();
    targets = lookup_benchmark, listing_benchmark
}

criterion_main!(benches);
