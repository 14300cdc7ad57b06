//! Benchmarks for lazy sequence traversal.
//!
//! Includes:
//! - First traversal (every step computes a node)
//! - Repeated traversal over cached nodes
//! - Bidirectional walks from an origin

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use lazyseq::prelude::*;

fn incrementer() -> impl Rule<u64> {
    FnRule::new(
        |n: &Node<u64>| n.value().checked_sub(1),
        |n: &Node<u64>| Some(n.value() + 1),
    )
}

/// Benchmark walking fresh nodes.
fn bench_first_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("first_walk");

    for len in [100i64, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("at", len), &len, |b, &len| {
            b.iter(|| {
                let mut seq = Sequence::new(incrementer());
                let origin = seq.head(0);
                black_box(seq.at(origin, len))
            });
        });
    }

    group.finish();
}

/// Benchmark walking nodes that are already cached.
fn bench_cached_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("cached_walk");

    for len in [100i64, 1_000, 10_000] {
        let config = SequenceConfig::default().with_capacity(len as usize + 1);
        let mut seq = Sequence::with_config(incrementer(), config);
        let origin = seq.head(0);
        assert!(seq.at(origin, len).is_ok(), "incrementer has no upper boundary");

        group.bench_with_input(BenchmarkId::new("at", len), &len, |b, &len| {
            b.iter(|| black_box(seq.at(origin, len)));
        });
    }

    group.finish();
}

/// Benchmark an outward walk in both directions from a midpoint.
fn bench_bidirectional(c: &mut Criterion) {
    c.bench_function("bidirectional_1000", |b| {
        b.iter(|| {
            let mut seq = Sequence::new(incrementer());
            let mid = seq.origin(1_000);
            let forward = seq.successors(mid).take(1_000).count();
            let backward = seq.predecessors(mid).count();
            black_box((forward, backward))
        });
    });
}

criterion_group!(benches, bench_first_walk, bench_cached_walk, bench_bidirectional);
criterion_main!(benches);
