//! Benchmark for the asynchronous materializing operations.
//!
//! Measures the overhead of driving a stream instead of an iterator into the
//! same containers, with and without a cancellation token attached.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use futures::stream;
use seqext::SequenceError;
use seqext::sequence::SequenceExt;
use seqext::stream::AsyncSequenceExt;
use std::hint::black_box;
use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;

fn ready_stream(size: u64) -> impl futures::Stream<Item = Result<u64, SequenceError>> {
    stream::iter((0..size).rev().map(Ok))
}

// =============================================================================
// Stream vs Iterator Benchmark
// =============================================================================

fn benchmark_to_sorted_dictionary(criterion: &mut Criterion) {
    let runtime = Runtime::new().expect("failed to create runtime");
    let mut group = criterion.benchmark_group("to_sorted_dictionary");

    for size in [100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("iterator", size), &size, |bencher, &size| {
            bencher.iter(|| black_box((0..size).rev().to_sorted_dictionary(|key| *key)));
        });

        group.bench_with_input(BenchmarkId::new("stream", size), &size, |bencher, &size| {
            bencher.to_async(&runtime).iter(|| async move {
                black_box(ready_stream(size).to_sorted_dictionary_async(|key| *key).await)
            });
        });

        group.bench_with_input(
            BenchmarkId::new("stream/with_cancellation", size),
            &size,
            |bencher, &size| {
                bencher.to_async(&runtime).iter(|| async move {
                    let token = CancellationToken::new();
                    black_box(
                        ready_stream(size)
                            .with_cancellation(token)
                            .to_sorted_dictionary_async(|key| *key)
                            .await,
                    )
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// to_sorted_set_async Benchmark
// =============================================================================

fn benchmark_to_sorted_set(criterion: &mut Criterion) {
    let runtime = Runtime::new().expect("failed to create runtime");
    let mut group = criterion.benchmark_group("to_sorted_set_async");

    for size in [100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("SortedSet", size), &size, |bencher, &size| {
            bencher
                .to_async(&runtime)
                .iter(|| async move { black_box(ready_stream(size).to_sorted_set_async().await) });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_to_sorted_dictionary, benchmark_to_sorted_set);
criterion_main!(benches);
