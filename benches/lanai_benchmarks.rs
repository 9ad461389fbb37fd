// Copyright (c) 2025 Lanai Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lanai Prefix Trie Benchmarks
//!
//! Benchmarks are implemented using the Criterion framework, which
//! provides statistical analysis and performance regression detection.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, SamplingMode, Throughput,
};
use std::time::Duration;

use lanai_trie::LanaiTrie;

/// Synthetic corpus: zero-padded keys share the "key_" prefix, so every
/// insertion touches the same shared path before branching.
fn corpus(size: usize) -> Vec<(String, String)> {
    (0..size)
        .map(|i| (format!("key_{i:06}"), format!("value_{}", i % 16)))
        .collect()
}

fn bench_lanai_trie(c: &mut Criterion) {
    let mut group = c.benchmark_group("lanai_trie");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));
    group.sample_size(100);

    // Insertion performance with different corpus sizes
    for size in [100, 1000, 10_000].iter() {
        let pairs = corpus(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("insert", size), &pairs, |b, pairs| {
            b.iter(|| {
                let mut trie = LanaiTrie::new();
                for (key, value) in pairs {
                    trie.insert(black_box(key.as_str()), value.as_str());
                }
                trie
            });
        });
    }

    // Lookup performance at a heavily shared prefix
    for size in [100, 1000, 10_000].iter() {
        let trie: LanaiTrie = corpus(*size).into_iter().collect();
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("lookup_shared_prefix", size), &trie, |b, trie| {
            b.iter(|| trie.lookup(black_box("key_")));
        });
    }

    // Deduplicated lookup over the same accumulation
    for size in [100, 1000, 10_000].iter() {
        let trie: LanaiTrie = corpus(*size).into_iter().collect();
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("lookup_unique_shared_prefix", size),
            &trie,
            |b, trie| {
                b.iter(|| trie.lookup_unique(black_box("key_")));
            },
        );
    }

    // Point lookups of full keys
    let trie: LanaiTrie = corpus(10_000).into_iter().collect();
    group.bench_function("lookup_full_key", |b| {
        b.iter(|| trie.lookup(black_box("key_004242")));
    });
    group.bench_function("lookup_missing_key", |b| {
        b.iter(|| trie.lookup(black_box("key_999999x")));
    });

    group.finish();
}

criterion_group!(benches, bench_lanai_trie);
criterion_main!(benches);
