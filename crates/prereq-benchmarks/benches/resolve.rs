//! Resolution performance benchmarks
//!
//! Covers long chains, wide layered graphs, and graphs full of cycles under
//! both cycle policies.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use prereq_benchmarks::{chain_graph, criterion_config, cyclic_graph, layered_graph};
use prereq_core::types::CyclePolicy;

fn bench_chain_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain_resolution");

    for len in [100, 1_000, 10_000] {
        let graph = chain_graph(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("courses", len), &graph, |b, graph| {
            b.iter(|| black_box(graph.resolve(CyclePolicy::Strict).unwrap()));
        });
    }

    group.finish();
}

fn bench_layered_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("layered_resolution");

    for (layers, width) in [(10, 10), (20, 50), (50, 100)] {
        let graph = layered_graph(layers, width);
        group.throughput(Throughput::Elements((layers * width) as u64));

        group.bench_with_input(
            BenchmarkId::new("courses", layers * width),
            &graph,
            |b, graph| {
                b.iter(|| black_box(graph.resolve(CyclePolicy::Merge).unwrap()));
            },
        );
    }

    group.finish();
}

fn bench_cycle_handling(c: &mut Criterion) {
    let mut group = c.benchmark_group("cycle_handling");

    for count in [10, 1_000, 10_000] {
        let graph = cyclic_graph(count);
        group.throughput(Throughput::Elements((count * 3) as u64));

        group.bench_with_input(BenchmarkId::new("merge", count), &graph, |b, graph| {
            b.iter(|| black_box(graph.resolve(CyclePolicy::Merge).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("strict", count), &graph, |b, graph| {
            b.iter(|| black_box(graph.resolve(CyclePolicy::Strict).is_err()));
        });
    }

    group.finish();
}

fn bench_learning_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("learning_path");

    for len in [1_000, 10_000] {
        let resolution = chain_graph(len).resolve(CyclePolicy::Strict).unwrap();
        let target = format!("course-{}", len - 1);

        group.bench_with_input(BenchmarkId::new("chain", len), &target, |b, target| {
            b.iter(|| black_box(resolution.learning_path(target).unwrap()));
        });
    }

    group.finish();
}

fn bench_cycle_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("cycle_detection");

    let graph = chain_graph(100_000);
    group.bench_function("acyclic_chain_100k", |b| {
        b.iter(|| black_box(graph.has_cycle()));
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = criterion_config();
    targets = bench_chain_resolution, bench_layered_resolution, bench_cycle_handling,
        bench_learning_path, bench_cycle_detection
}
criterion_main!(benches);
