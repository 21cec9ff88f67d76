//! Benchmarks for the semiring graph algorithms

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use semiring_graph::{bfs, multi_source_bfs, mssp, sssp, triangle_count, AnyMatrix, GrBMatrix};

/// Deterministic xorshift edge list, `degree` out-edges per vertex
fn random_edges(n: usize, degree: usize, seed: u64) -> (Vec<usize>, Vec<usize>) {
    let mut state = seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) | 1;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    let mut rows = Vec::with_capacity(n * degree);
    let mut cols = Vec::with_capacity(n * degree);
    for u in 0..n {
        for _ in 0..degree {
            rows.push(u);
            cols.push((next() % n as u64) as usize);
        }
    }
    (rows, cols)
}

fn bool_graph(n: usize, degree: usize, seed: u64) -> AnyMatrix {
    let (rows, cols) = random_edges(n, degree, seed);
    let values = vec![true; rows.len()];
    AnyMatrix::from(GrBMatrix::from_triples(n, n, &rows, &cols, &values).unwrap())
}

fn weighted_graph(n: usize, degree: usize, seed: u64) -> AnyMatrix {
    let (rows, cols) = random_edges(n, degree, seed);
    let values: Vec<i64> = (0..rows.len()).map(|i| (i % 17) as i64 + 1).collect();
    AnyMatrix::from(GrBMatrix::from_triples(n, n, &rows, &cols, &values).unwrap())
}

/// Benchmark single-source BFS
fn bench_bfs(c: &mut Criterion) {
    let mut group = c.benchmark_group("bfs");

    for size in [100, 1000, 5000] {
        let graph = bool_graph(size, 8, 1);
        group.throughput(Throughput::Elements(graph.nvals() as u64));

        group.bench_with_input(BenchmarkId::new("single", size), &graph, |bencher, graph| {
            bencher.iter(|| bfs(black_box(graph), 0));
        });
    }

    group.finish();
}

/// Benchmark batched BFS against repeated single-source runs
fn bench_multi_source_bfs(c: &mut Criterion) {
    let graph = bool_graph(1000, 8, 2);
    let sources: Vec<usize> = (0..16).map(|i| i * 61 % 1000).collect();

    let mut group = c.benchmark_group("multi_source_bfs");
    group.throughput(Throughput::Elements(sources.len() as u64));

    group.bench_function("batched_16", |bencher| {
        bencher.iter(|| multi_source_bfs(black_box(&graph), black_box(&sources)));
    });

    group.bench_function("repeated_16", |bencher| {
        bencher.iter(|| {
            sources
                .iter()
                .map(|&s| bfs(black_box(&graph), s))
                .collect::<Vec<_>>()
        });
    });

    group.finish();
}

/// Benchmark shortest paths
fn bench_shortest_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_paths");

    for size in [100, 500] {
        let graph = weighted_graph(size, 4, 3);

        group.bench_with_input(BenchmarkId::new("sssp", size), &graph, |bencher, graph| {
            bencher.iter(|| sssp(black_box(graph), 0));
        });

        let sources = [0, size / 3, size / 2, size - 1];
        group.bench_with_input(BenchmarkId::new("mssp_4", size), &graph, |bencher, graph| {
            bencher.iter(|| mssp(black_box(graph), black_box(&sources)));
        });
    }

    group.finish();
}

/// Benchmark triangle counting
fn bench_triangle_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangle_count");

    for size in [100, 1000] {
        let graph = bool_graph(size, 8, 4);
        group.throughput(Throughput::Elements(graph.nvals() as u64));

        group.bench_with_input(BenchmarkId::new("masked", size), &graph, |bencher, graph| {
            bencher.iter(|| triangle_count(black_box(graph)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_bfs,
    bench_multi_source_bfs,
    bench_shortest_paths,
    bench_triangle_count,
);

criterion_main!(benches);
