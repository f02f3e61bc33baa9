use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use flownet::FlowNetwork;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_edges(n: usize, m: usize, seed: u64) -> Vec<(usize, usize, i64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..m)
        .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n), rng.gen_range(1..100)))
        .filter(|&(u, v, _)| u != v)
        .collect()
}

/// Layered network: source -> layer 0 -> ... -> layer k -> sink, fully
/// connected between consecutive layers.
fn layered_edges(layers: usize, width: usize) -> Vec<(usize, usize, i64)> {
    let source = 0;
    let sink = layers * width + 1;
    let id = |layer: usize, i: usize| 1 + layer * width + i;
    let mut edges = Vec::new();
    for i in 0..width {
        edges.push((source, id(0, i), 10 + i as i64));
        edges.push((id(layers - 1, i), sink, 10 + i as i64));
    }
    for layer in 0..layers - 1 {
        for i in 0..width {
            for j in 0..width {
                edges.push((id(layer, i), id(layer + 1, j), 1 + ((i + j) % 7) as i64));
            }
        }
    }
    edges
}

fn build(edges: &[(usize, usize, i64)]) -> FlowNetwork<usize, i64> {
    let mut net = FlowNetwork::new();
    for &(u, v, c) in edges {
        net.add_edge(u, v, c).unwrap();
    }
    net
}

fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("max_flow_random");
    for &(n, m) in &[(50, 200), (200, 1000), (500, 4000)] {
        let edges = random_edges(n, m, 7);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", n, m)),
            &edges,
            |b, edges| {
                b.iter(|| {
                    let mut net = build(edges);
                    black_box(net.max_flow(&0, &(n - 1)).unwrap())
                })
            },
        );
    }
    group.finish();
}

fn bench_layered(c: &mut Criterion) {
    let mut group = c.benchmark_group("max_flow_layered");
    for &(layers, width) in &[(4, 8), (8, 16)] {
        let edges = layered_edges(layers, width);
        let sink = layers * width + 1;
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", layers, width)),
            &edges,
            |b, edges| {
                b.iter(|| {
                    let mut net = build(edges);
                    black_box(net.max_flow(&0, &sink).unwrap())
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_random, bench_layered);
criterion_main!(benches);
