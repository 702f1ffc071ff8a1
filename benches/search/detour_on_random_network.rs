use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use detour_core::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn random_network(nodes: usize, edges: usize, seed: u64) -> RoadNetwork {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut g = RoadNetwork::with_nodes(nodes);

    let mut added = 0;
    while added < edges {
        let a = rng.gen_range(0..nodes);
        let b = rng.gen_range(0..nodes);
        if a == b {
            continue;
        }
        g.add_edge(Edge::new(
            node_index(a),
            node_index(b),
            rng.gen_range(1..1_000u64),
        ));
        added += 1;
    }
    g
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("detour_search");

    for size in [100usize, 500, 1000] {
        let g = random_network(size, size * 4, 42);

        group.bench_with_input(BenchmarkId::new("pruned", size), &g, |b, g| {
            b.iter(|| {
                let mut search = DetourSearch::new(g);
                black_box(search.run())
            })
        });
        group.bench_with_input(BenchmarkId::new("exhaustive", size), &g, |b, g| {
            b.iter(|| {
                let mut search = DetourSearch::new(g);
                black_box(search.run_exhaustive().unwrap())
            })
        });
    }

    group.finish();
}
