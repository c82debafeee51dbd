use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sssp_core::graph::generators::{random_dag, random_digraph};
use sssp_core::{AcyclicSP, BellmanFordSP, DijkstraSP, ShortestPaths};

fn bench_engines(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let non_negative = random_digraph::<f64, _>(2_000, 20_000, 0.0..10.0, &mut rng).unwrap();
    let dag = random_dag::<f64, _>(2_000, 20_000, -5.0..10.0, &mut rng).unwrap();

    c.bench_function("dijkstra 2k/20k", |b| {
        b.iter(|| {
            let sp = DijkstraSP::new(&non_negative, 0).unwrap();
            black_box(sp.dist_to(1_999).unwrap());
        })
    });

    c.bench_function("bellman-ford 2k/20k", |b| {
        b.iter(|| {
            let sp = BellmanFordSP::new(&non_negative, 0).unwrap();
            black_box(sp.dist_to(1_999).unwrap());
        })
    });

    c.bench_function("acyclic-sp 2k/20k dag", |b| {
        b.iter(|| {
            let sp = AcyclicSP::new(&dag, 0).unwrap();
            black_box(sp.dist_to(1_999).unwrap());
        })
    });
}

criterion_group!(benches, bench_engines);
criterion_main!(benches);
