use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use graph_stepper::heuristic::Manhattan;
use graph_stepper::{generate, AStar, Algorithm, Bfs, Dijkstra, GeneratorSettings, Session, VertexId};
use std::hint::black_box;
use std::time::Duration;

fn bench_full_runs(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_runs");
    group.sample_size(10);
    group.measurement_time(Duration::from_millis(600));
    group.warm_up_time(Duration::from_millis(200));

    let random = generate::random(&GeneratorSettings {
        count_node: 200,
        count_edge: 800,
        seed: 42,
        ..GeneratorSettings::default()
    })
    .unwrap();
    let grid = generate::grid(30, 30);

    group.bench_function("bfs_n200_m800", |b| {
        b.iter_batched(
            || Session::new(random.clone(), Bfs::new(), VertexId::new(0), None).unwrap(),
            |mut s| {
                s.run_to_end();
                black_box(s);
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("dijkstra_n200_m800", |b| {
        b.iter_batched(
            || Session::new(random.clone(), Dijkstra::new(), VertexId::new(0), None).unwrap(),
            |mut s| {
                s.run_to_end();
                black_box(s);
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("astar_grid30_corner_to_corner", |b| {
        let goal = Some(VertexId::new(30 * 30 - 1));
        b.iter_batched(
            || Session::new(grid.clone(), AStar::new(Manhattan), VertexId::new(0), goal).unwrap(),
            |mut s| {
                s.run_to_end();
                black_box(s);
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_single_step(c: &mut Criterion) {
    let g = generate::grid(30, 30);
    let d = Dijkstra::new();
    let mut state = d.reset(&g, VertexId::new(0), None).unwrap();
    // advance into the middle of the run where the frontier is widest
    for _ in 0..1500 {
        state = d.step(&g, &state);
    }

    c.bench_function("dijkstra_step_grid30_mid_run", |b| {
        b.iter(|| black_box(d.step(&g, black_box(&state))));
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().configure_from_args();
    targets = bench_full_runs, bench_single_step
}
criterion_main!(benches);
