use graph_stepper::heuristic::Manhattan;
use graph_stepper::{
    generate, AStar, Algorithm, Bfs, Dfs, Dijkstra, GeneratorSettings, Graph, Outcome, RunState,
    Session, Termination, VertexId,
};
use proptest::prelude::*;

fn settings() -> impl Strategy<Value = GeneratorSettings> {
    (1usize..12, 0usize..30, any::<bool>(), any::<u64>()).prop_map(
        |(count_node, count_edge, directed, seed)| GeneratorSettings {
            count_node,
            count_edge,
            directed,
            seed,
            ..GeneratorSettings::default()
        },
    )
}

fn run<A: Algorithm>(g: &Graph, a: &A, start: VertexId, goal: Option<VertexId>) -> Vec<RunState> {
    let mut states = vec![a.reset(g, start, goal).unwrap()];
    while !states.last().unwrap().is_complete() {
        let next = a.step(g, states.last().unwrap());
        states.push(next);
    }
    states
}

/// All-pairs shortest paths; `unit` ignores weights.
fn floyd_warshall(g: &Graph, unit: bool) -> Vec<Vec<f64>> {
    let n = g.vertex_count();
    let mut d = vec![vec![f64::INFINITY; n]; n];
    for (i, row) in d.iter_mut().enumerate() {
        row[i] = 0.0;
    }
    for (_, a, b, w) in g.edges() {
        let w = if unit { 1.0 } else { w };
        let (a, b) = (a.index(), b.index());
        d[a][b] = d[a][b].min(w);
        if !g.is_directed() {
            d[b][a] = d[b][a].min(w);
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let via = d[i][k] + d[k][j];
                if via < d[i][j] {
                    d[i][j] = via;
                }
            }
        }
    }
    d
}

fn naive_dfs(g: &Graph, u: VertexId, seen: &mut Vec<VertexId>) {
    seen.push(u);
    for (v, _) in g.neighbors(u) {
        if !seen.contains(&v) {
            naive_dfs(g, v, seen);
        }
    }
}

proptest! {
    #[test]
    fn bfs_hop_counts_are_shortest(s in settings()) {
        let g = generate::random(&s).unwrap();
        let reference = floyd_warshall(&g, true);
        let last = run(&g, &Bfs::new(), VertexId::new(0), None).pop().unwrap();
        for i in 0..g.vertex_count() {
            prop_assert_eq!(last.distance(VertexId::new(i)), reference[0][i]);
        }
    }

    #[test]
    fn dijkstra_distances_are_shortest(s in settings()) {
        let g = generate::random(&s).unwrap();
        let reference = floyd_warshall(&g, false);
        let d = Dijkstra::new().with_termination(Termination::Exhaust);
        let last = run(&g, &d, VertexId::new(0), None).pop().unwrap();
        for i in 0..g.vertex_count() {
            prop_assert_eq!(last.distance(VertexId::new(i)), reference[0][i]);
        }
    }

    #[test]
    fn dijkstra_finalizes_in_distance_order(s in settings()) {
        let g = generate::random(&s).unwrap();
        let d = Dijkstra::new().with_termination(Termination::Exhaust);
        let states = run(&g, &d, VertexId::new(0), None);
        for pair in states.windows(2) {
            // a finalized distance never changes
            for v in &pair[0].visited {
                prop_assert_eq!(pair[0].distance(*v), pair[1].distance(*v));
            }
        }
        let last = states.last().unwrap();
        let dists: Vec<f64> = last.order.iter().map(|v| last.distance(*v)).collect();
        prop_assert!(dists.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn zero_heuristic_astar_costs_like_dijkstra(s in settings(), goal in 0usize..12) {
        let g = generate::random(&s).unwrap();
        let goal = VertexId::new(goal % g.vertex_count());
        let a = run(&g, &AStar::default(), VertexId::new(0), Some(goal)).pop().unwrap();
        let d = run(&g, &Dijkstra::new(), VertexId::new(0), Some(goal)).pop().unwrap();
        prop_assert_eq!(a.result(), d.result());
    }

    #[test]
    fn manhattan_astar_is_optimal_on_grids(
        rows in 1usize..6,
        cols in 1usize..6,
        goal in 0usize..36,
    ) {
        let g = generate::grid(rows, cols);
        let goal = VertexId::new(goal % (rows * cols));
        let a = run(&g, &AStar::new(Manhattan), VertexId::new(0), Some(goal)).pop().unwrap();
        let d = run(&g, &Dijkstra::new(), VertexId::new(0), Some(goal)).pop().unwrap();
        let cost = |s: &RunState| match s.result() {
            Some(Outcome::Found { cost, .. }) => Some(*cost),
            _ => None,
        };
        prop_assert_eq!(cost(&a), cost(&d));
        prop_assert!(a.order.len() <= d.order.len());
    }

    #[test]
    fn recursive_dfs_matches_naive_recursion(s in settings()) {
        let g = generate::random(&s).unwrap();
        let mut expected = Vec::new();
        naive_dfs(&g, VertexId::new(0), &mut expected);
        let last = run(&g, &Dfs::recursive(), VertexId::new(0), None).pop().unwrap();
        prop_assert_eq!(last.order, expected);
    }

    #[test]
    fn dfs_variants_agree_on_trees(n in 1usize..40) {
        let g = generate::binary_tree(n);
        let it = run(&g, &Dfs::iterative(), VertexId::new(0), None).pop().unwrap();
        let rec = run(&g, &Dfs::recursive(), VertexId::new(0), None).pop().unwrap();
        prop_assert_eq!(&it.order, &rec.order);
        prop_assert_eq!(it.order.len(), n);
        prop_assert_eq!(it.parent, rec.parent);
    }

    #[test]
    fn k_steps_back_restore_reset(s in settings(), k in 0usize..40) {
        let g = generate::random(&s).unwrap();
        let mut session = Session::new(g, Dfs::recursive(), VertexId::new(0), None).unwrap();
        let initial = session.state().clone();
        let mut taken = 0;
        for _ in 0..k {
            if session.is_complete() {
                break;
            }
            session.step_forward();
            taken += 1;
        }
        for _ in 0..taken {
            session.step_back().unwrap();
        }
        prop_assert_eq!(session.state(), &initial);
    }
}
