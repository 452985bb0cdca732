use crate::algorithms::algorithm::{mismatched, trace_step};
use crate::algorithms::best_first;
use crate::{
    Algorithm, AlgorithmKind, Frontier, Graph, Result, RunState, Termination, VertexId,
};

/// Dijkstra's shortest paths over non-negative weights.
///
/// A step either extracts the minimum-distance vertex from the queue and
/// finalizes it, or relaxes a single edge of the vertex finalized last.
/// Superseded queue entries are skipped on extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dijkstra {
    termination: Termination,
}

impl Default for Dijkstra {
    fn default() -> Self {
        Self {
            termination: Termination::AtGoal,
        }
    }
}

impl Dijkstra {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_termination(mut self, termination: Termination) -> Self {
        self.termination = termination;
        self
    }
}

impl Algorithm for Dijkstra {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Dijkstra
    }

    fn termination(&self) -> Termination {
        self.termination
    }

    fn reset(&self, g: &Graph, start: VertexId, goal: Option<VertexId>) -> Result<RunState> {
        best_first::reset(AlgorithmKind::Dijkstra, g, start, goal, |_| 0.0)
    }

    fn step(&self, g: &Graph, state: &RunState) -> RunState {
        if state.is_complete() {
            return state.clone();
        }
        if !matches!(state.frontier, Frontier::Priority(_)) {
            return mismatched(state, AlgorithmKind::Dijkstra);
        }

        let next = best_first::step(self.termination, g, state.successor(), |_| 0.0);
        trace_step(&next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generate, Outcome, StepTag, StepperError};

    fn run(g: &Graph, d: &Dijkstra, start: VertexId, goal: Option<VertexId>) -> Vec<RunState> {
        let mut states = vec![d.reset(g, start, goal).unwrap()];
        while !states.last().unwrap().is_complete() {
            let next = d.step(g, states.last().unwrap());
            states.push(next);
        }
        states
    }

    #[test]
    fn takes_long_way_round_cycle() {
        // 0-1-2-3-4-0 with the closing edge 4-0 at weight 5
        let g = generate::cycle(&[1.0, 1.0, 1.0, 1.0, 5.0]);
        let v = VertexId::new;
        let states = run(&g, &Dijkstra::new(), v(0), Some(v(3)));
        let last = states.last().unwrap();

        assert_eq!(last.tag, StepTag::GoalReached);
        assert_eq!(
            last.result(),
            Some(&Outcome::Found {
                path: vec![v(0), v(1), v(2), v(3)],
                cost: 3.0
            })
        );
        assert!(last.message.contains("0 -> 1 -> 2 -> 3"));
    }

    #[test]
    fn each_relaxation_is_its_own_step() {
        let g = generate::cycle(&[1.0, 1.0, 1.0, 1.0, 5.0]);
        let d = Dijkstra::new();
        let s0 = d.reset(&g, VertexId::new(0), None).unwrap();
        let s1 = d.step(&g, &s0);
        assert_eq!(s1.tag, StepTag::ExtractMin);
        assert_eq!(s1.relax_pending.len(), 2);

        let s2 = d.step(&g, &s1);
        assert_eq!(s2.tag, StepTag::Relax);
        assert_eq!(s2.distance(VertexId::new(1)), 1.0);
        assert_eq!(s2.relax_pending.len(), 1);
        let edge = s2.active_edge.unwrap();
        assert_eq!((edge.from.index(), edge.to.index()), (0, 1));

        let s3 = d.step(&g, &s2);
        assert_eq!(s3.tag, StepTag::Relax);
        assert_eq!(s3.distance(VertexId::new(4)), 5.0);
        assert!(s3.relax_pending.is_empty());
    }

    #[test]
    fn parallel_edges_report_the_relaxing_weight() {
        let mut g = Graph::directed();
        let a = g.add_vertex("a");
        let b = g.add_vertex("b");
        g.add_edge(a, b, 5.0);
        g.add_edge(a, b, 2.0);

        let states = run(&g, &Dijkstra::new(), a, Some(b));
        let tags: Vec<StepTag> = states.iter().map(|s| s.tag).collect();
        assert_eq!(
            tags,
            vec![
                StepTag::Init,
                StepTag::ExtractMin,
                StepTag::Relax,
                StepTag::Relax,
                StepTag::GoalReached,
            ]
        );
        let last = states.last().unwrap();
        assert_eq!(last.parent_weight.get(&b), Some(&2.0));
        let edge = last.active_edge.unwrap();
        assert_eq!((edge.from, edge.to, edge.weight), (a, b, 2.0));
    }

    #[test]
    fn stale_entries_are_skipped() {
        // 4 first gets 5 via the direct edge, later 4 via 3
        let g = generate::cycle(&[1.0, 1.0, 1.0, 1.0, 5.0]);
        let states = run(&g, &Dijkstra::new(), VertexId::new(0), None);
        let last = states.last().unwrap();

        assert!(states.iter().any(|s| s.tag == StepTag::SkipFinalized));
        assert_eq!(last.distance(VertexId::new(4)), 4.0);
        assert_eq!(last.parent.get(&VertexId::new(4)), Some(&VertexId::new(3)));
        assert_eq!(last.result(), Some(&Outcome::Traversed { visited: 5 }));
    }

    #[test]
    fn equal_cost_edge_is_not_an_improvement() {
        let mut g = Graph::undirected();
        let a = g.add_vertex("a");
        let b = g.add_vertex("b");
        let c = g.add_vertex("c");
        g.add_edge(a, b, 1.0);
        g.add_edge(a, c, 1.0);
        g.add_edge(b, c, 1.0);

        let states = run(&g, &Dijkstra::new(), a, None);
        let skipped = states
            .iter()
            .find(|s| s.tag == StepTag::NoImprovement)
            .unwrap();
        assert!(skipped.message.contains("not better than 1"));
        assert_eq!(states.last().unwrap().parent.get(&c), Some(&a));
    }

    #[test]
    fn finalization_order_is_non_decreasing() {
        let g = generate::grid(3, 4);
        let states = run(&g, &Dijkstra::new(), VertexId::new(0), None);
        let last = states.last().unwrap();
        let dists: Vec<f64> = last.order.iter().map(|v| last.distance(*v)).collect();
        assert!(dists.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(last.order.len(), 12);
    }

    #[test]
    fn negative_weight_rejected_at_reset() {
        let mut g = Graph::directed();
        let a = g.add_vertex("a");
        let b = g.add_vertex("b");
        g.add_edge(a, b, -2.0);
        let err = Dijkstra::new().reset(&g, a, Some(b)).unwrap_err();
        assert!(matches!(err, StepperError::NegativeWeight { .. }));
    }

    #[test]
    fn unreachable_goal_exhausts() {
        let mut g = Graph::directed();
        let a = g.add_vertex("a");
        let b = g.add_vertex("b");
        g.add_edge(b, a, 1.0);
        let states = run(&g, &Dijkstra::new(), a, Some(b));
        let last = states.last().unwrap();
        assert_eq!(last.tag, StepTag::Exhausted);
        assert_eq!(last.result(), Some(&Outcome::NotFound));
        assert!(last.distance(b).is_infinite());
    }
}
