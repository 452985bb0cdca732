use crate::algorithms::algorithm::{
    check_endpoints, conclude, mismatched, names, stops_at, trace_step,
};
use crate::frontier::FifoQueue;
use crate::{
    ActiveEdge, Algorithm, AlgorithmKind, Cost, Frontier, Graph, Result, RunState, StepTag,
    Termination, VertexId,
};

/// Breadth-first search over unit-cost edges.
///
/// Each step dequeues one vertex, marks it visited and enqueues every neighbor
/// that is neither visited nor already queued. Hop counts are recorded as `g`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bfs {
    termination: Termination,
}

impl Default for Bfs {
    fn default() -> Self {
        Self {
            termination: Termination::Exhaust,
        }
    }
}

impl Bfs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_termination(mut self, termination: Termination) -> Self {
        self.termination = termination;
        self
    }
}

impl Algorithm for Bfs {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Bfs
    }

    fn termination(&self) -> Termination {
        self.termination
    }

    fn reset(&self, g: &Graph, start: VertexId, goal: Option<VertexId>) -> Result<RunState> {
        check_endpoints(g, start, goal)?;

        let queue: FifoQueue<VertexId> = std::iter::once(start).collect();
        let mut state = RunState::initial(
            AlgorithmKind::Bfs,
            start,
            goal,
            Frontier::Queue(queue),
            format!("Enqueue start {} with distance 0", g.name(start)),
        );
        state.costs.insert(start, Cost::new(0.0));
        Ok(state)
    }

    fn step(&self, g: &Graph, state: &RunState) -> RunState {
        if state.is_complete() {
            return state.clone();
        }

        let mut next = state.successor();
        let Frontier::Queue(queue) = &mut next.frontier else {
            return mismatched(state, AlgorithmKind::Bfs);
        };

        let Some(u) = queue.pop_front() else {
            next.current = None;
            conclude(g, &mut next, StepTag::Exhausted, "Queue is empty");
            trace_step(&next);
            return next;
        };
        next.current = Some(u);
        if let (Some(&p), Some(&weight)) = (next.parent.get(&u), next.parent_weight.get(&u)) {
            next.active_edge = Some(ActiveEdge {
                from: p,
                to: u,
                weight,
            });
        }

        if next.visited.contains(&u) {
            next.tag = StepTag::SkipVisited;
            next.message = format!("Dequeue {}: already visited, skip", g.name(u));
            trace_step(&next);
            return next;
        }

        next.visited.insert(u);
        next.order.push(u);
        let du = next.costs.get(&u).map_or(0.0, |c| c.g);

        if stops_at(self.termination, next.goal, u) {
            let reason = format!("Dequeue goal {} at distance {du}", g.name(u));
            conclude(g, &mut next, StepTag::GoalReached, &reason);
            trace_step(&next);
            return next;
        }

        let mut enqueued = Vec::new();
        for (v, w) in g.neighbors(u) {
            if next.visited.contains(&v) || queue.contains(&v) {
                continue;
            }
            next.costs.insert(v, Cost::new(du + 1.0));
            next.parent.insert(v, u);
            next.parent_weight.insert(v, w);
            queue.push_back(v);
            enqueued.push(v);
        }

        next.tag = StepTag::Dequeue;
        next.message = format!(
            "Dequeue {} (distance {du}), mark visited, enqueue {}",
            g.name(u),
            names(g, &enqueued)
        );
        trace_step(&next);
        next
    }
}
