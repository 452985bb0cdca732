use crate::algorithms::algorithm::{mismatched, trace_step};
use crate::algorithms::best_first;
use crate::algorithms::heuristic::{Heuristic, Zero};
use crate::{
    Algorithm, AlgorithmKind, Frontier, Graph, Result, RunState, StepperError, Termination,
    VertexId,
};

/// A* search: Dijkstra ordered by `g + h` towards a required goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AStar<H = Zero> {
    heuristic: H,
    termination: Termination,
}

impl Default for AStar<Zero> {
    fn default() -> Self {
        Self::new(Zero)
    }
}

impl<H: Heuristic> AStar<H> {
    pub fn new(heuristic: H) -> Self {
        Self {
            heuristic,
            termination: Termination::AtGoal,
        }
    }

    pub fn with_termination(mut self, termination: Termination) -> Self {
        self.termination = termination;
        self
    }

    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }
}

impl<H: Heuristic> Algorithm for AStar<H> {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::AStar
    }

    fn termination(&self) -> Termination {
        self.termination
    }

    fn reset(&self, g: &Graph, start: VertexId, goal: Option<VertexId>) -> Result<RunState> {
        let Some(goal) = goal else {
            return Err(StepperError::MissingGoal {
                algorithm: AlgorithmKind::AStar.name(),
            });
        };
        best_first::reset(AlgorithmKind::AStar, g, start, Some(goal), |v| {
            self.heuristic.estimate(g, v, goal)
        })
    }

    fn step(&self, g: &Graph, state: &RunState) -> RunState {
        if state.is_complete() {
            return state.clone();
        }
        let (Frontier::Priority(_), Some(goal)) = (&state.frontier, state.goal) else {
            return mismatched(state, AlgorithmKind::AStar);
        };

        let next = best_first::step(self.termination, g, state.successor(), |v| {
            self.heuristic.estimate(g, v, goal)
        });
        trace_step(&next);
        next
    }
}
