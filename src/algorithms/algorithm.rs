use serde::{Deserialize, Serialize};

use crate::{Graph, Outcome, Result, RunState, StepTag, StepperError, VertexId, VertexRole};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlgorithmKind {
    Bfs,
    DfsIterative,
    DfsRecursive,
    Dijkstra,
    AStar,
}

impl AlgorithmKind {
    pub fn name(self) -> &'static str {
        match self {
            AlgorithmKind::Bfs => "BFS",
            AlgorithmKind::DfsIterative => "DFS (iterative)",
            AlgorithmKind::DfsRecursive => "DFS (recursive)",
            AlgorithmKind::Dijkstra => "Dijkstra",
            AlgorithmKind::AStar => "A*",
        }
    }
}

/// When a run with a goal stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Termination {
    /// Stop as soon as the goal is visited or finalized.
    AtGoal,
    /// Keep going until the frontier is empty. The outcome still reports the
    /// path to the goal when one was found.
    Exhaust,
}

/// A steppable search over a [`Graph`].
///
/// Implementations hold configuration only. All run state lives in the
/// [`RunState`] snapshots, so `step` is a pure function of graph and snapshot.
pub trait Algorithm {
    fn kind(&self) -> AlgorithmKind;

    fn termination(&self) -> Termination;

    /// Builds the initial snapshot. Fails when start or goal are not in the
    /// graph or the graph violates the algorithm's preconditions.
    fn reset(&self, g: &Graph, start: VertexId, goal: Option<VertexId>) -> Result<RunState>;

    /// Performs exactly one micro-step and returns the resulting snapshot.
    ///
    /// A completed snapshot is returned unchanged.
    fn step(&self, g: &Graph, state: &RunState) -> RunState;
}

pub(crate) fn check_endpoints(g: &Graph, start: VertexId, goal: Option<VertexId>) -> Result<()> {
    if !g.contains(start) {
        return Err(StepperError::UnknownVertex {
            role: VertexRole::Start,
            id: start.index(),
        });
    }
    if let Some(goal) = goal {
        if !g.contains(goal) {
            return Err(StepperError::UnknownVertex {
                role: VertexRole::Goal,
                id: goal.index(),
            });
        }
    }
    Ok(())
}

/// Finishes the run and appends a summary of the outcome to `reason`.
pub(crate) fn conclude(g: &Graph, state: &mut RunState, tag: StepTag, reason: &str) {
    state.finish(tag, String::new());
    let summary = match &state.outcome {
        Some(Outcome::Found { path, cost }) => format!(
            "path {} with cost {}",
            path.iter().map(|v| g.name(*v)).collect::<Vec<_>>().join(" -> "),
            fmt_cost(*cost)
        ),
        Some(Outcome::NotFound) => "goal is unreachable".to_string(),
        Some(Outcome::Traversed { visited }) => format!("{visited} vertices visited"),
        None => String::new(),
    };
    state.message = format!("{reason}; {summary}");
}

/// Whether the vertex just visited ends the run.
pub(crate) fn stops_at(termination: Termination, goal: Option<VertexId>, v: VertexId) -> bool {
    termination == Termination::AtGoal && goal == Some(v)
}

pub(crate) fn fmt_cost(c: f64) -> String {
    if c.is_infinite() {
        "inf".to_string()
    } else {
        format!("{c}")
    }
}

pub(crate) fn names(g: &Graph, vs: &[VertexId]) -> String {
    if vs.is_empty() {
        return "none".to_string();
    }
    vs.iter().map(|v| g.name(*v)).collect::<Vec<_>>().join(", ")
}

/// Returned when a snapshot from a different algorithm is fed in.
pub(crate) fn mismatched(state: &RunState, expected: AlgorithmKind) -> RunState {
    log::warn!(
        "{} cannot step a {} snapshot; returning it unchanged",
        expected.name(),
        state.algorithm.name()
    );
    state.clone()
}

pub(crate) fn trace_step(state: &RunState) {
    log::trace!(
        "{} step {}: {:?} {}",
        state.algorithm.name(),
        state.step,
        state.tag,
        state.message
    );
}
