use serde::{Deserialize, Serialize};

use crate::algorithms::heuristic::HeuristicKind;
use crate::algorithms::{AStar, Bfs, Dfs, DfsVariant, Dijkstra};
use crate::{Algorithm, AlgorithmKind, Graph, Result, RunState, Termination, VertexId};

/// Algorithm chosen at runtime, e.g. from a run description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnyAlgorithm {
    Bfs(Bfs),
    Dfs(Dfs),
    Dijkstra(Dijkstra),
    AStar(AStar<HeuristicKind>),
}

/// Serializable algorithm choice without termination policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AlgorithmChoice {
    Bfs,
    Dfs {
        #[serde(default)]
        variant: DfsVariant,
    },
    Dijkstra,
    AStar {
        #[serde(default)]
        heuristic: HeuristicKind,
    },
}

impl AlgorithmChoice {
    /// Builds the engine, keeping its default termination unless one is given.
    pub fn build(self, termination: Option<Termination>) -> AnyAlgorithm {
        let any = match self {
            AlgorithmChoice::Bfs => AnyAlgorithm::Bfs(Bfs::new()),
            AlgorithmChoice::Dfs { variant } => AnyAlgorithm::Dfs(Dfs::new(variant)),
            AlgorithmChoice::Dijkstra => AnyAlgorithm::Dijkstra(Dijkstra::new()),
            AlgorithmChoice::AStar { heuristic } => AnyAlgorithm::AStar(AStar::new(heuristic)),
        };
        match termination {
            Some(t) => any.with_termination(t),
            None => any,
        }
    }
}

impl AnyAlgorithm {
    pub fn with_termination(self, termination: Termination) -> Self {
        match self {
            AnyAlgorithm::Bfs(a) => AnyAlgorithm::Bfs(a.with_termination(termination)),
            AnyAlgorithm::Dfs(a) => AnyAlgorithm::Dfs(a.with_termination(termination)),
            AnyAlgorithm::Dijkstra(a) => AnyAlgorithm::Dijkstra(a.with_termination(termination)),
            AnyAlgorithm::AStar(a) => AnyAlgorithm::AStar(a.with_termination(termination)),
        }
    }

    fn inner(&self) -> &dyn Algorithm {
        match self {
            AnyAlgorithm::Bfs(a) => a,
            AnyAlgorithm::Dfs(a) => a,
            AnyAlgorithm::Dijkstra(a) => a,
            AnyAlgorithm::AStar(a) => a,
        }
    }
}

impl Algorithm for AnyAlgorithm {
    fn kind(&self) -> AlgorithmKind {
        self.inner().kind()
    }

    fn termination(&self) -> Termination {
        self.inner().termination()
    }

    fn reset(&self, g: &Graph, start: VertexId, goal: Option<VertexId>) -> Result<RunState> {
        self.inner().reset(g, start, goal)
    }

    fn step(&self, g: &Graph, state: &RunState) -> RunState {
        self.inner().step(g, state)
    }
}

impl From<Bfs> for AnyAlgorithm {
    fn from(a: Bfs) -> Self {
        AnyAlgorithm::Bfs(a)
    }
}

impl From<Dfs> for AnyAlgorithm {
    fn from(a: Dfs) -> Self {
        AnyAlgorithm::Dfs(a)
    }
}

impl From<Dijkstra> for AnyAlgorithm {
    fn from(a: Dijkstra) -> Self {
        AnyAlgorithm::Dijkstra(a)
    }
}

impl From<AStar<HeuristicKind>> for AnyAlgorithm {
    fn from(a: AStar<HeuristicKind>) -> Self {
        AnyAlgorithm::AStar(a)
    }
}
