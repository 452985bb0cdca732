//! Stepwise, reversible graph search for algorithm visualizers.
//!
//! Every engine advances one primitive operation per [`Algorithm::step`] and
//! returns a complete [`RunState`] snapshot: frontier, visited set, costs,
//! parents, the edge just touched and a line of narration. A [`Session`]
//! keeps the snapshots so a run can be stepped back, and [`Playback`] replays
//! it on a timer.

mod algorithms;
mod error;
mod graph;
mod history;
mod playback;
mod run_spec;
mod session;
mod state;

pub mod frontier;
pub mod generate;
pub mod pseudocode;

#[cfg(feature = "events")]
pub mod events;

pub use self::algorithms::heuristic;
pub use self::algorithms::{
    AStar, Algorithm, AlgorithmChoice, AlgorithmKind, AnyAlgorithm, Bfs, Dfs, DfsVariant,
    Dijkstra, Heuristic, HeuristicKind, Termination,
};
pub use self::error::{Result, StepperError, VertexRole};
pub use self::generate::GeneratorSettings;
pub use self::graph::{Edge, Graph, Vertex, VertexId};
pub use self::history::StepHistory;
pub use self::playback::{Playback, PlaybackSettings, DEFAULT_DELAY};
pub use self::run_spec::{EdgeSpec, GraphSpec, IdMap, NodeSpec, RunSpec};
pub use self::session::Session;
pub use self::state::{ActiveEdge, Cost, Frontier, Outcome, RunState, Status, StepTag};
