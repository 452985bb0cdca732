mod algorithm;
mod any;
mod astar;
mod best_first;
mod bfs;
mod dfs;
mod dijkstra;

pub mod heuristic;

pub use algorithm::{Algorithm, AlgorithmKind, Termination};
pub use any::{AlgorithmChoice, AnyAlgorithm};
pub use astar::AStar;
pub use bfs::Bfs;
pub use dfs::{Dfs, DfsVariant};
pub use dijkstra::Dijkstra;
pub use heuristic::{Heuristic, HeuristicKind};
