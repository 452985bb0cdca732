//! Error types for the stepping engines.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for engine and session operations.
pub type Result<T> = std::result::Result<T, StepperError>;

/// Which endpoint of a run a vertex was supplied for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VertexRole {
    Start,
    Goal,
}

impl fmt::Display for VertexRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VertexRole::Start => f.write_str("start"),
            VertexRole::Goal => f.write_str("goal"),
        }
    }
}

/// Hard failures surfaced to the caller.
///
/// Exhausting the frontier or popping a stale entry are not errors; they are
/// ordinary steps reported through the snapshot narration.
#[derive(Error, Debug)]
pub enum StepperError {
    /// Start or goal vertex is not part of the graph.
    #[error("{role} vertex {id} is not in the graph")]
    UnknownVertex {
        /// Whether the vertex was given as start or goal.
        role: VertexRole,
        /// Index of the missing vertex.
        id: usize,
    },

    /// The algorithm needs a goal to compute its key (A*).
    #[error("{algorithm} requires a goal vertex")]
    MissingGoal {
        /// Display name of the algorithm.
        algorithm: &'static str,
    },

    /// Weighted searches only accept non-negative edge weights.
    #[error("edge {from} -> {to} has negative weight {weight}")]
    NegativeWeight { from: usize, to: usize, weight: f64 },

    /// NaN or infinite edge weight.
    #[error("edge {from} -> {to} has non-finite weight {weight}")]
    NonFiniteWeight { from: usize, to: usize, weight: f64 },

    /// Step back requested with nothing to undo.
    #[error("step history is empty")]
    EmptyHistory,

    /// Run description is structurally valid JSON but semantically wrong.
    #[error("invalid run spec: {0}")]
    InvalidSpec(String),

    /// Generator settings that cannot produce a graph.
    #[error("invalid generator settings: {0}")]
    InvalidSettings(String),

    /// Run description failed to parse.
    #[error("run spec json: {0}")]
    Json(#[from] serde_json::Error),
}
