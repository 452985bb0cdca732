use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Graph, VertexId};

/// Estimate of the remaining cost from a vertex to the goal.
///
/// A* only finds shortest paths when the estimate never exceeds the true
/// remaining cost.
pub trait Heuristic {
    fn estimate(&self, g: &Graph, v: VertexId, goal: VertexId) -> f64;
}

impl<F> Heuristic for F
where
    F: Fn(&Graph, VertexId, VertexId) -> f64,
{
    fn estimate(&self, g: &Graph, v: VertexId, goal: VertexId) -> f64 {
        self(g, v, goal)
    }
}

/// Always zero. A* with it expands exactly like Dijkstra.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Zero;

impl Heuristic for Zero {
    fn estimate(&self, _: &Graph, _: VertexId, _: VertexId) -> f64 {
        0.0
    }
}

/// Straight-line distance between vertex positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euclidean;

impl Heuristic for Euclidean {
    fn estimate(&self, g: &Graph, v: VertexId, goal: VertexId) -> f64 {
        positions(g, v, goal).map_or(0.0, |([x1, y1], [x2, y2])| {
            (x1 - x2).hypot(y1 - y2)
        })
    }
}

/// Sum of axis distances between vertex positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    fn estimate(&self, g: &Graph, v: VertexId, goal: VertexId) -> f64 {
        positions(g, v, goal).map_or(0.0, |([x1, y1], [x2, y2])| {
            (x1 - x2).abs() + (y1 - y2).abs()
        })
    }
}

/// Level difference of two vertices in a heap-numbered binary tree, where
/// vertex `i` sits on level `floor(log2(i + 1))`.
///
/// Admissible on [`crate::generate::binary_tree`] graphs with unit weights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeDepth;

impl Heuristic for TreeDepth {
    fn estimate(&self, _: &Graph, v: VertexId, goal: VertexId) -> f64 {
        let level = |i: usize| (i + 1).ilog2();
        f64::from(level(v.index()).abs_diff(level(goal.index())))
    }
}

/// Precomputed estimates, zero for vertices without an entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lookup(pub BTreeMap<VertexId, f64>);

impl Heuristic for Lookup {
    fn estimate(&self, _: &Graph, v: VertexId, _: VertexId) -> f64 {
        self.0.get(&v).copied().unwrap_or_default()
    }
}

impl FromIterator<(VertexId, f64)> for Lookup {
    fn from_iter<I: IntoIterator<Item = (VertexId, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn positions(g: &Graph, a: VertexId, b: VertexId) -> Option<([f64; 2], [f64; 2])> {
    Some((g.vertex(a)?.position()?, g.vertex(b)?.position()?))
}

/// Named heuristic, selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeuristicKind {
    #[default]
    Zero,
    Euclidean,
    Manhattan,
    TreeDepth,
}

impl Heuristic for HeuristicKind {
    fn estimate(&self, g: &Graph, v: VertexId, goal: VertexId) -> f64 {
        match self {
            HeuristicKind::Zero => Zero.estimate(g, v, goal),
            HeuristicKind::Euclidean => Euclidean.estimate(g, v, goal),
            HeuristicKind::Manhattan => Manhattan.estimate(g, v, goal),
            HeuristicKind::TreeDepth => TreeDepth.estimate(g, v, goal),
        }
    }
}
