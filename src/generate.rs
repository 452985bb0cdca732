//! Ready-made graphs for demos and tests.
//!
//! Vertices are labelled with their index, so narration reads `0 -> 1 -> 2`.

use std::collections::BTreeSet;

use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::{Graph, Result, StepperError, VertexId};

/// Undirected heap-shaped binary tree: vertex `i` has children `2i + 1` and `2i + 2`.
pub fn binary_tree(n: usize) -> Graph {
    let mut g = Graph::undirected();
    let ids: Vec<VertexId> = (0..n).map(|i| g.add_vertex(i.to_string())).collect();
    for (i, &parent) in ids.iter().enumerate() {
        for child in [2 * i + 1, 2 * i + 2] {
            if let Some(&child) = ids.get(child) {
                g.add_edge(parent, child, 1.0);
            }
        }
    }
    g
}

/// Undirected cycle with one vertex per weight; edge `i` joins `i` and `i + 1`,
/// the last one closes the ring back to 0.
pub fn cycle(weights: &[f64]) -> Graph {
    let mut g = Graph::undirected();
    let n = weights.len();
    let ids: Vec<VertexId> = (0..n).map(|i| g.add_vertex(i.to_string())).collect();
    for (i, w) in weights.iter().enumerate() {
        g.add_edge(ids[i], ids[(i + 1) % n], *w);
    }
    g
}

/// Undirected 4-connected grid with unit weights. Vertex `r * cols + c` sits
/// at position `[c, r]`.
pub fn grid(rows: usize, cols: usize) -> Graph {
    let mut g = Graph::undirected();
    let mut ids = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            let label = (r * cols + c).to_string();
            ids.push(g.add_vertex_at(label, [c as f64, r as f64]));
        }
    }
    for r in 0..rows {
        for c in 0..cols {
            let at = ids[r * cols + c];
            if c + 1 < cols {
                g.add_edge(at, ids[r * cols + c + 1], 1.0);
            }
            if r + 1 < rows {
                g.add_edge(at, ids[(r + 1) * cols + c], 1.0);
            }
        }
    }
    g
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorSettings {
    pub count_node: usize,
    pub count_edge: usize,
    pub directed: bool,
    /// Inclusive range edge weights are drawn from, rounded to integers.
    pub weight_min: f64,
    pub weight_max: f64,
    pub seed: u64,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            count_node: 8,
            count_edge: 12,
            directed: false,
            weight_min: 1.0,
            weight_max: 9.0,
            seed: 0,
        }
    }
}

/// Random graph without self-loops or parallel edges.
///
/// The edge count is capped at what the vertex count allows. The same
/// settings always produce the same graph. Fails when the weight bounds are
/// not finite or their span does not fit in an `f64`.
pub fn random(settings: &GeneratorSettings) -> Result<Graph> {
    let (lo, hi) = if settings.weight_min <= settings.weight_max {
        (settings.weight_min, settings.weight_max)
    } else {
        (settings.weight_max, settings.weight_min)
    };
    let weights = Uniform::new_inclusive(lo, hi).map_err(|err| {
        StepperError::InvalidSettings(format!("weight range [{lo}, {hi}]: {err}"))
    })?;

    let mut rng = StdRng::seed_from_u64(settings.seed);
    let mut g = Graph::new(settings.directed);
    let n = settings.count_node;
    let ids: Vec<VertexId> = (0..n).map(|i| g.add_vertex(i.to_string())).collect();
    if n < 2 {
        return Ok(g);
    }

    let pairs = n.saturating_mul(n - 1);
    let max_edges = if settings.directed { pairs } else { pairs / 2 };
    let target = settings.count_edge.min(max_edges);

    let mut taken = BTreeSet::new();
    while taken.len() < target {
        let a = rng.random_range(0..n);
        let b = rng.random_range(0..n);
        if a == b {
            continue;
        }
        let key = if settings.directed { (a, b) } else { (a.min(b), a.max(b)) };
        if !taken.insert(key) {
            continue;
        }
        let weight = weights.sample(&mut rng).round();
        g.add_edge(ids[a], ids[b], weight);
    }

    log::debug!(
        "generated {} graph with {} vertices and {} edges (seed {})",
        if settings.directed { "directed" } else { "undirected" },
        g.vertex_count(),
        g.edge_count(),
        settings.seed
    );
    Ok(g)
}
