use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences, IntoNodeReferences};
use petgraph::Direction;
use serde::{Deserialize, Serialize};

use crate::{Result, StepperError};

/// Stable vertex handle. Removing a vertex never renumbers the others.
pub type VertexId = NodeIndex;

/// Vertex payload. Algorithmic state never lives here, so the same graph can
/// back any number of independent runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    label: String,
    position: Option<[f64; 2]>,
}

impl Vertex {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            position: None,
        }
    }

    pub fn with_position(label: impl Into<String>, position: [f64; 2]) -> Self {
        Self {
            label: label.into(),
            position: Some(position),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Coordinates supplied by whoever laid the graph out. Only geometric
    /// heuristics read them.
    pub fn position(&self) -> Option<[f64; 2]> {
        self.position
    }
}

/// Edge payload: the weight plus the position of the edge in insertion order.
///
/// `StableGraph` reuses the slots of removed edges, so the edge index alone
/// does not tell which edge came first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub weight: f64,
    pub seq: u64,
}

/// Wrapper around [`petgraph::stable_graph::StableGraph`] that the engines run over.
///
/// Edges carry an `f64` weight. Undirected graphs expose every edge in both
/// directions from [`Graph::neighbors`] no matter which way it was stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    g: StableGraph<Vertex, Edge>,
    directed: bool,
    next_seq: u64,
}

impl Default for Graph {
    fn default() -> Self {
        Self::directed()
    }
}

impl Graph {
    pub fn new(directed: bool) -> Self {
        Self {
            g: StableGraph::default(),
            directed,
            next_seq: 0,
        }
    }

    pub fn directed() -> Self {
        Self::new(true)
    }

    pub fn undirected() -> Self {
        Self::new(false)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn g(&self) -> &StableGraph<Vertex, Edge> {
        &self.g
    }

    /// Adds vertex with the given label and no position.
    pub fn add_vertex(&mut self, label: impl Into<String>) -> VertexId {
        self.g.add_node(Vertex::new(label))
    }

    /// Adds vertex with the given label at a caller-provided position.
    pub fn add_vertex_at(&mut self, label: impl Into<String>, position: [f64; 2]) -> VertexId {
        self.g.add_node(Vertex::with_position(label, position))
    }

    /// Adds edge between existing vertices. Returns `None` if either endpoint is missing.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: f64) -> Option<EdgeIndex> {
        if !self.contains(from) || !self.contains(to) {
            return None;
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        Some(self.g.add_edge(from, to, Edge { weight, seq }))
    }

    /// Removes vertex together with its incident edges.
    pub fn remove_vertex(&mut self, v: VertexId) -> Option<Vertex> {
        self.g.remove_node(v)
    }

    /// Removes all edges between start and end vertex. Returns removed edges count.
    ///
    /// For undirected graphs edges stored as `end -> start` are removed as well.
    pub fn remove_edges_between(&mut self, start: VertexId, end: VertexId) -> usize {
        let mut idxs: Vec<EdgeIndex> = self
            .g
            .edges_connecting(start, end)
            .map(|e| e.id())
            .collect();
        if !self.directed && start != end {
            idxs.extend(self.g.edges_connecting(end, start).map(|e| e.id()));
        }

        idxs.into_iter()
            .filter_map(|e| self.g.remove_edge(e))
            .count()
    }

    pub fn contains(&self, v: VertexId) -> bool {
        self.g.contains_node(v)
    }

    pub fn vertex(&self, v: VertexId) -> Option<&Vertex> {
        self.g.node_weight(v)
    }

    /// First vertex carrying the given label.
    pub fn vertex_by_label(&self, label: &str) -> Option<VertexId> {
        self.g
            .node_references()
            .find(|(_, v)| v.label == label)
            .map(|(idx, _)| idx)
    }

    /// Provides iterator over all vertices and their ids.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> {
        self.g.node_references()
    }

    /// Provides iterator over all edges as stored: `(id, from, to, weight)`.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeIndex, VertexId, VertexId, f64)> + '_ {
        self.g
            .edge_references()
            .map(|e| (e.id(), e.source(), e.target(), e.weight().weight))
    }

    pub fn vertex_count(&self) -> usize {
        self.g.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.g.edge_count()
    }

    /// Vertices reachable from `v` over one edge, with the edge weight.
    ///
    /// Order follows edge insertion so traces are reproducible. An undirected
    /// self-loop is reported once. Unknown or isolated vertices yield nothing.
    pub fn neighbors(&self, v: VertexId) -> Vec<(VertexId, f64)> {
        if !self.contains(v) {
            return Vec::new();
        }

        let mut found: Vec<(u64, VertexId, f64)> = self
            .g
            .edges_directed(v, Direction::Outgoing)
            .map(|e| (e.weight().seq, e.target(), e.weight().weight))
            .collect();

        if !self.directed {
            found.extend(
                self.g
                    .edges_directed(v, Direction::Incoming)
                    .filter(|e| e.source() != v)
                    .map(|e| (e.weight().seq, e.source(), e.weight().weight)),
            );
        }

        found.sort_by_key(|(seq, _, _)| *seq);
        found.into_iter().map(|(_, u, w)| (u, w)).collect()
    }

    /// Weight of the first edge leading from `from` to `to`, if any.
    pub fn weight(&self, from: VertexId, to: VertexId) -> Option<f64> {
        self.neighbors(from)
            .into_iter()
            .find(|(v, _)| *v == to)
            .map(|(_, w)| w)
    }

    /// Vertex label, or its index when the vertex is unknown.
    pub fn name(&self, v: VertexId) -> String {
        self.vertex(v)
            .map_or_else(|| v.index().to_string(), |x| x.label.clone())
    }

    /// Fails on the first negative or non-finite weight.
    pub fn validate_weights(&self) -> Result<()> {
        for (_, from, to, weight) in self.edges() {
            if !weight.is_finite() {
                return Err(StepperError::NonFiniteWeight {
                    from: from.index(),
                    to: to.index(),
                    weight,
                });
            }
            if weight < 0.0 {
                return Err(StepperError::NegativeWeight {
                    from: from.index(),
                    to: to.index(),
                    weight,
                });
            }
        }
        Ok(())
    }
}
