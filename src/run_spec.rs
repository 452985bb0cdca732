//! JSON description of a run: graph, algorithm, endpoints and playback.
//!
//! ```json
//! {
//!   "graph": {
//!     "nodes": [0, 1, {"id": 2, "label": "C", "x": 1.0, "y": 0.0}],
//!     "edges": [[0, 1], [1, 2, 4.5]],
//!     "directed": false
//!   },
//!   "algorithm": {"type": "aStar", "heuristic": "euclidean"},
//!   "start": 0,
//!   "goal": 2,
//!   "playback": {"delayMs": 500}
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::playback::{Playback, PlaybackSettings};
use crate::{
    AlgorithmChoice, AnyAlgorithm, Graph, Result, Session, StepperError, Termination, VertexId,
};

pub const SPEC_VERSION: u32 = 1;

/// Edge weight used when an edge is given as a bare pair.
pub const DEFAULT_WEIGHT: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeSpec {
    Id(i64),
    Full {
        id: i64,
        #[serde(default)]
        label: Option<String>,
        #[serde(default)]
        x: Option<f64>,
        #[serde(default)]
        y: Option<f64>,
    },
}

impl NodeSpec {
    pub fn id(&self) -> i64 {
        match self {
            NodeSpec::Id(id) | NodeSpec::Full { id, .. } => *id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EdgeSpec {
    Weighted(i64, i64, f64),
    Plain(i64, i64),
}

impl EdgeSpec {
    pub fn parts(&self) -> (i64, i64, f64) {
        match *self {
            EdgeSpec::Weighted(a, b, w) => (a, b, w),
            EdgeSpec::Plain(a, b) => (a, b, DEFAULT_WEIGHT),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSpec {
    /// When empty, vertices are taken from the edges in order of appearance.
    #[serde(default)]
    pub nodes: Vec<NodeSpec>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
    /// Defaults to directed.
    #[serde(default)]
    pub directed: Option<bool>,
}

/// External ids mapped to vertex handles of the built graph.
pub type IdMap = BTreeMap<i64, VertexId>;

impl GraphSpec {
    pub fn build(&self) -> Result<(Graph, IdMap)> {
        let mut g = Graph::new(self.directed.unwrap_or(true));
        let mut ids = IdMap::new();

        if self.nodes.is_empty() {
            for e in &self.edges {
                let (a, b, _) = e.parts();
                for id in [a, b] {
                    ids.entry(id).or_insert_with(|| g.add_vertex(id.to_string()));
                }
            }
        }

        for node in &self.nodes {
            let id = node.id();
            if ids.contains_key(&id) {
                return Err(StepperError::InvalidSpec(format!("duplicate node id {id}")));
            }
            let idx = match node {
                NodeSpec::Id(_) => g.add_vertex(id.to_string()),
                NodeSpec::Full { label, x, y, .. } => {
                    let label = label.clone().unwrap_or_else(|| id.to_string());
                    match (x, y) {
                        (Some(x), Some(y)) => g.add_vertex_at(label, [*x, *y]),
                        _ => g.add_vertex(label),
                    }
                }
            };
            ids.insert(id, idx);
        }

        for e in &self.edges {
            let (a, b, w) = e.parts();
            let (Some(&ai), Some(&bi)) = (ids.get(&a), ids.get(&b)) else {
                return Err(StepperError::InvalidSpec(format!(
                    "edge [{a}, {b}] references an unknown node"
                )));
            };
            g.add_edge(ai, bi, w);
        }

        Ok((g, ids))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSpec {
    #[serde(default)]
    pub version: Option<u32>,
    pub graph: GraphSpec,
    pub algorithm: AlgorithmChoice,
    pub start: i64,
    #[serde(default)]
    pub goal: Option<i64>,
    /// Falls back to the algorithm's default.
    #[serde(default)]
    pub termination: Option<Termination>,
    #[serde(default)]
    pub playback: Option<PlaybackSettings>,
}

impl RunSpec {
    pub fn try_parse(text: &str) -> Result<Self> {
        let spec: RunSpec = serde_json::from_str(text)?;
        if let Some(v) = spec.version {
            if v > SPEC_VERSION {
                return Err(StepperError::InvalidSpec(format!(
                    "unsupported version {v}, expected at most {SPEC_VERSION}"
                )));
            }
        }
        Ok(spec)
    }

    pub fn algorithm(&self) -> AnyAlgorithm {
        self.algorithm.build(self.termination)
    }

    pub fn playback(&self) -> Playback {
        self.playback.unwrap_or_default().into()
    }

    /// Builds the graph and resets the chosen algorithm on it.
    pub fn into_session(self) -> Result<Session> {
        let (graph, ids) = self.graph.build()?;
        let lookup = |id: i64, what: &str| {
            ids.get(&id).copied().ok_or_else(|| {
                StepperError::InvalidSpec(format!("{what} {id} is not a node of the graph"))
            })
        };
        let start = lookup(self.start, "start")?;
        let goal = self.goal.map(|id| lookup(id, "goal")).transpose()?;

        Session::new(graph, self.algorithm(), start, goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Algorithm, AlgorithmKind, Outcome};

    const CYCLE: &str = r#"{
        "version": 1,
        "graph": {
            "nodes": [0, 1, 2, 3, {"id": 4, "label": "E", "x": 2.0, "y": 1.0}],
            "edges": [[0, 1], [1, 2], [2, 3], [3, 4], [4, 0, 5]],
            "directed": false
        },
        "algorithm": {"type": "dijkstra"},
        "start": 0,
        "goal": 3,
        "playback": {"delayMs": 120}
    }"#;

    #[test]
    fn parses_and_runs() {
        let spec = RunSpec::try_parse(CYCLE).unwrap();
        assert_eq!(spec.graph.edges[4], EdgeSpec::Weighted(4, 0, 5.0));
        assert_eq!(spec.graph.edges[0], EdgeSpec::Plain(0, 1));
        assert_eq!(spec.playback().delay().as_millis(), 120);

        let mut session = spec.into_session().unwrap();
        assert_eq!(session.algorithm().kind(), AlgorithmKind::Dijkstra);
        assert_eq!(
            session.graph().vertex(VertexId::new(4)).unwrap().label(),
            "E"
        );
        let done = session.run_to_end();
        assert_eq!(
            done.result(),
            Some(&Outcome::Found {
                path: (0..4).map(VertexId::new).collect(),
                cost: 3.0
            })
        );
    }

    #[test]
    fn edges_only_graph_infers_nodes() {
        let spec = GraphSpec {
            nodes: Vec::new(),
            edges: vec![EdgeSpec::Plain(10, 20), EdgeSpec::Plain(20, 30)],
            directed: None,
        };
        let (g, ids) = spec.build().unwrap();
        assert!(g.is_directed());
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.vertex(ids[&20]).unwrap().label(), "20");
    }

    #[test]
    fn termination_overrides_default() {
        let text = r#"{
            "graph": {"edges": [[0, 1], [1, 2]]},
            "algorithm": {"type": "bfs"},
            "start": 0,
            "goal": 1,
            "termination": "atGoal"
        }"#;
        let mut session = RunSpec::try_parse(text).unwrap().into_session().unwrap();
        assert_eq!(session.algorithm().termination(), Termination::AtGoal);
        assert_eq!(session.run_to_end().order.len(), 2);
    }

    #[test]
    fn unknown_ids_are_rejected() {
        let text = r#"{
            "graph": {"nodes": [0, 1], "edges": [[0, 5]]},
            "algorithm": {"type": "bfs"},
            "start": 0
        }"#;
        let err = RunSpec::try_parse(text).unwrap().into_session().unwrap_err();
        assert!(matches!(err, StepperError::InvalidSpec(m) if m.contains("[0, 5]")));

        let text = r#"{
            "graph": {"nodes": [0, 1]},
            "algorithm": {"type": "dfs"},
            "start": 0,
            "goal": 9
        }"#;
        let err = RunSpec::try_parse(text).unwrap().into_session().unwrap_err();
        assert!(matches!(err, StepperError::InvalidSpec(m) if m.contains("goal 9")));
    }

    #[test]
    fn duplicate_nodes_and_bad_json() {
        let spec = GraphSpec {
            nodes: vec![NodeSpec::Id(1), NodeSpec::Id(1)],
            ..GraphSpec::default()
        };
        assert!(matches!(spec.build(), Err(StepperError::InvalidSpec(_))));

        assert!(matches!(
            RunSpec::try_parse("{\"graph\": 3}"),
            Err(StepperError::Json(_))
        ));
    }

    #[test]
    fn astar_spec_requires_goal() {
        let text = r#"{
            "graph": {"edges": [[0, 1]]},
            "algorithm": {"type": "aStar", "heuristic": "manhattan"},
            "start": 0
        }"#;
        let err = RunSpec::try_parse(text).unwrap().into_session().unwrap_err();
        assert!(matches!(err, StepperError::MissingGoal { .. }));
    }
}
