use std::collections::{BTreeMap, BTreeSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::frontier::{CallStack, FifoQueue, LifoStack, MinPriorityQueue};
use crate::{AlgorithmKind, VertexId};

/// Symbolic pseudocode step a snapshot corresponds to.
///
/// [`crate::pseudocode::highlight`] maps it to listing lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepTag {
    /// Fresh run, nothing processed yet.
    Init,
    /// BFS: front of the queue taken, marked visited, unvisited neighbors enqueued.
    Dequeue,
    /// Iterative DFS: top of the stack taken, marked visited, children pushed.
    Pop,
    /// Taken vertex was already visited; dropped without other changes.
    SkipVisited,
    /// Recursive DFS: descended into an unvisited child.
    Call,
    /// Recursive DFS: a call ran out of children and returned.
    Return,
    /// Best-first: minimum extracted and finalized.
    ExtractMin,
    /// Best-first: stale queue entry of a finalized vertex dropped.
    SkipFinalized,
    /// Best-first: neighbor reached more cheaply, cost and parent updated.
    Relax,
    /// Best-first: neighbor examined, known cost already as good.
    NoImprovement,
    /// Goal finalized, run stopped.
    GoalReached,
    /// Frontier empty, run stopped.
    Exhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Produced by reset, no step taken.
    Ready,
    Running,
    Done,
}

/// Terminal result of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    /// Goal reached. `path` runs start to goal.
    Found { path: Vec<VertexId>, cost: f64 },
    /// Goal given but never reached.
    NotFound,
    /// No goal given; the traversal finished after visiting `visited` vertices.
    Traversed { visited: usize },
}

/// Best known cost of a vertex.
///
/// `g` is the cost from start (hop count for BFS, tree depth for DFS), `h` the
/// heuristic estimate to the goal (zero outside A*).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cost {
    pub g: f64,
    pub h: f64,
}

impl Cost {
    pub fn new(g: f64) -> Self {
        Self { g, h: 0.0 }
    }

    pub fn with_heuristic(g: f64, h: f64) -> Self {
        Self { g, h }
    }

    pub fn f(&self) -> f64 {
        self.g + self.h
    }
}

/// Edge last traversed or relaxed, for highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActiveEdge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: f64,
}

/// Frontier contents, in the discipline of the running algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Frontier {
    Queue(FifoQueue<VertexId>),
    Stack(LifoStack<VertexId>),
    Calls(CallStack),
    Priority(MinPriorityQueue<VertexId>),
}

impl Frontier {
    /// Contents in the order they will be served: queue front, stack top,
    /// minimum key first. For a call stack, the open calls outermost first.
    pub fn vertices(&self) -> Vec<VertexId> {
        match self {
            Frontier::Queue(q) => q.iter().copied().collect(),
            Frontier::Stack(s) => s.iter().copied().collect(),
            Frontier::Calls(c) => c.vertices().collect(),
            Frontier::Priority(pq) => pq.iter().map(|e| e.item).collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Frontier::Queue(q) => q.len(),
            Frontier::Stack(s) => s.len(),
            Frontier::Calls(c) => c.len(),
            Frontier::Priority(pq) => pq.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Immutable snapshot of a run after one micro-step.
///
/// Engines never modify a snapshot they were given; each step clones and
/// returns a new one, which is what lets history undo by popping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunState {
    pub algorithm: AlgorithmKind,
    pub start: VertexId,
    pub goal: Option<VertexId>,
    pub status: Status,
    /// Micro-steps taken since reset.
    pub step: u64,
    pub current: Option<VertexId>,
    pub frontier: Frontier,
    /// Visited (BFS/DFS) or finalized (Dijkstra/A*) vertices.
    pub visited: BTreeSet<VertexId>,
    /// `visited` in the order vertices joined it.
    pub order: Vec<VertexId>,
    pub costs: BTreeMap<VertexId, Cost>,
    pub parent: BTreeMap<VertexId, VertexId>,
    /// Weight of the edge that set `parent`.
    pub parent_weight: BTreeMap<VertexId, f64>,
    pub active_edge: Option<ActiveEdge>,
    /// Best-first only: neighbors of `current` still to be relaxed.
    pub relax_pending: VecDeque<(VertexId, f64)>,
    pub message: String,
    pub tag: StepTag,
    pub outcome: Option<Outcome>,
}

impl RunState {
    pub(crate) fn initial(
        algorithm: AlgorithmKind,
        start: VertexId,
        goal: Option<VertexId>,
        frontier: Frontier,
        message: String,
    ) -> Self {
        Self {
            algorithm,
            start,
            goal,
            status: Status::Ready,
            step: 0,
            current: None,
            frontier,
            visited: BTreeSet::new(),
            order: Vec::new(),
            costs: BTreeMap::new(),
            parent: BTreeMap::new(),
            parent_weight: BTreeMap::new(),
            active_edge: None,
            relax_pending: VecDeque::new(),
            message,
            tag: StepTag::Init,
            outcome: None,
        }
    }

    /// Copy of `self` prepared to receive the next micro-step.
    pub(crate) fn successor(&self) -> Self {
        let mut next = self.clone();
        next.step += 1;
        next.status = Status::Running;
        next.active_edge = None;
        next
    }

    pub fn is_complete(&self) -> bool {
        self.status == Status::Done
    }

    pub fn result(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn is_visited(&self, v: VertexId) -> bool {
        self.visited.contains(&v)
    }

    pub fn cost(&self, v: VertexId) -> Option<Cost> {
        self.costs.get(&v).copied()
    }

    /// Known cost from start, `+inf` when `v` has not been reached.
    pub fn distance(&self, v: VertexId) -> f64 {
        self.costs.get(&v).map_or(f64::INFINITY, |c| c.g)
    }

    /// Recursive DFS call depth; zero for other algorithms.
    pub fn recursion_depth(&self) -> usize {
        match &self.frontier {
            Frontier::Calls(c) => c.depth(),
            _ => 0,
        }
    }

    /// Parent-pointer walk from `to` back to the start.
    pub fn path_to(&self, to: VertexId) -> Option<Vec<VertexId>> {
        let mut path = vec![to];
        let mut at = to;
        while at != self.start {
            at = *self.parent.get(&at)?;
            if path.len() > self.parent.len() {
                return None;
            }
            path.push(at);
        }
        path.reverse();
        Some(path)
    }

    /// Marks the run done, deriving the outcome from the goal and visited set.
    pub(crate) fn finish(&mut self, tag: StepTag, message: String) {
        self.status = Status::Done;
        self.tag = tag;
        self.message = message;
        self.relax_pending.clear();
        self.outcome = Some(match self.goal {
            None => Outcome::Traversed {
                visited: self.visited.len(),
            },
            Some(goal) if self.visited.contains(&goal) => match self.path_to(goal) {
                Some(path) => Outcome::Found {
                    path,
                    cost: self.distance(goal),
                },
                None => Outcome::NotFound,
            },
            Some(_) => Outcome::NotFound,
        });
    }
}
