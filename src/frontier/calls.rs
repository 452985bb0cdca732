use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::VertexId;

/// One logical call of a simulated recursive DFS.
///
/// `pending` holds the children not yet tried, in neighbor order, each with
/// the weight of the edge leading to it. The engine takes exactly one of them
/// per step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallFrame {
    pub vertex: VertexId,
    pub pending: VecDeque<(VertexId, f64)>,
}

impl CallFrame {
    pub fn new(vertex: VertexId, children: impl IntoIterator<Item = (VertexId, f64)>) -> Self {
        Self {
            vertex,
            pending: children.into_iter().collect(),
        }
    }

    pub fn next_child(&mut self) -> Option<(VertexId, f64)> {
        self.pending.pop_front()
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

/// Arena of open call frames, outermost at index 0.
///
/// Before the first call the stack holds only its entry vertex, the one the
/// outermost call will be made on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    #[serde(default)]
    entry: Option<VertexId>,
}

impl CallStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stack whose first call will be made on `start`.
    pub fn starting_at(start: VertexId) -> Self {
        Self {
            frames: Vec::new(),
            entry: Some(start),
        }
    }

    pub fn entry(&self) -> Option<VertexId> {
        self.entry
    }

    /// Removes the entry vertex so the outermost call can be made on it.
    pub fn take_entry(&mut self) -> Option<VertexId> {
        self.entry.take()
    }

    pub fn call(&mut self, frame: CallFrame) {
        self.frames.push(frame);
    }

    pub fn ret(&mut self) -> Option<CallFrame> {
        self.frames.pop()
    }

    pub fn top(&self) -> Option<&CallFrame> {
        self.frames.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut CallFrame> {
        self.frames.last_mut()
    }

    /// Number of open calls.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Open calls plus the entry vertex, if it is still waiting.
    pub fn len(&self) -> usize {
        self.frames.len() + usize::from(self.entry.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty() && self.entry.is_none()
    }

    /// Outermost call first.
    pub fn frames(&self) -> &[CallFrame] {
        &self.frames
    }

    /// Entry vertex if waiting, then the vertices of the open calls,
    /// outermost first.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.entry
            .into_iter()
            .chain(self.frames.iter().map(|f| f.vertex))
    }
}
