use crate::{Result, RunState, StepperError};

/// Stack of snapshots preceding the current one.
///
/// Stepping back pops; nothing is recomputed.
#[derive(Debug, Clone, Default)]
pub struct StepHistory {
    states: Vec<RunState>,
}

impl StepHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, state: RunState) {
        self.states.push(state);
    }

    /// Returns the snapshot taken before the latest step.
    pub fn step_back(&mut self) -> Result<RunState> {
        self.states.pop().ok_or(StepperError::EmptyHistory)
    }

    pub fn peek(&self) -> Option<&RunState> {
        self.states.last()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn clear(&mut self) {
        self.states.clear();
    }
}
