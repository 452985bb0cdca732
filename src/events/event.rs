use serde::{Deserialize, Serialize};

use crate::{AlgorithmKind, Outcome, StepTag};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadReset {
    pub algorithm: AlgorithmKind,
    pub start: usize,
    pub goal: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadStep {
    /// Step counter of the snapshot now current.
    pub step: u64,
    pub tag: StepTag,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadCompleted {
    pub step: u64,
    pub outcome: Outcome,
}

/// Session transition, published after it happened.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    Reset(PayloadReset),
    Stepped(PayloadStep),
    SteppedBack(PayloadStep),
    Completed(PayloadCompleted),
}
