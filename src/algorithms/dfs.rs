use serde::{Deserialize, Serialize};

use crate::algorithms::algorithm::{
    check_endpoints, conclude, mismatched, names, stops_at, trace_step,
};
use crate::frontier::{CallFrame, CallStack, LifoStack};
use crate::{
    ActiveEdge, Algorithm, AlgorithmKind, Cost, Frontier, Graph, Result, RunState, StepTag,
    Termination, VertexId,
};

/// How depth-first search keeps its pending work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DfsVariant {
    /// One explicit stack; all unvisited children are pushed when a vertex is visited.
    #[default]
    Iterative,
    /// Simulated call stack; one child is tried per step and calls return explicitly.
    Recursive,
}

/// Depth-first search. `g` holds the depth in the search tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dfs {
    variant: DfsVariant,
    termination: Termination,
}

impl Default for Dfs {
    fn default() -> Self {
        Self {
            variant: DfsVariant::Iterative,
            termination: Termination::Exhaust,
        }
    }
}

impl Dfs {
    pub fn new(variant: DfsVariant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    pub fn iterative() -> Self {
        Self::new(DfsVariant::Iterative)
    }

    pub fn recursive() -> Self {
        Self::new(DfsVariant::Recursive)
    }

    pub fn with_termination(mut self, termination: Termination) -> Self {
        self.termination = termination;
        self
    }

    pub fn variant(&self) -> DfsVariant {
        self.variant
    }

    fn step_iterative(&self, g: &Graph, state: &RunState) -> RunState {
        let mut next = state.successor();
        let Frontier::Stack(stack) = &mut next.frontier else {
            return mismatched(state, AlgorithmKind::DfsIterative);
        };

        let Some(u) = stack.pop() else {
            next.current = None;
            conclude(g, &mut next, StepTag::Exhausted, "Stack is empty");
            return next;
        };
        next.current = Some(u);
        let parent = next.parent.get(&u).copied();
        if let (Some(p), Some(&weight)) = (parent, next.parent_weight.get(&u)) {
            next.active_edge = Some(ActiveEdge {
                from: p,
                to: u,
                weight,
            });
        }

        if next.visited.contains(&u) {
            next.tag = StepTag::SkipVisited;
            next.message = format!("Pop {}: already visited, skip", g.name(u));
            return next;
        }

        let depth = parent
            .and_then(|p| next.costs.get(&p))
            .map_or(0.0, |c| c.g + 1.0);
        next.costs.insert(u, Cost::new(depth));
        next.visited.insert(u);
        next.order.push(u);

        if stops_at(self.termination, next.goal, u) {
            let reason = format!("Pop goal {} at depth {depth}", g.name(u));
            conclude(g, &mut next, StepTag::GoalReached, &reason);
            return next;
        }

        let children: Vec<(VertexId, f64)> = g
            .neighbors(u)
            .into_iter()
            .filter(|(v, _)| !next.visited.contains(v))
            .collect();
        // reversed so the first neighbor ends up on top
        for &(v, w) in children.iter().rev() {
            stack.push(v);
            next.parent.insert(v, u);
            next.parent_weight.insert(v, w);
        }

        let pushed: Vec<VertexId> = children.iter().map(|(v, _)| *v).collect();
        next.tag = StepTag::Pop;
        next.message = format!(
            "Pop {}, mark visited, push {}",
            g.name(u),
            names(g, &pushed)
        );
        next
    }

    fn step_recursive(&self, g: &Graph, state: &RunState) -> RunState {
        let mut next = state.successor();
        let Frontier::Calls(calls) = &mut next.frontier else {
            return mismatched(state, AlgorithmKind::DfsRecursive);
        };

        if let Some(start) = calls.take_entry() {
            calls.call(CallFrame::new(start, g.neighbors(start)));
            next.current = Some(start);
            next.visited.insert(start);
            next.order.push(start);
            next.costs.insert(start, Cost::new(0.0));
            next.tag = StepTag::Call;
            next.message = format!("Call dfs({}), depth 1", g.name(start));
            if stops_at(self.termination, next.goal, start) {
                let reason = format!("Visit goal {} at depth 0", g.name(start));
                conclude(g, &mut next, StepTag::GoalReached, &reason);
            }
            return next;
        }

        let Some(top) = calls.top_mut() else {
            next.current = None;
            conclude(g, &mut next, StepTag::Exhausted, "No open calls");
            return next;
        };
        let caller = top.vertex;
        let Some((child, weight)) = top.next_child() else {
            calls.ret();
            let depth = calls.depth();
            next.current = Some(caller);
            next.tag = StepTag::Return;
            if calls.is_empty() {
                let reason = format!("dfs({}) returns, call stack empty", g.name(caller));
                conclude(g, &mut next, StepTag::Return, &reason);
            } else {
                next.message = format!(
                    "dfs({}) has no children left, return to depth {depth}",
                    g.name(caller)
                );
            }
            return next;
        };

        next.current = Some(child);
        next.active_edge = Some(ActiveEdge {
            from: caller,
            to: child,
            weight,
        });

        if next.visited.contains(&child) {
            next.tag = StepTag::SkipVisited;
            next.message = format!(
                "dfs({}): neighbor {} already visited, skip",
                g.name(caller),
                g.name(child)
            );
            return next;
        }

        calls.call(CallFrame::new(child, g.neighbors(child)));
        let depth = calls.depth();
        let g_child = next.costs.get(&caller).map_or(0.0, |c| c.g) + 1.0;
        next.costs.insert(child, Cost::new(g_child));
        next.parent.insert(child, caller);
        next.parent_weight.insert(child, weight);
        next.visited.insert(child);
        next.order.push(child);
        next.tag = StepTag::Call;
        next.message = format!(
            "dfs({}) calls dfs({}), depth {depth}",
            g.name(caller),
            g.name(child)
        );

        if stops_at(self.termination, next.goal, child) {
            let reason = format!("Visit goal {} at depth {g_child}", g.name(child));
            conclude(g, &mut next, StepTag::GoalReached, &reason);
        }
        next
    }
}

impl Algorithm for Dfs {
    fn kind(&self) -> AlgorithmKind {
        match self.variant {
            DfsVariant::Iterative => AlgorithmKind::DfsIterative,
            DfsVariant::Recursive => AlgorithmKind::DfsRecursive,
        }
    }

    fn termination(&self) -> Termination {
        self.termination
    }

    fn reset(&self, g: &Graph, start: VertexId, goal: Option<VertexId>) -> Result<RunState> {
        check_endpoints(g, start, goal)?;

        let (frontier, message) = match self.variant {
            DfsVariant::Iterative => {
                let mut stack = LifoStack::new();
                stack.push(start);
                (
                    Frontier::Stack(stack),
                    format!("Push start {} onto the stack", g.name(start)),
                )
            }
            DfsVariant::Recursive => (
                Frontier::Calls(CallStack::starting_at(start)),
                format!("Ready to call dfs({})", g.name(start)),
            ),
        };
        let mut state = RunState::initial(self.kind(), start, goal, frontier, message);
        state.costs.insert(start, Cost::new(0.0));
        Ok(state)
    }

    fn step(&self, g: &Graph, state: &RunState) -> RunState {
        if state.is_complete() {
            return state.clone();
        }
        let next = match self.variant {
            DfsVariant::Iterative => self.step_iterative(g, state),
            DfsVariant::Recursive => self.step_recursive(g, state),
        };
        trace_step(&next);
        next
    }
}
