//! Shared stepping for Dijkstra and A*.
//!
//! Both settle vertices in order of a priority key and relax outgoing edges of
//! each settled vertex one at a time. They differ only in the key: `g` for
//! Dijkstra, `g + h` for A*.

use crate::algorithms::algorithm::{check_endpoints, conclude, fmt_cost, names, stops_at};
use crate::frontier::MinPriorityQueue;
use crate::{
    ActiveEdge, AlgorithmKind, Cost, Frontier, Graph, Result, RunState, StepTag, Termination,
    VertexId,
};

pub(crate) fn reset(
    kind: AlgorithmKind,
    g: &Graph,
    start: VertexId,
    goal: Option<VertexId>,
    h: impl Fn(VertexId) -> f64,
) -> Result<RunState> {
    check_endpoints(g, start, goal)?;
    g.validate_weights()?;

    let h0 = h(start);
    let mut pq = MinPriorityQueue::new();
    pq.push(start, h0);
    let mut state = RunState::initial(
        kind,
        start,
        goal,
        Frontier::Priority(pq),
        format!("Set distance of {} to 0 and queue it", g.name(start)),
    );
    state.costs.insert(start, Cost::with_heuristic(0.0, h0));
    Ok(state)
}

/// One micro-step. `next` is a fresh successor whose frontier is known to be
/// a priority queue.
pub(crate) fn step(
    termination: Termination,
    g: &Graph,
    mut next: RunState,
    h: impl Fn(VertexId) -> f64,
) -> RunState {
    if let Some((v, w)) = next.relax_pending.pop_front() {
        relax(g, &mut next, v, w, h);
        return next;
    }

    let Frontier::Priority(pq) = &mut next.frontier else {
        return next;
    };
    let Some((u, key)) = pq.pop_min() else {
        next.current = None;
        conclude(g, &mut next, StepTag::Exhausted, "Priority queue is empty");
        return next;
    };
    next.current = Some(u);

    if next.visited.contains(&u) {
        next.tag = StepTag::SkipFinalized;
        next.message = format!(
            "Extract {} with key {}: already finalized, skip stale entry",
            g.name(u),
            fmt_cost(key)
        );
        return next;
    }

    next.visited.insert(u);
    next.order.push(u);
    if let (Some(&p), Some(&weight)) = (next.parent.get(&u), next.parent_weight.get(&u)) {
        next.active_edge = Some(ActiveEdge {
            from: p,
            to: u,
            weight,
        });
    }
    let du = next.distance(u);

    if stops_at(termination, next.goal, u) {
        let reason = format!("Extract goal {} with distance {}", g.name(u), fmt_cost(du));
        conclude(g, &mut next, StepTag::GoalReached, &reason);
        return next;
    }

    next.relax_pending = g
        .neighbors(u)
        .into_iter()
        .filter(|(v, _)| !next.visited.contains(v))
        .collect();
    let pending: Vec<VertexId> = next.relax_pending.iter().map(|(v, _)| *v).collect();

    next.tag = StepTag::ExtractMin;
    next.message = format!(
        "Extract {} with distance {}, finalize; edges to relax: {}",
        g.name(u),
        fmt_cost(du),
        names(g, &pending)
    );
    next
}

fn relax(g: &Graph, next: &mut RunState, v: VertexId, w: f64, h: impl Fn(VertexId) -> f64) {
    let Some(u) = next.current else {
        return;
    };
    next.active_edge = Some(ActiveEdge {
        from: u,
        to: v,
        weight: w,
    });

    let du = next.distance(u);
    let old = next.distance(v);
    let alt = du + w;

    if alt < old {
        let hv = h(v);
        next.costs.insert(v, Cost::with_heuristic(alt, hv));
        next.parent.insert(v, u);
        next.parent_weight.insert(v, w);
        if let Frontier::Priority(pq) = &mut next.frontier {
            pq.push(v, alt + hv);
        }
        next.tag = StepTag::Relax;
        next.message = format!(
            "Relax {} -> {}: {} + {} = {} < {}, update distance of {}",
            g.name(u),
            g.name(v),
            fmt_cost(du),
            fmt_cost(w),
            fmt_cost(alt),
            fmt_cost(old),
            g.name(v)
        );
    } else {
        next.tag = StepTag::NoImprovement;
        next.message = format!(
            "Edge {} -> {}: {} + {} = {} is not better than {}",
            g.name(u),
            g.name(v),
            fmt_cost(du),
            fmt_cost(w),
            fmt_cost(alt),
            fmt_cost(old)
        );
    }
}
