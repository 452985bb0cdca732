//! Pseudocode listings and the lines each step tag corresponds to.

use crate::{AlgorithmKind, StepTag};

const BFS: &[&str] = &[
    "BFS(G, s):",
    "  dist[s] = 0; Q = [s]",
    "  while Q not empty:",
    "    u = Q.dequeue()",
    "    if u visited: continue",
    "    mark u visited",
    "    if u == goal: return path(u)",
    "    for v in neighbors(u):",
    "      if v not visited and v not in Q:",
    "        dist[v] = dist[u] + 1; parent[v] = u; Q.enqueue(v)",
    "  return not found",
];

const DFS_ITERATIVE: &[&str] = &[
    "DFS(G, s):",
    "  S = [s]",
    "  while S not empty:",
    "    u = S.pop()",
    "    if u visited: continue",
    "    mark u visited",
    "    if u == goal: return path(u)",
    "    for v in reversed(neighbors(u)):",
    "      if v not visited: parent[v] = u; S.push(v)",
    "  return not found",
];

const DFS_RECURSIVE: &[&str] = &[
    "DFS(G, u):",
    "  mark u visited",
    "  if u == goal: stop",
    "  for v in neighbors(u):",
    "    if v visited: continue",
    "    parent[v] = u",
    "    DFS(G, v)",
    "  return",
];

const DIJKSTRA: &[&str] = &[
    "Dijkstra(G, s):",
    "  dist[s] = 0; PQ = [(0, s)]",
    "  while PQ not empty:",
    "    (d, u) = PQ.extract_min()",
    "    if u finalized: continue",
    "    finalize u",
    "    if u == goal: return path(u)",
    "    for (v, w) in neighbors(u):",
    "      if dist[u] + w < dist[v]:",
    "        dist[v] = dist[u] + w; parent[v] = u",
    "        PQ.insert(dist[v], v)",
    "  return not found",
];

const ASTAR: &[&str] = &[
    "AStar(G, s, t):",
    "  g[s] = 0; open = [(h(s), s)]",
    "  while open not empty:",
    "    (f, u) = open.extract_min()",
    "    if u closed: continue",
    "    close u",
    "    if u == t: return path(u)",
    "    for (v, w) in neighbors(u):",
    "      if g[u] + w < g[v]:",
    "        g[v] = g[u] + w; parent[v] = u",
    "        open.insert(g[v] + h(v), v)",
    "  return not found",
];

pub fn listing(kind: AlgorithmKind) -> &'static [&'static str] {
    match kind {
        AlgorithmKind::Bfs => BFS,
        AlgorithmKind::DfsIterative => DFS_ITERATIVE,
        AlgorithmKind::DfsRecursive => DFS_RECURSIVE,
        AlgorithmKind::Dijkstra => DIJKSTRA,
        AlgorithmKind::AStar => ASTAR,
    }
}

/// 0-based lines of [`listing`] to highlight for a step tag. Empty when the
/// tag does not occur for that algorithm.
pub fn highlight(kind: AlgorithmKind, tag: StepTag) -> &'static [usize] {
    use AlgorithmKind as K;
    use StepTag as T;

    match (kind, tag) {
        (_, T::Init) => &[1],

        (K::Bfs, T::Dequeue) => &[3, 5, 7, 8, 9],
        (K::Bfs, T::SkipVisited) => &[3, 4],
        (K::Bfs, T::GoalReached) => &[3, 5, 6],
        (K::Bfs, T::Exhausted) => &[2, 10],

        (K::DfsIterative, T::Pop) => &[3, 5, 7, 8],
        (K::DfsIterative, T::SkipVisited) => &[3, 4],
        (K::DfsIterative, T::GoalReached) => &[3, 5, 6],
        (K::DfsIterative, T::Exhausted) => &[2, 9],

        (K::DfsRecursive, T::Call) => &[1, 5, 6],
        (K::DfsRecursive, T::SkipVisited) => &[3, 4],
        (K::DfsRecursive, T::Return | T::Exhausted) => &[7],
        (K::DfsRecursive, T::GoalReached) => &[1, 2],

        (K::Dijkstra | K::AStar, T::ExtractMin) => &[3, 5],
        (K::Dijkstra | K::AStar, T::SkipFinalized) => &[3, 4],
        (K::Dijkstra | K::AStar, T::Relax) => &[7, 8, 9, 10],
        (K::Dijkstra | K::AStar, T::NoImprovement) => &[7, 8],
        (K::Dijkstra | K::AStar, T::GoalReached) => &[3, 5, 6],
        (K::Dijkstra | K::AStar, T::Exhausted) => &[2, 11],

        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KINDS: [AlgorithmKind; 5] = [
        AlgorithmKind::Bfs,
        AlgorithmKind::DfsIterative,
        AlgorithmKind::DfsRecursive,
        AlgorithmKind::Dijkstra,
        AlgorithmKind::AStar,
    ];

    const TAGS: [StepTag; 12] = [
        StepTag::Init,
        StepTag::Dequeue,
        StepTag::Pop,
        StepTag::SkipVisited,
        StepTag::Call,
        StepTag::Return,
        StepTag::ExtractMin,
        StepTag::SkipFinalized,
        StepTag::Relax,
        StepTag::NoImprovement,
        StepTag::GoalReached,
        StepTag::Exhausted,
    ];

    #[test]
    fn highlights_stay_inside_listing() {
        for kind in KINDS {
            let len = listing(kind).len();
            for tag in TAGS {
                for line in highlight(kind, tag) {
                    assert!(*line < len, "{kind:?} {tag:?} line {line}");
                }
            }
        }
    }

    #[test]
    fn relax_points_at_update() {
        let lines = highlight(AlgorithmKind::Dijkstra, StepTag::Relax);
        assert!(lines
            .iter()
            .any(|l| listing(AlgorithmKind::Dijkstra)[*l].contains("dist[v] = dist[u] + w")));
        assert!(highlight(AlgorithmKind::Bfs, StepTag::Relax).is_empty());
    }
}
