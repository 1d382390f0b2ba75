//! Cheapest-insertion machinery shared by the insert-anywhere heuristics.
//!
//! Inserting node `j` into edge `(t[i], t[i+1 mod m])` of a partial cycle
//! changes the objective by
//!
//! ```text
//! delta(i, j) = D[t[i], j] + D[j, t[i+1 mod m]] - D[t[i], t[i+1 mod m]] + cost[j]
//! ```
//!
//! and places `j` at index `i + 1`, so the closing edge appends at the end.

use crate::distance::DistanceMatrix;

/// A candidate insertion: `node` goes to index `position` for `delta`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Insertion {
    pub node: usize,
    pub position: usize,
    pub delta: i64,
}

/// Distance-only part of inserting `node` after `tour[i]`.
#[inline]
pub(crate) fn edge_delta(tour: &[usize], i: usize, node: usize, distances: &DistanceMatrix) -> i64 {
    let a = tour[i];
    let b = tour[(i + 1) % tour.len()];
    distances.get(a, node) + distances.get(node, b) - distances.get(a, b)
}

/// Scans unvisited nodes (ascending) against every edge (ascending) and
/// returns the first minimum-delta insertion, or `None` if every node is
/// visited.
pub(crate) fn cheapest_insertion(
    tour: &[usize],
    visited: &[bool],
    distances: &DistanceMatrix,
    costs: &[i64],
) -> Option<Insertion> {
    let mut best: Option<Insertion> = None;
    for node in (0..visited.len()).filter(|&v| !visited[v]) {
        for i in 0..tour.len() {
            let delta = edge_delta(tour, i, node, distances) + costs[node];
            if best.is_none_or(|b| delta < b.delta) {
                best = Some(Insertion {
                    node,
                    position: i + 1,
                    delta,
                });
            }
        }
    }
    best
}

/// Grows `tour` by cheapest insertion until it holds `k` nodes.
///
/// O(k²·n): each step scans all unvisited nodes against all current edges.
pub(crate) fn grow_by_cheapest_insertion(
    tour: &mut Vec<usize>,
    visited: &mut [bool],
    k: usize,
    distances: &DistanceMatrix,
    costs: &[i64],
) {
    while tour.len() < k {
        let Some(ins) = cheapest_insertion(tour, visited, distances, costs) else {
            break;
        };
        tour.insert(ins.position, ins.node);
        visited[ins.node] = true;
    }
}

/// Visited flags with only the given nodes set.
pub(crate) fn visited_mask(n: usize, nodes: &[usize]) -> Vec<bool> {
    let mut visited = vec![false; n];
    for &v in nodes {
        visited[v] = true;
    }
    visited
}
