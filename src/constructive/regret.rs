//! Regret-based insertion heuristics.
//!
//! # Algorithm
//!
//! For each unvisited node `v` let `best(v)` be its cheapest edge delta in
//! the current cycle and `second(v)` the cheapest delta at any other
//! position. The regret `second(v) - best(v)` measures what is lost by not
//! inserting `v` now.
//!
//! - [`regret_insertion`] inserts the node with the largest regret at its
//!   best position (ties: smaller `best(v) + cost[v]`, then lower index).
//! - [`weighted_regret_insertion`] maximizes
//!   `alpha · regret − beta · (best(v) + cost[v])` instead, trading regret
//!   against the immediate objective increase.
//!
//! Both are seeded like the nearest-neighbor variants: `[start, j]` where
//! `j` minimizes `D[start,j] + cost[j]`.
//!
//! # Complexity
//!
//! O(k²·n) per run.
//!
//! # Reference
//!
//! Potvin, J.-Y. & Rousseau, J.-M. (1993). "A parallel route building
//! algorithm for the vehicle routing and scheduling problem with time
//! windows", *European Journal of Operational Research* 66(3), 331-340.

use crate::distance::DistanceMatrix;
use crate::models::Tour;

use super::insertion::{edge_delta, visited_mask};

/// Best and second-best insertion of one candidate node.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    node: usize,
    position: usize,
    /// `best(v) + cost[v]`.
    best_total: i64,
    regret: i64,
}

/// Prices `node` against every edge of `tour`.
///
/// The second-best delta excludes only the best position; a two-node
/// cycle therefore has a regret of zero.
fn price(tour: &[usize], node: usize, distances: &DistanceMatrix, costs: &[i64]) -> Candidate {
    let mut best = i64::MAX;
    let mut best_edge = 0;
    for i in 0..tour.len() {
        let d = edge_delta(tour, i, node, distances);
        if d < best {
            best = d;
            best_edge = i;
        }
    }
    let second = (0..tour.len())
        .filter(|&i| i != best_edge)
        .map(|i| edge_delta(tour, i, node, distances))
        .min()
        .unwrap_or(best);

    Candidate {
        node,
        position: best_edge + 1,
        best_total: best + costs[node],
        regret: second - best,
    }
}

/// Shared seeding and growth loop; `better(a, b)` says whether candidate
/// `a` beats the current choice `b`.
fn build<F>(distances: &DistanceMatrix, costs: &[i64], start: usize, k: usize, better: F) -> Tour
where
    F: Fn(&Candidate, &Candidate) -> bool,
{
    let n = distances.size();
    assert!(start < n, "start node {start} out of range for {n} nodes");
    assert!(k >= 1 && k <= n, "selection size {k} invalid for {n} nodes");

    let mut tour = Vec::with_capacity(k);
    tour.push(start);
    let mut visited = visited_mask(n, &tour);

    if k >= 2 {
        let second = (0..n)
            .filter(|&j| !visited[j])
            .min_by_key(|&j| distances.get(start, j) + costs[j]);
        if let Some(j) = second {
            visited[j] = true;
            tour.push(j);
        }
    }

    while tour.len() < k {
        let mut chosen: Option<Candidate> = None;
        for v in (0..n).filter(|&v| !visited[v]) {
            let cand = price(&tour, v, distances, costs);
            if chosen.as_ref().is_none_or(|c| better(&cand, c)) {
                chosen = Some(cand);
            }
        }
        let Some(c) = chosen else { break };
        tour.insert(c.position, c.node);
        visited[c.node] = true;
    }

    Tour::from_nodes(tour)
}

/// Constructs a tour of `k` nodes from `start` by 2-regret insertion.
///
/// # Panics
///
/// Panics if `start` is out of range or `k` is not in `1..=n`.
pub(crate) fn regret_insertion(distances: &DistanceMatrix, costs: &[i64], start: usize, k: usize) -> Tour {
    build(distances, costs, start, k, |a, b| {
        a.regret > b.regret || (a.regret == b.regret && a.best_total < b.best_total)
    })
}

/// Constructs a tour of `k` nodes from `start`, scoring each candidate as
/// `alpha · regret − beta · (best + cost)`.
///
/// With `alpha = 0` this degenerates to cheapest insertion.
///
/// # Panics
///
/// Panics if `start` is out of range or `k` is not in `1..=n`.
pub(crate) fn weighted_regret_insertion(
    distances: &DistanceMatrix,
    costs: &[i64],
    start: usize,
    k: usize,
    alpha: f64,
    beta: f64,
) -> Tour {
    let score = |c: &Candidate| alpha * c.regret as f64 - beta * c.best_total as f64;
    build(distances, costs, start, k, |a, b| score(a) > score(b))
}
