//! Greedy cycle constructive heuristic.
//!
//! # Algorithm
//!
//! Seeds the cycle with the pair `(i, j)`, `i < j`, minimizing
//! `D[i,j] + cost[i] + cost[j]` over all pairs, then grows it by cheapest
//! insertion until it holds `k` nodes.
//!
//! The seed is a global scan, not a caller-chosen start, so the heuristic
//! is fully deterministic.
//!
//! # Complexity
//!
//! O(n²) for the seed pair plus O(k²·n) for the growth phase.

use crate::distance::DistanceMatrix;
use crate::models::Tour;

use super::insertion::{grow_by_cheapest_insertion, visited_mask};

/// Constructs a tour of `k` nodes with the greedy cycle heuristic.
///
/// With `k == 1` the tour is the single cheapest node (lowest index on
/// ties), since a one-node cycle costs exactly its visitation cost.
///
/// # Panics
///
/// Panics if `k` is not in `1..=n`.
pub(crate) fn greedy_cycle(distances: &DistanceMatrix, costs: &[i64], k: usize) -> Tour {
    let n = distances.size();
    assert!(k >= 1 && k <= n, "selection size {k} invalid for {n} nodes");

    if k == 1 {
        let cheapest = (0..n).min_by_key(|&v| costs[v]).unwrap_or(0);
        return Tour::from_nodes(vec![cheapest]);
    }

    let (a, b) = cheapest_pair(distances, costs);
    let mut tour = Vec::with_capacity(k);
    tour.extend([a, b]);
    let mut visited = visited_mask(n, &tour);
    grow_by_cheapest_insertion(&mut tour, &mut visited, k, distances, costs);
    Tour::from_nodes(tour)
}

/// First pair `(i, j)`, `i < j`, in lexicographic order minimizing
/// `D[i,j] + cost[i] + cost[j]`.
fn cheapest_pair(distances: &DistanceMatrix, costs: &[i64]) -> (usize, usize) {
    let n = distances.size();
    let mut best = (0, 1);
    let mut best_value = i64::MAX;
    for i in 0..n {
        for j in (i + 1)..n {
            let value = distances.get(i, j) + costs[i] + costs[j];
            if value < best_value {
                best_value = value;
                best = (i, j);
            }
        }
    }
    best
}
