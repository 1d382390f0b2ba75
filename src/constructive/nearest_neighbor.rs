//! Nearest-neighbor constructive heuristics.
//!
//! Both variants start from a caller-chosen node and add one node per step
//! by minimum marginal objective change:
//!
//! - [`nearest_neighbor_append`] only extends the tour at its end, so each
//!   candidate is priced against the closing edge alone. O(k·n).
//! - [`nearest_neighbor_anywhere`] prices every candidate against every
//!   edge of the partial cycle. O(k²·n).
//!
//! Candidates are scanned in ascending node index and the first minimum
//! wins, so both are deterministic for a fixed start node.

use crate::distance::DistanceMatrix;
use crate::models::Tour;

use super::insertion::{grow_by_cheapest_insertion, visited_mask};

/// Builds a tour of `k` nodes from `start`, always appending at the end.
///
/// With one node in the tour a candidate `j` costs
/// `D[last,j] + D[j,first] + cost[j]`; afterwards it replaces the closing
/// edge: `D[last,j] + D[j,first] - D[last,first] + cost[j]`.
///
/// # Panics
///
/// Panics if `start` is out of range or `k` is not in `1..=n`.
pub(crate) fn nearest_neighbor_append(
    distances: &DistanceMatrix,
    costs: &[i64],
    start: usize,
    k: usize,
) -> Tour {
    let n = distances.size();
    assert!(start < n, "start node {start} out of range for {n} nodes");
    assert!(k >= 1 && k <= n, "selection size {k} invalid for {n} nodes");

    let mut tour = Vec::with_capacity(k);
    tour.push(start);
    let mut visited = visited_mask(n, &tour);

    while tour.len() < k {
        let first = tour[0];
        let last = tour[tour.len() - 1];
        let closing = if tour.len() == 1 {
            0
        } else {
            distances.get(last, first)
        };

        let mut best: Option<(usize, i64)> = None;
        for j in (0..n).filter(|&j| !visited[j]) {
            let delta = distances.get(last, j) + distances.get(j, first) - closing + costs[j];
            if best.is_none_or(|(_, d)| delta < d) {
                best = Some((j, delta));
            }
        }

        match best {
            Some((next, _)) => {
                visited[next] = true;
                tour.push(next);
            }
            None => break,
        }
    }

    Tour::from_nodes(tour)
}

/// Builds a tour of `k` nodes from `start`, inserting at the cheapest edge.
///
/// The second node minimizes the two-node cycle cost
/// `D[start,j] + D[j,start] + cost[j]`; after that every step takes the
/// cheapest (node, edge) insertion over all unvisited nodes and edges.
///
/// # Panics
///
/// Panics if `start` is out of range or `k` is not in `1..=n`.
pub(crate) fn nearest_neighbor_anywhere(
    distances: &DistanceMatrix,
    costs: &[i64],
    start: usize,
    k: usize,
) -> Tour {
    let n = distances.size();
    assert!(start < n, "start node {start} out of range for {n} nodes");
    assert!(k >= 1 && k <= n, "selection size {k} invalid for {n} nodes");

    let mut tour = Vec::with_capacity(k);
    tour.push(start);
    let mut visited = visited_mask(n, &tour);

    if k >= 2 {
        let second = (0..n)
            .filter(|&j| !visited[j])
            .min_by_key(|&j| distances.get(start, j) + distances.get(j, start) + costs[j]);
        if let Some(j) = second {
            visited[j] = true;
            tour.push(j);
        }
    }

    grow_by_cheapest_insertion(&mut tour, &mut visited, k, distances, costs);
    Tour::from_nodes(tour)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::evaluate;
    use crate::models::Instance;

    fn setup(coords: Vec<(f64, f64)>, costs: Vec<i64>) -> (Instance, DistanceMatrix) {
        let inst = Instance::new(coords, costs).expect("valid");
        let dm = DistanceMatrix::from_instance(&inst).expect("valid");
        (inst, dm)
    }

    fn line() -> (Instance, DistanceMatrix) {
        setup(
            vec![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0), (4.0, 0.0), (5.0, 0.0)],
            vec![0; 6],
        )
    }

    #[test]
    fn test_append_walks_the_line() {
        let (inst, dm) = line();
        let tour = nearest_neighbor_append(&dm, inst.costs(), 0, 3);
        assert_eq!(tour.nodes(), &[0, 1, 2]);
    }

    #[test]
    fn test_append_skips_far_node() {
        let (inst, dm) = setup(
            vec![(0.0, 0.0), (10.0, 0.0), (1.0, 0.0), (2.0, 0.0)],
            vec![0, 0, 0, 0],
        );
        let tour = nearest_neighbor_append(&dm, inst.costs(), 0, 2);
        assert_eq!(tour.nodes(), &[0, 2]);
    }

    #[test]
    fn test_append_first_step_counts_both_edges_and_cost() {
        // 1 is nearer but expensive; 2 wins on D + D + cost
        let (inst, dm) = setup(
            vec![(0.0, 0.0), (1.0, 0.0), (3.0, 0.0), (50.0, 50.0)],
            vec![0, 10, 1, 0],
        );
        let tour = nearest_neighbor_append(&dm, inst.costs(), 0, 2);
        assert_eq!(tour.nodes(), &[0, 2]);
    }

    #[test]
    fn test_append_tie_takes_lowest_index() {
        // 1 and 2 are both at distance 1 from 0
        let (inst, dm) = setup(
            vec![(0.0, 0.0), (1.0, 0.0), (-1.0, 0.0), (9.0, 9.0)],
            vec![0, 0, 0, 0],
        );
        let tour = nearest_neighbor_append(&dm, inst.costs(), 0, 2);
        assert_eq!(tour.nodes(), &[0, 1]);
    }

    #[test]
    fn test_anywhere_can_insert_mid_tour() {
        let (inst, dm) = setup(
            vec![(0.0, 0.0), (10.0, 0.0), (5.0, 1.0), (100.0, 100.0), (-100.0, 100.0)],
            vec![0, 0, 0, 0, 0],
        );
        // second node is 2; inserting 1 costs 10 on edge 0→2 and on 2→0,
        // so the first edge wins
        let tour = nearest_neighbor_anywhere(&dm, inst.costs(), 0, 3);
        assert_eq!(tour.nodes(), &[0, 1, 2]);
    }

    #[test]
    fn test_anywhere_never_worse_than_append_on_line() {
        let (inst, dm) = line();
        for start in 0..6 {
            let a = nearest_neighbor_append(&dm, inst.costs(), start, 3);
            let b = nearest_neighbor_anywhere(&dm, inst.costs(), start, 3);
            assert!(evaluate(&b, inst.costs(), &dm) <= evaluate(&a, inst.costs(), &dm));
        }
    }

    #[test]
    fn test_deterministic_for_fixed_start() {
        let (inst, dm) = setup(
            vec![(3.0, 7.0), (1.0, 9.0), (8.0, 2.0), (4.0, 4.0), (6.0, 6.0), (0.0, 5.0), (9.0, 9.0)],
            vec![5, 3, 8, 1, 2, 7, 4],
        );
        for start in 0..7 {
            assert_eq!(
                nearest_neighbor_append(&dm, inst.costs(), start, 4),
                nearest_neighbor_append(&dm, inst.costs(), start, 4)
            );
            assert_eq!(
                nearest_neighbor_anywhere(&dm, inst.costs(), start, 4),
                nearest_neighbor_anywhere(&dm, inst.costs(), start, 4)
            );
        }
    }

    #[test]
    fn test_single_node_tour() {
        let (inst, dm) = setup(vec![(0.0, 0.0), (1.0, 1.0)], vec![4, 2]);
        assert_eq!(nearest_neighbor_append(&dm, inst.costs(), 1, 1).nodes(), &[1]);
        assert_eq!(nearest_neighbor_anywhere(&dm, inst.costs(), 0, 1).nodes(), &[0]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_start_out_of_range_panics() {
        let (inst, dm) = line();
        nearest_neighbor_append(&dm, inst.costs(), 6, 3);
    }
}
