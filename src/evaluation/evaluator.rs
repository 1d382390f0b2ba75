//! Objective evaluation: cycle length plus visitation costs.

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::models::Tour;

/// The two halves of a tour's objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Sum of edge lengths, closing edge included.
    pub length: i64,
    /// Sum of the visited nodes' costs.
    pub node_costs: i64,
    /// `length + node_costs`.
    pub total: i64,
}

/// Evaluates tours against one instance's costs and distance matrix.
///
/// # Examples
///
/// ```
/// use selective_tsp::models::{Instance, Tour};
/// use selective_tsp::distance::DistanceMatrix;
/// use selective_tsp::evaluation::TourEvaluator;
///
/// let inst = Instance::new(vec![(0.0, 0.0), (3.0, 4.0), (0.0, 8.0)], vec![1, 2, 3]).unwrap();
/// let dm = DistanceMatrix::from_instance(&inst).unwrap();
/// let eval = TourEvaluator::new(inst.costs(), &dm);
///
/// let tour = Tour::try_new(vec![0, 1, 2], 3).unwrap();
/// let b = eval.breakdown(&tour);
/// assert_eq!(b.length, 5 + 5 + 8);
/// assert_eq!(b.node_costs, 6);
/// assert_eq!(eval.evaluate(&tour), 24);
/// ```
pub struct TourEvaluator<'a> {
    costs: &'a [i64],
    distances: &'a DistanceMatrix,
}

impl<'a> TourEvaluator<'a> {
    pub fn new(costs: &'a [i64], distances: &'a DistanceMatrix) -> Self {
        Self { costs, distances }
    }

    /// Total objective of `tour` in O(k).
    pub fn evaluate(&self, tour: &Tour) -> i64 {
        self.breakdown(tour).total
    }

    /// Cycle length, summed node costs and their total.
    pub fn breakdown(&self, tour: &Tour) -> CostBreakdown {
        let length = cycle_length(tour.nodes(), self.distances);
        let node_costs: i64 = tour.nodes().iter().map(|&v| self.costs[v]).sum();
        CostBreakdown {
            length,
            node_costs,
            total: length + node_costs,
        }
    }
}

/// Length of the closed cycle through `nodes`; zero for fewer than two nodes.
pub fn cycle_length(nodes: &[usize], distances: &DistanceMatrix) -> i64 {
    let k = nodes.len();
    (0..k)
        .map(|i| distances.get(nodes[i], nodes[(i + 1) % k]))
        .sum()
}

/// Objective of `tour`: `Σ D[t_i, t_(i+1 mod k)] + Σ cost[t_i]`.
pub fn evaluate(tour: &Tour, costs: &[i64], distances: &DistanceMatrix) -> i64 {
    TourEvaluator::new(costs, distances).evaluate(tour)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Instance;
    use proptest::prelude::*;

    fn setup() -> (Instance, DistanceMatrix) {
        let inst = Instance::new(
            vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)],
            vec![1, 2, 3, 4],
        )
        .expect("valid");
        let dm = DistanceMatrix::from_instance(&inst).expect("valid");
        (inst, dm)
    }

    #[test]
    fn test_square() {
        let (inst, dm) = setup();
        let tour = Tour::try_new(vec![0, 1, 2, 3], 4).expect("valid");
        assert_eq!(evaluate(&tour, inst.costs(), &dm), 40 + 10);
    }

    #[test]
    fn test_diagonal_crossing_costs_more() {
        let (inst, dm) = setup();
        let crossed = Tour::try_new(vec![0, 2, 1, 3], 4).expect("valid");
        // 14 + 10 + 14 + 10
        assert_eq!(evaluate(&crossed, inst.costs(), &dm), 48 + 10);
    }

    #[test]
    fn test_single_node_is_its_cost() {
        let (inst, dm) = setup();
        let tour = Tour::try_new(vec![2], 4).expect("valid");
        let b = TourEvaluator::new(inst.costs(), &dm).breakdown(&tour);
        assert_eq!(b.length, 0);
        assert_eq!(b.total, 3);
    }

    #[test]
    fn test_two_nodes_count_edge_twice() {
        let (inst, dm) = setup();
        let tour = Tour::try_new(vec![0, 1], 4).expect("valid");
        assert_eq!(evaluate(&tour, inst.costs(), &dm), 20 + 3);
    }

    proptest! {
        #[test]
        fn prop_rotation_and_reversal_invariant(
            points in prop::collection::vec((0.0f64..500.0, 0.0f64..500.0, 0i64..100), 3..25),
            shift in 0usize..25,
        ) {
            let inst = Instance::from_rows(&points).expect("valid");
            let dm = DistanceMatrix::from_instance(&inst).expect("valid");
            let nodes: Vec<usize> = (0..inst.selection_size()).collect();
            let base = evaluate(&Tour::try_new(nodes.clone(), inst.len()).expect("valid"), inst.costs(), &dm);

            let mut rotated = nodes.clone();
            rotated.rotate_left(shift % nodes.len());
            let rotated = Tour::try_new(rotated, inst.len()).expect("valid");
            prop_assert_eq!(evaluate(&rotated, inst.costs(), &dm), base);

            let mut reversed = nodes;
            reversed.reverse();
            let reversed = Tour::try_new(reversed, inst.len()).expect("valid");
            prop_assert_eq!(evaluate(&reversed, inst.costs(), &dm), base);
        }
    }
}
