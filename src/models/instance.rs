//! Problem instance: node coordinates and visitation costs.

use serde::Serialize;

use crate::error::{Error, Result};

/// An immutable selective-TSP instance.
///
/// Node `i` sits at `coordinates()[i]` and costs `costs()[i]` to visit.
/// Node indices are stable for the lifetime of the instance.
///
/// # Examples
///
/// ```
/// use selective_tsp::models::Instance;
///
/// let inst = Instance::new(
///     vec![(0.0, 0.0), (3.0, 4.0), (6.0, 8.0)],
///     vec![10, 5, 7],
/// ).unwrap();
/// assert_eq!(inst.len(), 3);
/// assert_eq!(inst.selection_size(), 2);
/// assert_eq!(inst.cost(1), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Instance {
    coordinates: Vec<(f64, f64)>,
    costs: Vec<i64>,
}

impl Instance {
    /// Creates an instance from aligned coordinate and cost sequences.
    ///
    /// Fails with [`Error::InvalidInstance`] if the lengths differ, there are
    /// fewer than two nodes, a cost is negative, a coordinate is not finite,
    /// or the coordinates and costs are large enough that a tour objective
    /// could overflow `i64`.
    pub fn new(coordinates: Vec<(f64, f64)>, costs: Vec<i64>) -> Result<Self> {
        if coordinates.len() != costs.len() {
            return Err(Error::invalid_instance(format!(
                "{} coordinates but {} costs",
                coordinates.len(),
                costs.len()
            )));
        }
        if coordinates.len() < 2 {
            return Err(Error::invalid_instance(format!(
                "need at least 2 nodes, got {}",
                coordinates.len()
            )));
        }
        if let Some(i) = coordinates
            .iter()
            .position(|&(x, y)| !x.is_finite() || !y.is_finite())
        {
            return Err(Error::invalid_instance(format!(
                "node {i} has a non-finite coordinate"
            )));
        }
        if let Some(i) = costs.iter().position(|&c| c < 0) {
            return Err(Error::invalid_instance(format!(
                "node {i} has negative cost {}",
                costs[i]
            )));
        }
        let instance = Self { coordinates, costs };
        check_objective_range(
            instance.len(),
            max_span(&instance.coordinates)?,
            instance.max_cost(),
        )?;
        Ok(instance)
    }

    /// Creates an instance from `(x, y, cost)` rows, the loader's row shape.
    pub fn from_rows(rows: &[(f64, f64, i64)]) -> Result<Self> {
        let coordinates = rows.iter().map(|&(x, y, _)| (x, y)).collect();
        let costs = rows.iter().map(|&(_, _, c)| c).collect();
        Self::new(coordinates, costs)
    }

    /// Number of nodes `n`.
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    /// Always `false` for a constructed instance (n ≥ 2).
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Number of nodes a tour must select: `k = ⌈n/2⌉`.
    pub fn selection_size(&self) -> usize {
        self.len().div_ceil(2)
    }

    pub fn coordinates(&self) -> &[(f64, f64)] {
        &self.coordinates
    }

    pub fn costs(&self) -> &[i64] {
        &self.costs
    }

    /// Largest visitation cost.
    pub fn max_cost(&self) -> i64 {
        self.costs.iter().copied().max().unwrap_or(0)
    }

    /// Visitation cost of node `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    pub fn cost(&self, i: usize) -> i64 {
        self.costs[i]
    }

    /// Euclidean distance between nodes `i` and `j`, unrounded.
    pub fn euclidean(&self, i: usize, j: usize) -> f64 {
        let (xi, yi) = self.coordinates[i];
        let (xj, yj) = self.coordinates[j];
        (xi - xj).hypot(yi - yj)
    }
}

/// Upper bound on any rounded pairwise distance: the bounding-box diagonal,
/// rounded up.
fn max_span(coordinates: &[(f64, f64)]) -> Result<i64> {
    let (min_x, max_x, min_y, max_y) = coordinates.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY),
        |(lx, hx, ly, hy), &(x, y)| (lx.min(x), hx.max(x), ly.min(y), hy.max(y)),
    );
    let span = (max_x - min_x).hypot(max_y - min_y).ceil();
    // i64::MAX as f64 is 2^63, the first value that saturates
    if span >= i64::MAX as f64 {
        return Err(Error::invalid_instance(format!(
            "coordinate span {span} exceeds the integer distance range"
        )));
    }
    Ok(span as i64)
}

/// Fails unless every objective and insertion delta over `n` nodes fits in
/// `i64`, given edges of at most `max_distance` and costs of at most
/// `max_cost`.
///
/// A tour objective is at most `k · (max_distance + max_cost)` and one
/// insertion delta at most `2 · max_distance + max_cost`; `n · (2 ·
/// max_distance + max_cost)` bounds both.
pub(crate) fn check_objective_range(n: usize, max_distance: i64, max_cost: i64) -> Result<()> {
    let bound = n as i128 * (2 * max_distance as i128 + max_cost as i128);
    if bound > i64::MAX as i128 {
        return Err(Error::invalid_instance(format!(
            "{n} nodes with distances up to {max_distance} and costs up to {max_cost} \
             can overflow the objective"
        )));
    }
    Ok(())
}
