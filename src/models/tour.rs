//! Tour type: an implicitly closed cycle over a subset of nodes.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An ordered cycle over distinct node indices.
///
/// The closing edge `last → first` is implicit and never stored. A tour
/// with one node is a zero-length self-loop.
///
/// # Examples
///
/// ```
/// use selective_tsp::models::Tour;
///
/// let tour = Tour::try_new(vec![3, 0, 2], 5).unwrap();
/// assert_eq!(tour.len(), 3);
/// assert_eq!(tour.edges().collect::<Vec<_>>(), vec![(3, 0), (0, 2), (2, 3)]);
/// ```
///
/// Deserializing checks that the sequence is non-empty and free of
/// repeats; range against an instance is left to [`Tour::try_new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TourRepr")]
pub struct Tour {
    nodes: Vec<usize>,
}

/// Wire shape of [`Tour`], validated on the way in.
#[derive(Deserialize)]
struct TourRepr {
    nodes: Vec<usize>,
}

impl TryFrom<TourRepr> for Tour {
    type Error = Error;

    fn try_from(repr: TourRepr) -> Result<Self> {
        if repr.nodes.is_empty() {
            return Err(Error::invalid_tour("tour is empty"));
        }
        let mut seen = HashSet::with_capacity(repr.nodes.len());
        if let Some(&v) = repr.nodes.iter().find(|&&v| !seen.insert(v)) {
            return Err(Error::invalid_tour(format!("node {v} appears twice")));
        }
        Ok(Self { nodes: repr.nodes })
    }
}

impl Tour {
    /// Wraps a node sequence produced by a construction kernel.
    pub(crate) fn from_nodes(nodes: Vec<usize>) -> Self {
        debug_assert!(!nodes.is_empty());
        Self { nodes }
    }

    /// Creates a tour over an instance of `n` nodes, checking that the
    /// sequence is non-empty, in range and free of repeats.
    pub fn try_new(nodes: Vec<usize>, n: usize) -> Result<Self> {
        if nodes.is_empty() {
            return Err(Error::invalid_tour("tour is empty"));
        }
        let mut seen = vec![false; n];
        for &v in &nodes {
            if v >= n {
                return Err(Error::invalid_tour(format!(
                    "node {v} out of range for {n} nodes"
                )));
            }
            if seen[v] {
                return Err(Error::invalid_tour(format!("node {v} appears twice")));
            }
            seen[v] = true;
        }
        Ok(Self { nodes })
    }

    /// Node indices in visiting order.
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns `true` if `node` is visited.
    pub fn contains(&self, node: usize) -> bool {
        self.nodes.contains(&node)
    }

    /// All cycle edges, including the closing one.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let k = self.nodes.len();
        (0..k).map(move |i| (self.nodes[i], self.nodes[(i + 1) % k]))
    }

    /// Consumes the tour, returning the node sequence.
    pub fn into_nodes(self) -> Vec<usize> {
        self.nodes
    }
}
