//! Random selection baseline.

use rand::seq::{index, SliceRandom};
use rand::Rng;

use crate::models::Tour;

/// Picks `k` distinct nodes of `0..n` uniformly without replacement and
/// visits them in a uniformly random order.
///
/// Ignores distances and costs. The outcome depends only on the state of
/// `rng`, so identically seeded sources reproduce the same tour.
///
/// # Panics
///
/// Panics if `k == 0` or `k > n`.
pub(crate) fn random_selection<R: Rng + ?Sized>(n: usize, k: usize, rng: &mut R) -> Tour {
    assert!(k >= 1 && k <= n, "selection size {k} invalid for {n} nodes");
    let mut nodes = index::sample(rng, n, k).into_vec();
    nodes.shuffle(rng);
    Tour::from_nodes(nodes)
}
