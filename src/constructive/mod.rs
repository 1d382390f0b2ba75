//! Constructive heuristics for building selective-TSP tours.
//!
//! - `random` — Uniform random subset and order, the baseline
//! - `nn_end` — Nearest neighbor, append at the end, O(k·n)
//! - `nn_anywhere` — Nearest neighbor, cheapest edge, O(k²·n)
//! - `greedy_cycle` — Cheapest global pair, then cheapest insertion, O(n² + k²·n)
//! - `regret` — 2-regret insertion, O(k²·n)
//! - `weighted_regret` — Regret traded against insertion cost, O(k²·n)
//!
//! [`Strategy`] selects one of these by identifier and validates the request
//! before dispatching, so malformed requests surface as errors rather than
//! reaching a kernel. Every kernel scans candidate nodes in ascending index
//! and positions in ascending order; the first minimum wins.

mod greedy_cycle;
mod insertion;
mod nearest_neighbor;
mod random;
mod regret;
mod strategy;

pub(crate) use greedy_cycle::greedy_cycle;
pub(crate) use nearest_neighbor::{nearest_neighbor_anywhere, nearest_neighbor_append};
pub(crate) use random::random_selection;
pub(crate) use regret::{regret_insertion, weighted_regret_insertion};
pub use strategy::Strategy;
