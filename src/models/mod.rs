//! Domain model types for the selective TSP.
//!
//! Provides the immutable problem instance (coordinates and visitation
//! costs) and the tour type produced by the construction heuristics.

mod instance;
mod tour;

pub(crate) use instance::check_objective_range;
pub use instance::Instance;
pub use tour::Tour;
