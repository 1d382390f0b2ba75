//! # selective-tsp
//!
//! Construction heuristics for the selective-cycle TSP: given `n` points
//! with visitation costs, pick `k = ⌈n/2⌉` of them and order them into a
//! cycle minimizing rounded Euclidean length plus the chosen nodes' costs.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Instance, Tour)
//! - [`distance`] — Rounded Euclidean distance matrix
//! - [`evaluation`] — Objective evaluation
//! - [`constructive`] — Construction heuristics (Random, Nearest Neighbor, Greedy Cycle, Regret)
//! - [`experiment`] — Multi-trial runner with best/worst/mean aggregation
//! - [`error`] — Crate error type
//!
//! ## Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use selective_tsp::models::Instance;
//! use selective_tsp::distance::DistanceMatrix;
//! use selective_tsp::constructive::Strategy;
//! use selective_tsp::experiment::run_experiment;
//!
//! let inst = Instance::new(
//!     vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (5.0, 5.0), (20.0, 20.0), (15.0, 0.0)],
//!     vec![5, 2, 3, 2, 10, 1, 8],
//! ).unwrap();
//! let dm = DistanceMatrix::from_instance(&inst).unwrap();
//! let strategy: Strategy = "greedy_cycle".parse().unwrap();
//!
//! let summary = run_experiment(strategy, &inst, &dm, 1, &mut StdRng::seed_from_u64(0)).unwrap();
//! assert_eq!(summary.best.tour.len(), 4);
//! assert_eq!(summary.best.cost, 51);
//! ```

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod experiment;
pub mod models;

pub use error::{Error, Result};
