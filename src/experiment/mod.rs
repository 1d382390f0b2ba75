//! Multi-trial experiments over construction strategies.
//!
//! - [`ExperimentConfig`] — Trial count and parallelism
//! - [`ExperimentRunner`] — Plans, runs and summarizes trials
//! - [`ExperimentSummary`] — Best, worst and mean over all trials

mod config;
mod runner;
mod summary;

pub use config::ExperimentConfig;
pub use runner::{run_experiment, ExperimentRunner};
pub use summary::{ExperimentSummary, TrialResult};
