//! Multi-trial experiment runner.
//!
//! # Determinism
//!
//! Everything random is drawn up front from the caller's source, in order:
//! the start nodes (start-node strategies only, sampled without
//! replacement) and then one `u64` seed per trial. Each trial builds its own
//! [`ChaCha8Rng`] from its seed, so trials share nothing but the read-only
//! distance matrix and produce the same results sequentially or on rayon
//! workers.

use log::{debug, info, warn};
use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::constructive::Strategy;
use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::evaluation::TourEvaluator;
use crate::models::{check_objective_range, Instance};

use super::config::ExperimentConfig;
use super::summary::{ExperimentSummary, TrialResult};

/// Inputs of one trial, fixed before any trial runs.
#[derive(Debug, Clone, Copy)]
struct TrialPlan {
    start: Option<usize>,
    seed: u64,
}

/// Runs construction strategies repeatedly and aggregates the outcomes.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use selective_tsp::models::Instance;
/// use selective_tsp::distance::DistanceMatrix;
/// use selective_tsp::constructive::Strategy;
/// use selective_tsp::experiment::{ExperimentConfig, ExperimentRunner};
///
/// let inst = Instance::new(
///     vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (5.0, 5.0)],
///     vec![1, 2, 3, 4, 5],
/// ).unwrap();
/// let dm = DistanceMatrix::from_instance(&inst).unwrap();
/// let runner = ExperimentRunner::new(ExperimentConfig::default().with_trials(10));
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let summary = runner.run(Strategy::NearestNeighborAnywhere, &inst, &dm, &mut rng).unwrap();
/// // capped at one trial per start node
/// assert_eq!(summary.num_trials(), 5);
/// assert!(summary.best.cost as f64 <= summary.mean);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExperimentRunner {
    config: ExperimentConfig,
}

impl ExperimentRunner {
    pub fn new(config: ExperimentConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// Runs `strategy` for the configured number of trials and summarizes.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidTrialRequest`] if the trial count is zero,
    /// [`Error::InvalidInstance`] if `distances` was not built for
    /// `instance` or its entries combined with the instance's costs could
    /// overflow the objective.
    pub fn run<R: Rng + ?Sized>(
        &self,
        strategy: Strategy,
        instance: &Instance,
        distances: &DistanceMatrix,
        rng: &mut R,
    ) -> Result<ExperimentSummary> {
        if self.config.trials < 1 {
            return Err(Error::invalid_trial_request("trial count must be at least 1"));
        }
        if distances.size() != instance.len() {
            return Err(Error::invalid_instance(format!(
                "distance matrix covers {} nodes, instance has {}",
                distances.size(),
                instance.len()
            )));
        }
        check_objective_range(instance.len(), distances.max_distance(), instance.max_cost())?;

        let plans = self.plan(strategy, instance.len(), rng)?;
        let k = instance.selection_size();
        let evaluator = TourEvaluator::new(instance.costs(), distances);

        let run_one = |(i, plan): (usize, &TrialPlan)| -> Result<TrialResult> {
            let mut trial_rng = ChaCha8Rng::seed_from_u64(plan.seed);
            let tour = strategy.construct(distances, instance.costs(), k, plan.start, &mut trial_rng)?;
            let cost = evaluator.evaluate(&tour);
            debug!("{strategy} trial {i}: start={:?} cost={cost}", plan.start);
            Ok(TrialResult {
                tour,
                cost,
                start_node: plan.start,
            })
        };

        let trials = if self.config.parallel {
            plans.par_iter().enumerate().map(run_one).collect::<Result<Vec<_>>>()?
        } else {
            plans.iter().enumerate().map(run_one).collect::<Result<Vec<_>>>()?
        };

        let summary = ExperimentSummary::from_trials(strategy, trials)?;
        info!(
            "{strategy}: {} trials, best={} worst={} mean={:.2}",
            summary.num_trials(),
            summary.best.cost,
            summary.worst.cost,
            summary.mean
        );
        Ok(summary)
    }

    /// Runs each strategy in turn against the same instance, sharing `rng`.
    pub fn run_all<R: Rng + ?Sized>(
        &self,
        strategies: &[Strategy],
        instance: &Instance,
        distances: &DistanceMatrix,
        rng: &mut R,
    ) -> Result<Vec<ExperimentSummary>> {
        strategies
            .iter()
            .map(|&s| self.run(s, instance, distances, rng))
            .collect()
    }

    fn plan<R: Rng + ?Sized>(
        &self,
        strategy: Strategy,
        n: usize,
        rng: &mut R,
    ) -> Result<Vec<TrialPlan>> {
        let starts: Vec<Option<usize>> = if strategy.requires_start_node() {
            if n < 1 {
                return Err(Error::invalid_trial_request("no start nodes to sample"));
            }
            let count = self.config.trials.min(n);
            if count < self.config.trials {
                warn!(
                    "{strategy}: {} trials requested, capped at {n} distinct start nodes",
                    self.config.trials
                );
            }
            index::sample(rng, n, count).into_iter().map(Some).collect()
        } else {
            vec![None; self.config.trials]
        };

        Ok(starts
            .into_iter()
            .map(|start| TrialPlan {
                start,
                seed: rng.random(),
            })
            .collect())
    }
}

/// Runs `trials` trials of `strategy` sequentially.
///
/// Shorthand for an [`ExperimentRunner`] with only the trial count set.
pub fn run_experiment<R: Rng + ?Sized>(
    strategy: Strategy,
    instance: &Instance,
    distances: &DistanceMatrix,
    trials: usize,
    rng: &mut R,
) -> Result<ExperimentSummary> {
    ExperimentRunner::new(ExperimentConfig::default().with_trials(trials))
        .run(strategy, instance, distances, rng)
}
