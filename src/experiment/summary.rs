//! Trial results and their best/worst/mean reduction.

use serde::{Deserialize, Serialize};

use crate::constructive::Strategy;
use crate::error::{Error, Result};
use crate::models::Tour;

/// One construction run paired with its objective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialResult {
    pub tour: Tour,
    pub cost: i64,
    /// Start node for start-node strategies.
    pub start_node: Option<usize>,
}

/// Aggregated outcome of running one strategy for several trials.
///
/// `best` and `worst` are the first trials (in run order) reaching the
/// minimum and maximum cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentSummary {
    pub strategy: Strategy,
    pub trials: Vec<TrialResult>,
    pub best: TrialResult,
    pub worst: TrialResult,
    pub mean: f64,
}

impl ExperimentSummary {
    /// Reduces trial results in run order.
    ///
    /// Fails with [`Error::InvalidTrialRequest`] if `trials` is empty.
    pub fn from_trials(strategy: Strategy, trials: Vec<TrialResult>) -> Result<Self> {
        let first = trials
            .first()
            .ok_or_else(|| Error::invalid_trial_request("no trials to summarize"))?;

        let mut best = first;
        let mut worst = first;
        let mut sum = 0i128;
        for t in &trials {
            if t.cost < best.cost {
                best = t;
            }
            if t.cost > worst.cost {
                worst = t;
            }
            sum += i128::from(t.cost);
        }

        let best = best.clone();
        let worst = worst.clone();
        let mean = sum as f64 / trials.len() as f64;
        Ok(Self {
            strategy,
            trials,
            best,
            worst,
            mean,
        })
    }

    /// Number of trials that were run.
    pub fn num_trials(&self) -> usize {
        self.trials.len()
    }
}
