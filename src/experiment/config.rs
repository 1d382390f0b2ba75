//! Experiment runner configuration.

use serde::{Deserialize, Serialize};

/// Configuration parameters for a multi-trial experiment.
///
/// # Examples
///
/// ```
/// use selective_tsp::experiment::ExperimentConfig;
///
/// let config = ExperimentConfig::default()
///     .with_trials(50)
///     .with_parallel(true);
/// assert_eq!(config.trials, 50);
/// assert!(config.parallel);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Number of trials per strategy. Start-node strategies are capped at
    /// the number of nodes, one trial per distinct start.
    pub trials: usize,
    /// Run trials on the rayon thread pool. Results are identical either way.
    pub parallel: bool,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            trials: 200,
            parallel: false,
        }
    }
}

impl ExperimentConfig {
    /// Sets the number of trials.
    pub fn with_trials(mut self, n: usize) -> Self {
        self.trials = n;
        self
    }

    /// Enables or disables parallel trial execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
