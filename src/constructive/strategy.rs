//! Strategy selection and validated dispatch.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::models::Tour;

use super::{
    greedy_cycle, nearest_neighbor_anywhere, nearest_neighbor_append, random_selection,
    regret_insertion, weighted_regret_insertion,
};

/// A construction heuristic, selected by identifier at the experiment
/// boundary.
///
/// # Examples
///
/// ```
/// use selective_tsp::constructive::Strategy;
///
/// let s: Strategy = "greedy_cycle".parse().unwrap();
/// assert_eq!(s, Strategy::GreedyCycle);
/// assert!(!s.requires_start_node());
/// assert!("two_opt".parse::<Strategy>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Uniform random subset in random order.
    Random,
    /// Nearest neighbor, appending only at the tour's end.
    #[serde(rename = "nn_end")]
    NearestNeighborAppend,
    /// Nearest neighbor, inserting at the cheapest edge.
    #[serde(rename = "nn_anywhere")]
    NearestNeighborAnywhere,
    /// Cheapest global pair, then cheapest insertion.
    GreedyCycle,
    /// 2-regret insertion.
    Regret,
    /// Regret weighted against the best insertion cost.
    WeightedRegret { alpha: f64, beta: f64 },
}

impl Strategy {
    /// Every strategy, with default weights for [`Strategy::WeightedRegret`].
    pub const ALL: [Strategy; 6] = [
        Strategy::Random,
        Strategy::NearestNeighborAppend,
        Strategy::NearestNeighborAnywhere,
        Strategy::GreedyCycle,
        Strategy::Regret,
        Strategy::WeightedRegret {
            alpha: 1.0,
            beta: 1.0,
        },
    ];

    /// Short identifier, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Random => "random",
            Strategy::NearestNeighborAppend => "nn_end",
            Strategy::NearestNeighborAnywhere => "nn_anywhere",
            Strategy::GreedyCycle => "greedy_cycle",
            Strategy::Regret => "regret",
            Strategy::WeightedRegret { .. } => "weighted_regret",
        }
    }

    /// Whether each run is driven by a caller-chosen start node.
    pub fn requires_start_node(&self) -> bool {
        matches!(
            self,
            Strategy::NearestNeighborAppend
                | Strategy::NearestNeighborAnywhere
                | Strategy::Regret
                | Strategy::WeightedRegret { .. }
        )
    }

    /// Builds a tour of `k` nodes after validating the request.
    ///
    /// `start` is required by start-node strategies and ignored by the
    /// others; `rng` is only consumed by [`Strategy::Random`].
    ///
    /// # Errors
    ///
    /// [`Error::InvalidTrialRequest`] if `costs` does not match the matrix,
    /// `k` is not in `1..=n`, or a start-node strategy gets no start node or
    /// one out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use selective_tsp::models::Instance;
    /// use selective_tsp::distance::DistanceMatrix;
    /// use selective_tsp::constructive::Strategy;
    ///
    /// let inst = Instance::new(
    ///     vec![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)],
    ///     vec![0, 0, 0, 0],
    /// ).unwrap();
    /// let dm = DistanceMatrix::from_instance(&inst).unwrap();
    /// let mut rng = StdRng::seed_from_u64(1);
    ///
    /// let tour = Strategy::NearestNeighborAppend
    ///     .construct(&dm, inst.costs(), 2, Some(3), &mut rng)
    ///     .unwrap();
    /// assert_eq!(tour.nodes(), &[3, 2]);
    /// assert!(Strategy::Regret.construct(&dm, inst.costs(), 2, None, &mut rng).is_err());
    /// ```
    pub fn construct<R: Rng + ?Sized>(
        &self,
        distances: &DistanceMatrix,
        costs: &[i64],
        k: usize,
        start: Option<usize>,
        rng: &mut R,
    ) -> Result<Tour> {
        let n = distances.size();
        if costs.len() != n {
            return Err(Error::invalid_trial_request(format!(
                "{} costs for a {n}-node matrix",
                costs.len()
            )));
        }
        if k == 0 || k > n {
            return Err(Error::invalid_trial_request(format!(
                "cannot select {k} of {n} nodes"
            )));
        }

        let start = if self.requires_start_node() {
            match start {
                Some(s) if s < n => s,
                Some(s) => {
                    return Err(Error::invalid_trial_request(format!(
                        "start node {s} out of range for {n} nodes"
                    )))
                }
                None => {
                    return Err(Error::invalid_trial_request(format!(
                        "strategy {self} requires a start node"
                    )))
                }
            }
        } else {
            0
        };

        let tour = match *self {
            Strategy::Random => random_selection(n, k, rng),
            Strategy::NearestNeighborAppend => nearest_neighbor_append(distances, costs, start, k),
            Strategy::NearestNeighborAnywhere => {
                nearest_neighbor_anywhere(distances, costs, start, k)
            }
            Strategy::GreedyCycle => greedy_cycle(distances, costs, k),
            Strategy::Regret => regret_insertion(distances, costs, start, k),
            Strategy::WeightedRegret { alpha, beta } => {
                weighted_regret_insertion(distances, costs, start, k, alpha, beta)
            }
        };
        Ok(tour)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::WeightedRegret { alpha, beta } => {
                write!(f, "weighted_regret(alpha={alpha:.2},beta={beta:.2})")
            }
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase();
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == key)
            .ok_or_else(|| Error::unknown_strategy(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::Strategy;
    use crate::models::Instance;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn setup() -> (Instance, DistanceMatrix) {
        let inst = Instance::new(
            vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (5.0, 5.0)],
            vec![3, 1, 4, 1, 5],
        )
        .expect("valid");
        let dm = DistanceMatrix::from_instance(&inst).expect("valid");
        (inst, dm)
    }

    #[test]
    fn test_parse_round_trip() {
        for s in Strategy::ALL {
            assert_eq!(s.name().parse::<Strategy>().expect("known"), s);
        }
        assert_eq!(" NN_END ".parse::<Strategy>(), Ok(Strategy::NearestNeighborAppend));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "two_opt".parse::<Strategy>(),
            Err(Error::UnknownStrategy("two_opt".into()))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Strategy::GreedyCycle.to_string(), "greedy_cycle");
        let w = Strategy::WeightedRegret {
            alpha: 0.5,
            beta: 2.0,
        };
        assert_eq!(w.to_string(), "weighted_regret(alpha=0.50,beta=2.00)");
    }

    #[test]
    fn test_missing_start_node() {
        let (inst, dm) = setup();
        let mut rng = StdRng::seed_from_u64(0);
        for s in Strategy::ALL.iter().filter(|s| s.requires_start_node()) {
            let err = s.construct(&dm, inst.costs(), 3, None, &mut rng).unwrap_err();
            assert!(matches!(err, Error::InvalidTrialRequest(_)));
        }
    }

    #[test]
    fn test_start_node_out_of_range() {
        let (inst, dm) = setup();
        let mut rng = StdRng::seed_from_u64(0);
        let err = Strategy::NearestNeighborAnywhere
            .construct(&dm, inst.costs(), 3, Some(5), &mut rng)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidTrialRequest(_)));
    }

    #[test]
    fn test_bad_selection_size() {
        let (inst, dm) = setup();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(Strategy::GreedyCycle
            .construct(&dm, inst.costs(), 0, None, &mut rng)
            .is_err());
        assert!(Strategy::GreedyCycle
            .construct(&dm, inst.costs(), 6, None, &mut rng)
            .is_err());
        assert!(Strategy::GreedyCycle
            .construct(&dm, &inst.costs()[..4], 3, None, &mut rng)
            .is_err());
    }

    #[test]
    fn test_seed_free_strategies_ignore_start() {
        let (inst, dm) = setup();
        let mut rng = StdRng::seed_from_u64(0);
        let a = Strategy::GreedyCycle
            .construct(&dm, inst.costs(), 3, None, &mut rng)
            .expect("valid");
        let b = Strategy::GreedyCycle
            .construct(&dm, inst.costs(), 3, Some(4), &mut rng)
            .expect("valid");
        assert_eq!(a, b);
    }

    #[test]
    fn test_two_nodes_give_single_node_tours() {
        let inst = Instance::new(vec![(0.0, 0.0), (3.0, 4.0)], vec![7, 2]).expect("valid");
        let dm = DistanceMatrix::from_instance(&inst).expect("valid");
        let k = inst.selection_size();
        assert_eq!(k, 1);
        let mut rng = StdRng::seed_from_u64(11);
        for s in Strategy::ALL {
            let tour = s.construct(&dm, inst.costs(), k, Some(0), &mut rng).expect("valid");
            assert_eq!(tour.len(), 1);
            let v = tour.nodes()[0];
            assert_eq!(crate::evaluation::evaluate(&tour, inst.costs(), &dm), inst.cost(v));
        }
    }

    #[test]
    fn test_serde_names() {
        for s in Strategy::ALL {
            let json = serde_json::to_value(s).expect("serialize");
            let tag = match &json {
                serde_json::Value::String(tag) => tag.clone(),
                serde_json::Value::Object(map) => map.keys().next().cloned().expect("tagged"),
                other => panic!("unexpected encoding {other}"),
            };
            assert_eq!(tag, s.name());
            assert_eq!(tag.parse::<Strategy>().expect("known").name(), s.name());
        }
        let json = serde_json::to_string(&Strategy::NearestNeighborAppend).expect("serialize");
        assert_eq!(json, "\"nn_end\"");
        let w: Strategy =
            serde_json::from_str(r#"{"weighted_regret":{"alpha":2.0,"beta":0.5}}"#).expect("deserialize");
        assert_eq!(
            w,
            Strategy::WeightedRegret {
                alpha: 2.0,
                beta: 0.5
            }
        );
    }

    proptest! {
        #[test]
        fn prop_every_strategy_builds_valid_tours(
            rows in prop::collection::vec((0.0f64..1000.0, 0.0f64..1000.0, 0i64..200), 2..40),
            seed in any::<u64>(),
            start_frac in 0.0f64..1.0,
        ) {
            let inst = Instance::from_rows(&rows).expect("valid");
            let dm = DistanceMatrix::from_instance(&inst).expect("valid");
            let n = inst.len();
            let k = inst.selection_size();
            let start = ((start_frac * n as f64) as usize).min(n - 1);
            let mut rng = StdRng::seed_from_u64(seed);
            for s in Strategy::ALL {
                let tour = s.construct(&dm, inst.costs(), k, Some(start), &mut rng).expect("valid");
                prop_assert_eq!(tour.len(), k);
                prop_assert!(Tour::try_new(tour.into_nodes(), n).is_ok());
            }
        }
    }
}
