//! The public entry point for odds computation. Consults the feasibility gate, dispatches
//! to the exact engine or the Monte Carlo estimator, and tags the result with its
//! provenance.

use std::time::Instant;

use tracing::debug;

use crate::exact;
use crate::feasibility;
use crate::linear::Matrix;
use crate::mc::{MonteCarloEstimator, DEFAULT_TRIALS};

/// A position probability matrix tagged with how it was produced. `approximate` results
/// carry Monte Carlo sampling error; exact results are limited only by floating-point
/// rounding.
#[derive(Debug, Clone, PartialEq)]
pub struct Odds {
    pub matrix: Matrix<f64>,
    pub approximate: bool,
}

/// Computes draft lottery odds, choosing between exhaustive enumeration and simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct OddsEngine {
    trials: u64,
    exact_limit: f64,
}
impl Default for OddsEngine {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            exact_limit: feasibility::DEFAULT_EXACT_LIMIT,
        }
    }
}
impl OddsEngine {
    pub fn with_trials(mut self, trials: u64) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_exact_limit(mut self, exact_limit: f64) -> Self {
        self.exact_limit = exact_limit;
        self
    }

    /// Computes the N×N position probability matrix for the given weights. `force_exact`
    /// bypasses the feasibility gate, permitting a voluntarily slow exact computation.
    pub fn compute(&self, weights: &[f64], num_to_pick: usize, force_exact: bool) -> Odds {
        let participants = weights.len();
        if participants == 0 {
            return Odds {
                matrix: Matrix::allocate(0, 0),
                approximate: false,
            };
        }

        let num_to_pick = num_to_pick.min(participants);
        let exact = force_exact
            || feasibility::is_exact_feasible_within(participants, num_to_pick, self.exact_limit);
        let start_time = Instant::now();
        let matrix = if exact {
            exact::compute_exact(weights, num_to_pick)
        } else {
            MonteCarloEstimator::default()
                .with_trials(self.trials)
                .estimate(weights, num_to_pick)
        };
        debug!(
            "computed {} odds for {participants} participants, {num_to_pick} picks in {:.3}s",
            if exact { "exact" } else { "approximate" },
            start_time.elapsed().as_millis() as f64 / 1_000.
        );
        Odds {
            matrix,
            approximate: !exact,
        }
    }
}

/// Computes odds with the default engine configuration. This is the sole odds entry point
/// intended for external callers; [`crate::draw::draw_once`] separately covers
/// single-outcome simulation.
pub fn compute_probabilities(weights: &[f64], num_to_pick: usize, force_exact: bool) -> Odds {
    OddsEngine::default().compute(weights, num_to_pick, force_exact)
}
