//! Monte Carlo estimation of draft lottery odds: the fallback when exact enumeration is
//! intractable. Repeats independent single draws and tallies empirical position
//! frequencies. The estimate carries sampling error of order `1/sqrt(trials)` and is never
//! to be presented as exact.

use tinyrand::{Rand, StdRand};

use crate::draw;
use crate::linear::Matrix;

pub const DEFAULT_TRIALS: u64 = 500_000;

/// Estimates the position probability matrix by simulation. Reuses its RNG across calls;
/// seed it for reproducibility.
pub struct MonteCarloEstimator<R: Rand = StdRand> {
    trials: u64,
    rand: R,
}
impl Default for MonteCarloEstimator {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            rand: StdRand::default(),
        }
    }
}
impl<R: Rand> MonteCarloEstimator<R> {
    pub fn with_trials(mut self, trials: u64) -> Self {
        assert!(trials > 0, "at least one trial must be run");
        self.trials = trials;
        self
    }

    pub fn with_rand<S: Rand>(self, rand: S) -> MonteCarloEstimator<S> {
        MonteCarloEstimator {
            trials: self.trials,
            rand,
        }
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Runs the trials and returns the empirical N×N position probability matrix. Weights
    /// are sanitised and `num_to_pick` clamped, as for a real draw.
    pub fn estimate(&mut self, weights: &[f64], num_to_pick: usize) -> Matrix<f64> {
        let participants = weights.len();
        let num_to_pick = num_to_pick.min(participants);
        let weights = draw::sanitise_weights(weights);

        let mut counts: Matrix<u64> = Matrix::allocate(participants, participants);
        let mut order = vec![0; participants];
        let mut taken = vec![false; participants];
        for _ in 0..self.trials {
            draw::run_once(&weights, num_to_pick, &mut order, &mut taken, &mut self.rand);
            for (position, &participant) in order.iter().enumerate() {
                counts[(participant, position)] += 1;
            }
        }

        let mut matrix = Matrix::allocate(participants, participants);
        for participant in 0..participants {
            for position in 0..participants {
                matrix[(participant, position)] =
                    counts[(participant, position)] as f64 / self.trials as f64;
            }
        }
        matrix
    }
}
