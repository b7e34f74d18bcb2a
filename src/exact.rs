//! Exhaustive computation of draft lottery odds. Every ordered sequence of distinct lottery
//! winners is enumerated and its joint probability derived by the chain rule of weighted
//! sampling without replacement; positions beyond the lottery are then placed in closed form
//! from the distribution of "skips" (times a participant is bypassed by a lottery winner of
//! higher original index).

use crate::comb;
use crate::draw::sanitise_weights;
use crate::linear::Matrix;

/// Computes the exact probability of every participant finishing at every draft position.
/// Returns an N×N row-stochastic matrix: element `(i, j)` is the probability that
/// participant `i` lands draft position `j`. Weights are sanitised and `num_to_pick`
/// clamped to the participant count, so the computation is total.
///
/// Work is exponential in `num_to_pick`; consult [`crate::feasibility`] before calling.
pub fn compute_exact(weights: &[f64], num_to_pick: usize) -> Matrix<f64> {
    let participants = weights.len();
    if participants == 0 {
        return Matrix::allocate(0, 0);
    }
    if participants == 1 {
        // the chain rule degenerates when removing the only participant leaves zero weight
        let mut matrix = Matrix::allocate(1, 1);
        matrix[(0, 0)] = 1.0;
        return matrix;
    }

    let num_to_pick = num_to_pick.min(participants);
    let weights = sanitise_weights(weights);

    let mut matrix = Matrix::allocate(participants, participants);
    let mut skipped: Matrix<f64> = Matrix::allocate(participants, num_to_pick + 1);

    if num_to_pick == 0 {
        // the empty winning sequence is certain and bypasses nobody
        for participant in 0..participants {
            skipped[(participant, 0)] = 1.0;
        }
    }

    let mut ordinals = vec![0; num_to_pick];
    let mut bitmap = vec![false; participants];
    for width in 1..=num_to_pick {
        let winners = &mut ordinals[..width];
        for sequence in 0..comb::count_sequences(participants, width) {
            comb::pick(participants, sequence, winners);
            if !comb::is_distinct(winners, &mut bitmap) {
                continue;
            }

            let prob = sequence_prob(&weights, winners);
            matrix[(winners[width - 1], width - 1)] += prob;

            if width == num_to_pick {
                accumulate_skips(winners, &bitmap, prob, &mut skipped);
            }
        }
    }

    // a non-winner's final position is its original rank plus the number of higher-index winners
    for participant in 0..participants {
        for skips in 0..=num_to_pick {
            let position = participant + skips;
            if position >= num_to_pick && position < participants {
                matrix[(participant, position)] = skipped[(participant, skips)];
            }
        }
    }

    matrix
}

/// Joint probability of the given winner sequence under the chain rule: each winner is drawn
/// with probability proportional to its weight among the weight remaining before its round.
/// When no weight remains, the draw degenerates to certainty for the lowest-index
/// participant still in the pool, mirroring the cumulative scan in [`crate::draw`].
fn sequence_prob(weights: &[f64], winners: &[usize]) -> f64 {
    let mut prob = 1.0;
    for (round, &winner) in winners.iter().enumerate() {
        let drawn = &winners[..round];
        let remaining: f64 = weights
            .iter()
            .enumerate()
            .filter(|(participant, _)| !drawn.contains(participant))
            .map(|(_, &weight)| weight)
            .sum();
        if remaining > 0.0 {
            prob *= weights[winner] / remaining;
        } else if (0..weights.len()).find(|participant| !drawn.contains(participant))
            != Some(winner)
        {
            return 0.0;
        }
    }
    prob
}

/// Accrues the sequence's probability against every bypassed non-winner. A non-winner is
/// skipped once for each winner of higher original index. `bitmap` holds winner membership,
/// as left behind by the distinctness check.
fn accumulate_skips(winners: &[usize], bitmap: &[bool], prob: f64, skipped: &mut Matrix<f64>) {
    for participant in 0..bitmap.len() {
        if bitmap[participant] {
            continue;
        }
        let skip_count = winners
            .iter()
            .filter(|&&winner| winner > participant)
            .count();
        skipped[(participant, skip_count)] += prob;
    }
}
