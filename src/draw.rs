//! A single weighted draft lottery draw: sampling without replacement from a shrinking pool
//! of participants, with the unsampled remainder appended in original order.

use tinyrand::Rand;

/// Replacement for a negative or non-finite weight. Minimal but strictly positive, so a
/// sanitised participant retains a nonzero selection probability without perturbing anyone
/// else's odds measurably.
pub const MIN_WEIGHT: f64 = f64::MIN_POSITIVE;

/// Returns a copy of `weights` with every negative or non-finite entry replaced by
/// [`MIN_WEIGHT`]. Zero weights are preserved.
pub fn sanitise_weights(weights: &[f64]) -> Vec<f64> {
    weights
        .iter()
        .map(|&weight| {
            if weight.is_finite() && weight >= 0.0 {
                weight
            } else {
                MIN_WEIGHT
            }
        })
        .collect()
}

/// Performs one draw over pre-sanitised `weights`, writing the resulting order of
/// participant indices into `order`. The first `num_to_pick` slots are filled by weighted
/// sampling without replacement; the rest inherit the untaken participants in their original
/// relative order. `order` and `taken` are caller-supplied scratch, both of the participant
/// count in length; `num_to_pick` must not exceed it.
pub fn run_once(
    weights: &[f64],
    num_to_pick: usize,
    order: &mut [usize],
    taken: &mut [bool],
    rand: &mut impl Rand,
) {
    debug_assert_eq!(weights.len(), order.len());
    debug_assert_eq!(weights.len(), taken.len());
    debug_assert!(num_to_pick <= weights.len());

    let participants = weights.len();
    taken.fill(false);
    for slot in 0..num_to_pick {
        // summed afresh each slot; a running decrement drifts, and an exhausted pool
        // must read exactly zero
        let remaining: f64 = weights
            .iter()
            .zip(taken.iter())
            .filter(|(_, &is_taken)| !is_taken)
            .map(|(&weight, _)| weight)
            .sum();
        let random = random_f64(rand) * remaining;
        let mut cumulative = 0.0;
        let mut selected = None;
        let mut last_alive = 0;
        for participant in 0..participants {
            if !taken[participant] {
                last_alive = participant;
                cumulative += weights[participant];
                if cumulative >= random {
                    selected = Some(participant);
                    break;
                }
            }
        }
        // rounding in `random` can leave the scan unsatisfied
        let selected = selected.unwrap_or(last_alive);
        order[slot] = selected;
        taken[selected] = true;
    }

    let mut slot = num_to_pick;
    for participant in 0..participants {
        if !taken[participant] {
            order[slot] = participant;
            slot += 1;
        }
    }
}

/// Runs one full lottery draw, returning a permutation of `0..weights.len()`. Weights are
/// sanitised and `num_to_pick` clamped, so any input yields a valid permutation.
pub fn draw_once(weights: &[f64], num_to_pick: usize, rand: &mut impl Rand) -> Vec<usize> {
    let weights = sanitise_weights(weights);
    let num_to_pick = num_to_pick.min(weights.len());
    let mut order = vec![0; weights.len()];
    let mut taken = vec![false; weights.len()];
    run_once(&weights, num_to_pick, &mut order, &mut taken, rand);
    order
}

#[inline]
pub(crate) fn random_f64(rand: &mut impl Rand) -> f64 {
    rand.next_u64() as f64 / u64::MAX as f64
}
