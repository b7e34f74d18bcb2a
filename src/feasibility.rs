//! Gates exhaustive odds computation. Exact enumeration visits on the order of
//! `N^num_to_pick` ordered winner selections (counted before distinct-index filtering, a
//! deliberately conservative bound); beyond a threshold the cost is better spent on
//! simulation.

/// Upper bound on the enumeration workload before exact computation is declared infeasible.
/// A tunable: the default is sized so that a 14-participant, 4-pick lottery computes in
/// well under a second, while an 18-participant, 6-pick one does not qualify.
pub const DEFAULT_EXACT_LIMIT: f64 = 1e7;

/// Estimated workload of exact enumeration: the number of ordered winner selections,
/// `N^num_to_pick`.
pub fn exact_workload(participants: usize, num_to_pick: usize) -> f64 {
    (participants as f64).powi(num_to_pick as i32)
}

/// Whether exact enumeration is tractable under the given workload `limit`.
pub fn is_exact_feasible_within(participants: usize, num_to_pick: usize, limit: f64) -> bool {
    exact_workload(participants, num_to_pick) < limit
}

/// Whether exact enumeration is tractable under [`DEFAULT_EXACT_LIMIT`]. Callers wanting a
/// voluntarily slow, exact computation bypass the gate with a force flag at the engine
/// level.
pub fn is_exact_feasible(participants: usize, num_to_pick: usize) -> bool {
    is_exact_feasible_within(participants, num_to_pick, DEFAULT_EXACT_LIMIT)
}
