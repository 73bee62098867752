/// EIG-maximizing question selection.
///
/// Recomputes every candidate's expected information gain against the
/// current belief on every call — O(M·N) for M remaining candidates over an
/// N-point grid, both in the tens. Nothing is cached: a stale EIG computed
/// against a pre-update belief would quietly pick the wrong question.
use std::collections::HashSet;

use crate::error::EstimatorError;
use crate::estimator::AbilityEstimator;
use crate::types::{QuestionCandidate, Selection};

/// Pick the unanswered candidate with the highest expected information gain.
///
/// Returns `Ok(None)` when every candidate has already been answered —
/// running out of questions is an expected condition, not an error.
///
/// Ties are broken deterministically by pool order: the strict `>` scan
/// keeps the first candidate that reaches the maximal EIG, which makes
/// simulations and replays reproducible.
pub fn select_next_question(
    estimator: &AbilityEstimator,
    pool: &[QuestionCandidate],
    answered_ids: &HashSet<i64>,
) -> Result<Option<Selection>, EstimatorError> {
    let mut best: Option<Selection> = None;

    for candidate in pool {
        if answered_ids.contains(&candidate.id) {
            continue;
        }
        let eig = estimator.expected_information_gain(candidate.difficulty)?;
        match best {
            Some(ref current) if eig <= current.eig => {}
            _ => best = Some(Selection { candidate: *candidate, eig }),
        }
    }

    Ok(best)
}
