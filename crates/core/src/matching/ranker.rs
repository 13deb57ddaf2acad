//! Final ordering of scored candidates.

use crate::matching::types::ScoredCandidate;

/// Order best first by `match_score`.
///
/// The sort is stable, so ties keep their input order.
pub fn rank(mut scored: Vec<ScoredCandidate>) -> Vec<ScoredCandidate> {
    scored.sort_by(|a, b| b.score.match_score.cmp(&a.score.match_score));
    scored
}
