//! Hard filters applied before scoring on the basic search path.

use serde_json::Value;

use crate::candidate::Candidate;
use crate::matching::types::MatchError;
use crate::query::QueryFilters;

/// Keep candidates passing every present filter.
///
/// Skills use OR semantics: one shared skill (trimmed, case-insensitive) is
/// enough. Skill coverage is weighted again during scoring.
pub fn apply_filters(candidates: &[Candidate], filters: &QueryFilters) -> Vec<Candidate> {
    let min_experience = filters.min_experience.filter(|&years| years > 0);

    let wanted_skills: Vec<String> = filters
        .required_skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    let location = filters.location.trim().to_lowercase();

    candidates
        .iter()
        .filter(|c| min_experience.map_or(true, |min| c.experience_years >= min))
        .filter(|c| {
            wanted_skills.is_empty()
                || c.skills
                    .iter()
                    .any(|s| wanted_skills.contains(&s.trim().to_lowercase()))
        })
        .filter(|c| location.is_empty() || c.location.to_lowercase().contains(&location))
        .cloned()
        .collect()
}

/// Decode caller-supplied filters, rejecting wrongly-typed or unknown fields.
///
/// `null` means no filters.
pub fn filters_from_value(value: Value) -> Result<QueryFilters, MatchError> {
    if value.is_null() {
        return Ok(QueryFilters::default());
    }
    serde_json::from_value(value).map_err(|e| MatchError::InvalidFilter(e.to_string()))
}
