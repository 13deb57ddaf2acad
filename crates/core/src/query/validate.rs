use super::tables::{INTENT_WORDS, QUERY_EXAMPLES, SKILL_FAMILIES};
use super::terms::contains_any;
use super::types::QueryValidation;

pub const MIN_QUERY_LEN: usize = 3;
pub const MAX_QUERY_LEN: usize = 500;

/// Caller-side validity window for natural-language queries.
///
/// The compiler itself accepts anything; this is what the HTTP layer checks
/// before invoking it.
pub fn validate_query(query: &str) -> QueryValidation {
    let trimmed = query.trim();
    let len = trimmed.chars().count();

    if len < MIN_QUERY_LEN {
        return QueryValidation::invalid("Query too short");
    }
    if len > MAX_QUERY_LEN {
        return QueryValidation::invalid(format!(
            "Query too long (max {} characters)",
            MAX_QUERY_LEN
        ));
    }

    let lower = trimmed.to_lowercase();
    let has_intent = contains_any(&lower, INTENT_WORDS);
    let has_tech = SKILL_FAMILIES
        .iter()
        .any(|family| family.matches(&lower));

    if !has_intent && !has_tech {
        return QueryValidation::invalid("Query should describe what you're looking for");
    }

    QueryValidation::ok()
}

/// Example queries for user guidance.
pub fn query_examples() -> &'static [&'static str] {
    QUERY_EXAMPLES
}
