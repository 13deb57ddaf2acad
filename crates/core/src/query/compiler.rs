//! Query compiler: free text to structured filters.

use tracing::debug;

use super::extractors::{
    extract_experience, extract_locations, extract_role_type, extract_skills,
    extract_work_arrangement,
};
use super::tables::is_remote_alias;
use super::terms::capitalize;
use super::types::{ExtractedComponents, ParsedQuery, QueryFilters, WorkArrangement};
use crate::metrics;

/// Maximum skills mentioned in the synthesized description.
const DESCRIPTION_SKILLS: usize = 5;

// Confidence weights, in hundredths.
const WEIGHT_EXPERIENCE: u32 = 20;
const WEIGHT_SKILLS: u32 = 30;
const WEIGHT_LOCATIONS: u32 = 20;
const WEIGHT_ARRANGEMENT: u32 = 15;
const WEIGHT_ROLE: u32 = 15;
const BONUS_DESCRIPTION: u32 = 10;
const LOW_CONFIDENCE: u32 = 50;

pub const SUGGEST_EXPERIENCE: &str =
    "Consider specifying experience level (e.g., 'senior', '3+ years')";
pub const SUGGEST_SKILLS: &str = "Add specific skills or technologies (e.g., 'Python', 'React')";
pub const SUGGEST_LOCATION: &str = "Specify location preference or mention 'remote OK'";
pub const SUGGEST_SPECIFIC: &str = "Try a more specific query for better results";

/// Compile a natural-language hiring query.
///
/// Pure and deterministic: the same input always yields the same result.
pub fn parse_query(query: &str) -> ParsedQuery {
    let trimmed = query.trim();
    let lower = trimmed.to_lowercase();

    let experience = extract_experience(&lower);
    let skills = extract_skills(&lower);
    let locations = extract_locations(&lower, trimmed);
    let work_arrangement = extract_work_arrangement(&lower);
    let role_type = extract_role_type(&lower);

    let remote_ok = work_arrangement == Some(WorkArrangement::Remote);
    let filters = QueryFilters {
        min_experience: experience.min_years,
        required_skills: skills.clone(),
        location: locations.first().cloned().unwrap_or_default(),
        remote_ok,
    };

    let components = ExtractedComponents {
        experience_level: experience.level,
        skills,
        locations,
        work_arrangement,
        role_type,
    };

    let job_description = build_job_description(&components, &filters);
    let points = confidence_points(&components, !job_description.is_empty());
    let suggestions = build_suggestions(&components, &filters, points);
    let confidence_score = f64::from(points) / 100.0;

    metrics::QUERY_CONFIDENCE
        .with_label_values(&[])
        .observe(confidence_score);
    debug!(
        query = %trimmed,
        confidence = confidence_score,
        skills = components.skills.len(),
        locations = components.locations.len(),
        "Compiled query"
    );

    ParsedQuery {
        original_query: query.to_string(),
        job_description,
        filters,
        extracted_components: components,
        confidence_score,
        suggestions,
    }
}

/// Synthesize a canonical job description from the extracted facts.
fn build_job_description(components: &ExtractedComponents, filters: &QueryFilters) -> String {
    let mut clauses = Vec::new();

    match (components.role_type, components.experience_level) {
        (Some(role), Some(level)) => clauses.push(format!("looking for a {} {}", level, role)),
        (Some(role), None) => clauses.push(format!("looking for a {}", role)),
        (None, Some(level)) => clauses.push(format!("looking for a {} professional", level)),
        (None, None) => {}
    }

    if !components.skills.is_empty() {
        let top: Vec<&str> = components
            .skills
            .iter()
            .take(DESCRIPTION_SKILLS)
            .map(String::as_str)
            .collect();
        clauses.push(format!("with expertise in {}", top.join(", ")));
    }

    // Remote spellings in the location list are covered by the remote clause
    let place = components
        .locations
        .iter()
        .find(|location| !is_remote_alias(location));
    match (place, filters.remote_ok) {
        (Some(place), true) => clauses.push(format!("located in {} or remote", place)),
        (Some(place), false) => clauses.push(format!("located in {}", place)),
        (None, true) => clauses.push("open to remote work".to_string()),
        (None, false) => {}
    }

    if let Some(years) = filters.min_experience.filter(|years| *years > 0) {
        clauses.push(format!("minimum {} years of experience required", years));
    }

    if clauses.is_empty() {
        return String::new();
    }

    let sentences: Vec<String> = clauses.iter().map(|c| capitalize(c)).collect();
    format!("{}.", sentences.join(". "))
}

fn confidence_points(components: &ExtractedComponents, has_description: bool) -> u32 {
    let mut points = 0;
    if components.experience_level.is_some() {
        points += WEIGHT_EXPERIENCE;
    }
    if !components.skills.is_empty() {
        points += WEIGHT_SKILLS;
    }
    if !components.locations.is_empty() {
        points += WEIGHT_LOCATIONS;
    }
    if components.work_arrangement.is_some() {
        points += WEIGHT_ARRANGEMENT;
    }
    if components.role_type.is_some() {
        points += WEIGHT_ROLE;
    }
    if has_description {
        points += BONUS_DESCRIPTION;
    }
    points.min(100)
}

fn build_suggestions(
    components: &ExtractedComponents,
    filters: &QueryFilters,
    points: u32,
) -> Vec<String> {
    let mut suggestions = Vec::new();
    if components.experience_level.is_none() {
        suggestions.push(SUGGEST_EXPERIENCE.to_string());
    }
    if components.skills.is_empty() {
        suggestions.push(SUGGEST_SKILLS.to_string());
    }
    if components.locations.is_empty() && !filters.remote_ok {
        suggestions.push(SUGGEST_LOCATION.to_string());
    }
    if points < LOW_CONFIDENCE {
        suggestions.push(SUGGEST_SPECIFIC.to_string());
    }
    suggestions
}
