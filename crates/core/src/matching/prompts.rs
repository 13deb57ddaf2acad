//! Prompt text for AI candidate scoring.

use crate::candidate::Candidate;

pub const SYSTEM_PROMPT: &str =
    "You are an expert HR recruiter analyzing candidate-job fit. Always respond with valid JSON.";

/// Work history entries included in the summary.
const MAX_WORK_ENTRIES: usize = 3;
/// Education entries included in the summary.
const MAX_EDUCATION_ENTRIES: usize = 2;

/// Plain-text profile embedded in the scoring prompt.
pub fn candidate_summary(candidate: &Candidate) -> String {
    let mut parts = Vec::new();

    let name = if candidate.name.trim().is_empty() {
        "Unknown"
    } else {
        candidate.name.as_str()
    };
    parts.push(format!("Name: {}", name));
    parts.push(format!("Years of Experience: {}", candidate.experience_years));

    if !candidate.skills.is_empty() {
        parts.push(format!("Skills: {}", candidate.skills.join(", ")));
    }

    if !candidate.location.trim().is_empty() {
        parts.push(format!("Location: {}", candidate.location));
    }

    if !candidate.experience.is_empty() {
        let lines: Vec<String> = candidate
            .experience
            .iter()
            .take(MAX_WORK_ENTRIES)
            .map(|e| format!("- {} at {}", e.title, e.company))
            .collect();
        parts.push(format!("Work Experience:\n{}", lines.join("\n")));
    }

    if !candidate.education.is_empty() {
        let lines: Vec<String> = candidate
            .education
            .iter()
            .take(MAX_EDUCATION_ENTRIES)
            .map(|e| format!("- {} from {}", e.degree, e.institution))
            .collect();
        parts.push(format!("Education:\n{}", lines.join("\n")));
    }

    if !candidate.summary.trim().is_empty() {
        parts.push(format!("Summary: {}", candidate.summary));
    }

    parts.join("\n\n")
}

/// User prompt asking for one JSON score object.
pub fn scoring_prompt(job_description: &str, candidate: &Candidate) -> String {
    format!(
        r#"Analyze how well this candidate matches the job requirements.

JOB DESCRIPTION:
{job}

CANDIDATE PROFILE:
{profile}

Respond with a single JSON object in this format:
{{
  "match_score": <integer from 0-100>,
  "skill_match": <integer from 0-100>,
  "experience_match": <integer from 0-100>,
  "location_match": <integer from 0-100>,
  "match_reasons": ["reason this candidate is a good or poor match", "..."],
  "concerns": ["gap or risk for this role", "..."]
}}

Be objective. Focus on technical skills, experience level, location and relevant background."#,
        job = job_description.trim(),
        profile = candidate_summary(candidate),
    )
}
