//! Keyword analysis of a job description.
//!
//! Runs without any network access. Used directly when AI analysis is off
//! and as the fallback when it fails.

use once_cell::sync::Lazy;
use regex_lite::Regex;

use super::types::{
    AnalysisMethod, JobAnalysis, JobDetails, JobRequirements, Recommendations, TextMetrics,
};
use crate::query::terms::{contains_any, contains_term};
use crate::query::{extract_work_arrangement, WorkArrangement};

pub const KEYWORD_NOTE: &str = "Analysis based on keyword matching - AI features limited";

const MAX_RESPONSIBILITIES: usize = 4;

/// Skill reported, and the spellings that imply it.
static JOB_SKILLS: &[(&str, &[&str])] = &[
    ("Python", &["python", "django", "flask", "fastapi"]),
    (
        "JavaScript",
        &["javascript", "js", "node.js", "react", "angular", "vue"],
    ),
    ("Java", &["java", "spring", "hibernate"]),
    (
        "Machine Learning",
        &[
            "machine learning",
            "ml",
            "ai",
            "artificial intelligence",
            "tensorflow",
            "pytorch",
            "scikit-learn",
        ],
    ),
    (
        "Data Science",
        &["data science", "data analysis", "pandas", "numpy", "matplotlib"],
    ),
    ("SQL", &["sql", "mysql", "postgresql", "database"]),
    ("AWS", &["aws", "amazon web services", "ec2", "s3"]),
    ("Docker", &["docker", "kubernetes", "containers"]),
    ("Git", &["git", "github", "version control"]),
];

static SENIOR_TERMS: &[&str] = &["senior", "lead", "principal", "architect", "staff"];
static ENTRY_TERMS: &[&str] = &["junior", "entry", "graduate", "intern", "associate"];
static MANAGEMENT_TERMS: &[&str] = &["director", "manager", "head of"];

static INDUSTRIES: &[(&str, &[&str])] = &[
    ("finance", &["finance", "banking", "fintech"]),
    ("healthcare", &["healthcare", "medical", "biotech"]),
    ("retail", &["retail", "e-commerce", "shopping"]),
];

static JOB_TYPES: &[(&str, &[&str])] = &[
    ("contract", &["contract", "contractor", "freelance"]),
    ("part-time", &["part-time", "part time"]),
    ("internship", &["internship"]),
];

/// Word stems that signal a responsibility, in report order.
static RESPONSIBILITIES: &[(&[&str], &str)] = &[
    (&["develop", "build"], "Software development and implementation"),
    (&["design"], "System design and architecture"),
    (&["test", "qa"], "Testing and quality assurance"),
    (&["collaborat", "team"], "Team collaboration and communication"),
    (&["maintain", "maintenance"], "System maintenance and support"),
];

static EXPERIENCE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(\d+)\+?\s*(?:years?|yrs?)\s*(?:of\s*)?experience",
        r"minimum\s*(?:of\s*)?(\d+)\s*(?:years?|yrs?)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid experience pattern"))
    .collect()
});

/// Analyse a job description by keyword matching alone.
pub fn keyword_analysis(job_description: &str) -> JobAnalysis {
    let lower = job_description.to_lowercase();

    let required_skills: Vec<String> = JOB_SKILLS
        .iter()
        .filter(|(_, spellings)| contains_any(&lower, spellings))
        .map(|(skill, _)| skill.to_string())
        .collect();
    let min_experience_years = min_experience(&lower);
    let job_level = job_level(&lower);
    let arrangement = extract_work_arrangement(&lower);

    let requirements = JobRequirements {
        required_skills,
        min_experience_years,
        education_level: education_level(&lower).to_string(),
        job_level: job_level.to_string(),
    };

    let analysis = JobDetails {
        job_type: first_hit(&lower, JOB_TYPES).unwrap_or("full-time").to_string(),
        industry: first_hit(&lower, INDUSTRIES).unwrap_or("technology").to_string(),
        remote_work: remote_work_label(arrangement).to_string(),
    };

    let key_responsibilities = RESPONSIBILITIES
        .iter()
        .filter(|(stems, _)| stems.iter().any(|stem| mentions_stem(&lower, stem)))
        .map(|(_, label)| label.to_string())
        .take(MAX_RESPONSIBILITIES)
        .collect();

    let recommendations = Recommendations {
        for_candidates: candidate_tips(&requirements),
        for_recruiters: recruiter_tips(&lower, arrangement),
    };

    JobAnalysis {
        requirements,
        analysis,
        key_responsibilities,
        recommendations,
        metrics: text_metrics(job_description),
        method: AnalysisMethod::Keyword,
        ai_powered: false,
        note: Some(KEYWORD_NOTE.to_string()),
        error: None,
        llm_usage: None,
    }
}

/// Word, sentence and completeness counts.
pub fn text_metrics(job_description: &str) -> TextMetrics {
    let word_count = job_description.split_whitespace().count();
    let sentence_count = job_description
        .split('.')
        .filter(|s| !s.trim().is_empty())
        .count();
    TextMetrics {
        word_count,
        sentence_count,
        reading_level: "medium".to_string(),
        completeness_score: (word_count / 2).min(100) as u32,
    }
}

fn remote_work_label(arrangement: Option<WorkArrangement>) -> &'static str {
    match arrangement {
        Some(WorkArrangement::Remote) => "remote",
        Some(WorkArrangement::Hybrid) => "hybrid",
        Some(WorkArrangement::Onsite) | None => "on-site",
    }
}

fn min_experience(lower: &str) -> u32 {
    EXPERIENCE_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(lower))
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

fn job_level(lower: &str) -> &'static str {
    if contains_any(lower, SENIOR_TERMS) {
        "senior"
    } else if contains_any(lower, ENTRY_TERMS) {
        "entry"
    } else if contains_any(lower, MANAGEMENT_TERMS) {
        "management"
    } else {
        "mid"
    }
}

fn education_level(lower: &str) -> &'static str {
    if contains_any(lower, &["phd", "ph.d", "doctorate"]) {
        "phd"
    } else if contains_any(lower, &["master", "msc", "mba"]) {
        "master"
    } else if contains_any(lower, &["bachelor", "degree", "bsc"]) {
        "bachelor"
    } else {
        "not specified"
    }
}

fn first_hit(lower: &str, table: &[(&'static str, &[&str])]) -> Option<&'static str> {
    table
        .iter()
        .find(|(_, terms)| contains_any(lower, terms))
        .map(|(label, _)| *label)
}

/// True if some word in `lower` starts with `stem`.
fn mentions_stem(lower: &str, stem: &str) -> bool {
    lower
        .split(|c: char| !c.is_alphanumeric())
        .any(|word| word.starts_with(stem))
}

fn candidate_tips(requirements: &JobRequirements) -> Vec<String> {
    let skills = if requirements.required_skills.is_empty() {
        "Focus on relevant technical skills".to_string()
    } else {
        let top: Vec<&str> = requirements
            .required_skills
            .iter()
            .take(3)
            .map(String::as_str)
            .collect();
        format!("Highlight experience with {} in your resume", top.join(", "))
    };
    let experience = if requirements.min_experience_years > 0 {
        format!(
            "Emphasize {}+ years of experience",
            requirements.min_experience_years
        )
    } else {
        "Highlight relevant project experience".to_string()
    };
    vec![
        skills,
        experience,
        format!("Position yourself for a {}-level role", requirements.job_level),
    ]
}

fn recruiter_tips(lower: &str, arrangement: Option<WorkArrangement>) -> Vec<String> {
    let mut tips = Vec::new();
    if !contains_any(lower, &["salary", "compensation", "pay"]) && !lower.contains('$') {
        tips.push("Consider adding salary range to attract more candidates".to_string());
    }
    if arrangement.is_none() {
        tips.push("Specify remote work policy clearly".to_string());
    }
    if !contains_term(lower, "project") {
        tips.push("Include specific project examples in the job description".to_string());
    }
    tips
}
