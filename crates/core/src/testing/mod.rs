//! Testing utilities and mock implementations.
//!
//! Lets the ranking engine run end to end without a real text-generation
//! service.
//!
//! # Example
//!
//! ```rust,ignore
//! use hiresift_core::testing::{fixtures, MockLlmClient};
//!
//! let client = Arc::new(MockLlmClient::new());
//! let scorer = AiScorer::new(client.clone());
//! let pool = fixtures::sample_pool();
//! ```

mod mock_llm;

pub use mock_llm::{MockLlmClient, MockReply};

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::candidate::Candidate;

    /// Well-formed AI score response with every sub-score equal to `score`.
    pub fn score_json(score: u32) -> String {
        format!(
            r#"{{"match_score": {s}, "skill_match": {s}, "experience_match": {s}, "location_match": {s}, "match_reasons": ["Solid background"], "concerns": []}}"#,
            s = score
        )
    }

    /// Well-formed AI job analysis response.
    pub fn job_analysis_json() -> String {
        r#"{"requirements": {"required_skills": ["Python", "SQL", "Airflow"], "min_experience_years": 5, "education_level": "bachelor", "job_level": "senior"}, "analysis": {"job_type": "full-time", "industry": "technology", "remote_work": "remote"}, "key_responsibilities": ["Build data pipelines"], "recommendations": {"for_candidates": ["Show pipeline work"], "for_recruiters": ["List the data stack"]}}"#
            .to_string()
    }

    /// Create a candidate with the fields scoring looks at.
    pub fn candidate(
        id: &str,
        name: &str,
        skills: &[&str],
        experience_years: u32,
        location: &str,
    ) -> Candidate {
        Candidate::new(id, name)
            .with_skills(skills.iter().copied())
            .with_experience_years(experience_years)
            .with_location(location)
    }

    /// A small, varied candidate pool.
    pub fn sample_pool() -> Vec<Candidate> {
        vec![
            candidate("1", "Ada Lovelace", &["Python", "Machine Learning", "SQL"], 7, "London, UK")
                .with_summary("ML engineer building recommendation systems."),
            candidate("2", "Linus Torvalds", &["C", "Linux", "Git"], 25, "Portland, OR"),
            candidate("3", "Grace Hopper", &["Python", "JavaScript", "React"], 3, "New York, NY"),
            candidate("4", "Alan Turing", &["Python", "TensorFlow"], 1, "Remote"),
            candidate("5", "Margaret Hamilton", &["Java", "AWS", "Docker"], 10, "Boston, MA"),
            candidate("6", "Dennis Ritchie", &[], 0, ""),
        ]
    }
}
