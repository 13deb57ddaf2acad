//! Deterministic (local) candidate scorer.
//!
//! Weighted sum of four factors: skills, experience, location and
//! seniority fit. No network access, so it always succeeds; it doubles as
//! the per-candidate fallback when AI scoring fails.

use async_trait::async_trait;

use crate::candidate::Candidate;
use crate::matching::criteria::{MatchCriteria, Seniority};
use crate::matching::traits::{Scorer, ScorerOutput, ScoringError};
use crate::matching::types::MatchScore;
use crate::query::terms::contains_term;

/// Skill pairs treated as equivalent even without substring overlap.
static SKILL_SIMILARITY: &[(&str, &[&str])] = &[
    ("javascript", &["js", "node", "node.js", "react", "angular", "vue", "typescript"]),
    ("python", &["django", "flask", "fastapi", "pandas", "numpy"]),
    (
        "machine learning",
        &["ml", "ai", "tensorflow", "pytorch", "scikit-learn", "deep learning"],
    ),
    ("java", &["spring", "spring boot", "hibernate", "kotlin"]),
    ("react", &["react.js", "reactjs", "next.js", "redux"]),
    ("kubernetes", &["k8s", "docker", "containers"]),
    ("aws", &["amazon web services", "ec2", "s3", "lambda", "cloud"]),
    ("sql", &["mysql", "postgresql", "database", "oracle"]),
    ("c#", &[".net", "dotnet", "asp.net"]),
];

/// Places that count as interchangeable for location fit.
static REGION_GROUPS: &[(&str, &[&str])] = &[
    (
        "europe",
        &[
            "europe", "eu", "uk", "united kingdom", "london", "berlin", "paris", "amsterdam",
            "dublin", "madrid", "germany", "france", "netherlands", "ireland", "spain",
        ],
    ),
    (
        "usa",
        &[
            "usa", "united states", "america", "new york", "nyc", "san francisco", "sf",
            "bay area", "los angeles", "california", "seattle", "washington", "boston",
            "massachusetts", "austin", "texas", "denver", "colorado", "chicago", "illinois",
            "atlanta", "georgia",
        ],
    ),
    (
        "remote",
        &["remote", "anywhere", "distributed", "work from home", "wfh"],
    ),
];

/// Configuration for the deterministic scorer. Weights are percentages.
#[derive(Debug, Clone)]
pub struct DeterministicScorerConfig {
    pub skill_weight: u32,
    pub experience_weight: u32,
    pub location_weight: u32,
    pub seniority_weight: u32,
}

impl Default for DeterministicScorerConfig {
    fn default() -> Self {
        Self {
            skill_weight: 40,
            experience_weight: 30,
            location_weight: 20,
            seniority_weight: 10,
        }
    }
}

/// Local multi-factor scorer.
#[derive(Debug, Clone, Default)]
pub struct DeterministicScorer {
    config: DeterministicScorerConfig,
}

struct SkillFit {
    score: f64,
    matched: Vec<String>,
    missing: Vec<String>,
}

impl DeterministicScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DeterministicScorerConfig) -> Self {
        Self { config }
    }

    /// Score one candidate. Infallible.
    pub fn score_candidate(&self, candidate: &Candidate, criteria: &MatchCriteria) -> MatchScore {
        let mut reasons = Vec::new();
        let mut concerns = Vec::new();

        let skills = self.skill_fit(candidate, criteria);
        if !skills.matched.is_empty() {
            reasons.push(format!(
                "Matches {}/{} required skills: {}",
                skills.matched.len(),
                criteria.required_skills.len(),
                first_three(&skills.matched)
            ));
        }
        if !skills.missing.is_empty() {
            concerns.push(format!("Missing skills: {}", first_three(&skills.missing)));
        }

        let experience = experience_score(candidate.experience_years, criteria.min_experience);
        let years = candidate.experience_years;
        match required_years(criteria.min_experience) {
            Some(min) if years > min => reasons.push(format!(
                "{} years of experience, {} above the {} required",
                years,
                years - min,
                min
            )),
            Some(min) if years == min => {
                reasons.push(format!("Meets the {} year experience requirement", min))
            }
            Some(min) => concerns.push(format!(
                "{} years of experience, {} required",
                years, min
            )),
            None if years > 0 => reasons.push(format!("{} years of experience", years)),
            None => {}
        }

        let location = location_score(&candidate.location, criteria);
        if location >= 100.0 {
            if criteria.remote_ok {
                reasons.push("Remote work accepted for this role".to_string());
            } else {
                reasons.push("Available for remote work".to_string());
            }
        } else if location >= 95.0 {
            reasons.push(format!("Located in {}", candidate.location.trim()));
        } else if location < 80.0 {
            let wanted = criteria.locations.first().map(String::as_str).unwrap_or("");
            if candidate.location.trim().is_empty() {
                concerns.push(format!("No location on profile (wanted {})", wanted));
            } else {
                concerns.push(format!(
                    "Located in {} (wanted {})",
                    candidate.location.trim(),
                    wanted
                ));
            }
        }

        let seniority = seniority_score(years, criteria.seniority);

        let weighted = skills.score * f64::from(self.config.skill_weight)
            + experience * f64::from(self.config.experience_weight)
            + location * f64::from(self.config.location_weight)
            + seniority * f64::from(self.config.seniority_weight);
        let total_weight = self.config.skill_weight
            + self.config.experience_weight
            + self.config.location_weight
            + self.config.seniority_weight;
        let match_score = if total_weight == 0 {
            0
        } else {
            to_points(weighted / f64::from(total_weight))
        };

        MatchScore::new(
            match_score,
            to_points(skills.score),
            to_points(experience),
            to_points(location),
            reasons,
            concerns,
        )
    }

    fn skill_fit(&self, candidate: &Candidate, criteria: &MatchCriteria) -> SkillFit {
        let required: Vec<&String> = criteria
            .required_skills
            .iter()
            .filter(|s| !s.trim().is_empty())
            .collect();
        if required.is_empty() {
            return SkillFit {
                score: 70.0,
                matched: Vec::new(),
                missing: Vec::new(),
            };
        }

        let candidate_skills = candidate.skills_lower();
        let (matched, missing): (Vec<String>, Vec<String>) = required
            .iter()
            .map(|s| s.to_string())
            .partition(|req| {
                let req = req.trim().to_lowercase();
                candidate_skills.iter().any(|have| skills_related(have.trim(), &req))
            });

        let coverage = matched.len() as f64 / required.len() as f64 * 100.0;
        let breadth = candidate.skills.len().saturating_sub(required.len()) as f64 * 5.0;

        SkillFit {
            score: (coverage + breadth).min(100.0),
            matched,
            missing,
        }
    }
}

#[async_trait]
impl Scorer for DeterministicScorer {
    fn name(&self) -> &str {
        "deterministic"
    }

    async fn score(
        &self,
        candidate: &Candidate,
        _job_description: &str,
        criteria: &MatchCriteria,
    ) -> Result<ScorerOutput, ScoringError> {
        Ok(ScorerOutput {
            score: self.score_candidate(candidate, criteria),
            llm_usage: None,
        })
    }
}

/// Substring either way, or a known synonym pair. Inputs lower-cased.
fn skills_related(have: &str, want: &str) -> bool {
    if have.is_empty() || want.is_empty() {
        return false;
    }
    if have.contains(want) || want.contains(have) {
        return true;
    }
    SKILL_SIMILARITY.iter().any(|(base, similar)| {
        (*base == want && similar.contains(&have)) || (*base == have && similar.contains(&want))
    })
}

/// A minimum of zero means no requirement.
fn required_years(min_experience: Option<u32>) -> Option<u32> {
    min_experience.filter(|min| *min > 0)
}

fn experience_score(years: u32, min_experience: Option<u32>) -> f64 {
    match required_years(min_experience) {
        None => 80.0,
        Some(min) if years >= min => (80.0 + f64::from(years - min) * 5.0).min(100.0),
        Some(min) => (f64::from(years) / f64::from(min) * 70.0).max(20.0),
    }
}

fn location_score(candidate_location: &str, criteria: &MatchCriteria) -> f64 {
    let have = candidate_location.trim().to_lowercase();
    if criteria.remote_ok || have.contains("remote") {
        return 100.0;
    }

    let wanted: Vec<String> = criteria
        .locations
        .iter()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();
    if wanted.is_empty() {
        return 80.0;
    }
    if have.is_empty() {
        return 40.0;
    }

    let matches = wanted.iter().any(|want| {
        contains_term(&have, want) || contains_term(want, &have) || same_region(&have, want)
    });
    if matches {
        95.0
    } else {
        40.0
    }
}

fn same_region(a: &str, b: &str) -> bool {
    REGION_GROUPS.iter().any(|(_, places)| {
        let in_group = |text: &str| places.iter().any(|p| contains_term(text, p));
        in_group(a) && in_group(b)
    })
}

fn seniority_score(years: u32, seniority: Option<Seniority>) -> f64 {
    let Some(seniority) = seniority else {
        return 80.0;
    };
    let (min, max) = seniority.year_range();
    if years < min {
        50.0
    } else if years > max {
        75.0
    } else {
        90.0
    }
}

/// Floor to a whole 0-100 score, absorbing float noise just below an integer.
fn to_points(value: f64) -> u32 {
    (value + 1e-9).floor().clamp(0.0, 100.0) as u32
}

fn first_three(items: &[String]) -> String {
    items.iter().take(3).cloned().collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::types::OverallFit;

    fn criteria(skills: &[&str], min: Option<u32>, locations: &[&str]) -> MatchCriteria {
        MatchCriteria {
            required_skills: skills.iter().map(|s| s.to_string()).collect(),
            min_experience: min,
            locations: locations.iter().map(|s| s.to_string()).collect(),
            remote_ok: false,
            seniority: None,
        }
    }

    fn candidate(skills: &[&str], years: u32, location: &str) -> Candidate {
        Candidate::new("c", "Test")
            .with_skills(skills.iter().copied())
            .with_experience_years(years)
            .with_location(location)
    }

    #[test]
    fn test_skill_score_no_requirements() {
        let scorer = DeterministicScorer::new();
        let fit = scorer.skill_fit(&candidate(&["Go"], 3, ""), &criteria(&[], None, &[]));
        assert_eq!(fit.score, 70.0);
    }

    #[test]
    fn test_skill_score_partial_and_breadth() {
        let scorer = DeterministicScorer::new();
        // 1 of 2 matched = 50, candidate has 4 skills vs 2 required = +10
        let fit = scorer.skill_fit(
            &candidate(&["Python", "Docker", "Git", "Bash"], 3, ""),
            &criteria(&["python", "Rust"], None, &[]),
        );
        assert_eq!(fit.score, 60.0);
        assert_eq!(fit.matched, vec!["python"]);
        assert_eq!(fit.missing, vec!["Rust"]);
    }

    #[test]
    fn test_skill_score_capped() {
        let scorer = DeterministicScorer::new();
        let fit = scorer.skill_fit(
            &candidate(&["Python", "A", "B", "C"], 3, ""),
            &criteria(&["Python"], None, &[]),
        );
        assert_eq!(fit.score, 100.0);
    }

    #[test]
    fn test_skills_related() {
        assert!(skills_related("react.js", "react"));
        assert!(skills_related("js", "javascript"));
        assert!(skills_related("javascript", "node"));
        assert!(skills_related("spring boot", "java"));
        assert!(!skills_related("rust", "python"));
        assert!(!skills_related("", "python"));
    }

    #[test]
    fn test_experience_score() {
        assert_eq!(experience_score(3, None), 80.0);
        assert_eq!(experience_score(3, Some(0)), 80.0);
        assert_eq!(experience_score(5, Some(5)), 80.0);
        assert_eq!(experience_score(7, Some(5)), 90.0);
        assert_eq!(experience_score(20, Some(5)), 100.0);
        assert_eq!(experience_score(0, Some(5)), 20.0);
        assert_eq!(to_points(experience_score(4, Some(5))), 56);
    }

    #[test]
    fn test_experience_monotone_toward_minimum() {
        let mut previous = 0.0;
        for years in 0..=8 {
            let score = experience_score(years, Some(8));
            assert!(score >= previous, "years={years}");
            previous = score;
        }
    }

    #[test]
    fn test_location_score() {
        let mut c = criteria(&[], None, &[]);
        assert_eq!(location_score("Boston", &c), 80.0);
        assert_eq!(location_score("Remote (EU)", &c), 100.0);

        c.locations = vec!["Boston".to_string()];
        assert_eq!(location_score("Boston, MA", &c), 95.0);
        assert_eq!(location_score("New York", &c), 95.0); // both in the usa group
        assert_eq!(location_score("Berlin", &c), 40.0);
        assert_eq!(location_score("", &c), 40.0);

        c.remote_ok = true;
        assert_eq!(location_score("Berlin", &c), 100.0);
    }

    #[test]
    fn test_location_short_alias_needs_whole_word() {
        let c = MatchCriteria::from_parsed(&crate::query::parse_query("Python developers in LA"));
        assert!(c.locations.contains(&"LA".to_string()));

        assert_eq!(location_score("Milan, Italy", &c), 40.0);
        assert_eq!(location_score("Portland, OR", &c), 40.0);
        assert_eq!(location_score("Berlin", &c), 40.0);
        assert_eq!(location_score("Los Angeles, CA", &c), 95.0);
        assert_eq!(location_score("LA", &c), 95.0);
    }

    #[test]
    fn test_region_groups() {
        assert!(same_region("london, uk", "berlin"));
        assert!(!same_region("london", "austin"));
        // "us" is not an alias, so it does not capture "austin" or "business"
        assert!(!same_region("business park", "austin"));
    }

    #[test]
    fn test_seniority_score() {
        assert_eq!(seniority_score(3, None), 80.0);
        assert_eq!(seniority_score(1, Some(Seniority::Entry)), 90.0);
        assert_eq!(seniority_score(2, Some(Seniority::Entry)), 90.0);
        assert_eq!(seniority_score(3, Some(Seniority::Entry)), 75.0);
        assert_eq!(seniority_score(4, Some(Seniority::Senior)), 50.0);
        assert_eq!(seniority_score(15, Some(Seniority::Lead)), 90.0);
    }

    #[test]
    fn test_full_score() {
        let scorer = DeterministicScorer::new();
        let mut c = criteria(&["Python", "AWS"], Some(5), &["San Francisco"]);
        c.seniority = Some(Seniority::Senior);
        let score = scorer.score_candidate(
            &candidate(&["Python", "AWS"], 7, "San Francisco, CA"),
            &c,
        );

        // skills 100*0.4 + exp 90*0.3 + loc 95*0.2 + seniority 90*0.1 = 95
        assert_eq!(score.match_score, 95);
        assert_eq!(score.skill_match, 100);
        assert_eq!(score.experience_match, 90);
        assert_eq!(score.location_match, 95);
        assert_eq!(score.overall_fit, OverallFit::Excellent);
        assert_eq!(
            score.match_reasons,
            vec![
                "Matches 2/2 required skills: Python, AWS",
                "7 years of experience, 2 above the 5 required",
                "Located in San Francisco, CA",
            ]
        );
        assert!(score.concerns.is_empty());
    }

    #[test]
    fn test_weak_candidate() {
        let scorer = DeterministicScorer::new();
        let score = scorer.score_candidate(
            &candidate(&["PHP"], 1, "Berlin"),
            &criteria(&["Python", "AWS"], Some(5), &["Boston"]),
        );

        // skills 0, exp 20 (14 raised to the floor), loc 40, seniority 80
        // 0*0.4 + 20*0.3 + 40*0.2 + 80*0.1 = 22
        assert_eq!(score.match_score, 22);
        assert_eq!(score.overall_fit, OverallFit::Poor);
        assert!(score.match_reasons.is_empty());
        assert_eq!(
            score.concerns,
            vec![
                "Missing skills: Python, AWS",
                "1 years of experience, 5 required",
                "Located in Berlin (wanted Boston)",
            ]
        );
    }

    #[test]
    fn test_score_is_deterministic() {
        let scorer = DeterministicScorer::new();
        let c = criteria(&["Go"], Some(2), &["Austin"]);
        let cand = candidate(&["Go", "Rust"], 4, "Austin, TX");
        assert_eq!(scorer.score_candidate(&cand, &c), scorer.score_candidate(&cand, &c));
    }

    #[tokio::test]
    async fn test_scorer_trait() {
        let scorer = DeterministicScorer::new();
        let output = scorer
            .score(&candidate(&["Go"], 4, ""), "Go developer", &criteria(&["Go"], None, &[]))
            .await
            .unwrap();
        assert!(output.llm_usage.is_none());
        assert_eq!(scorer.name(), "deterministic");
    }
}
