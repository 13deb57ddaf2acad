//! Lexical extractors.
//!
//! Each extractor is a pure function from query text to one typed fact.
//! None of them can fail: no match simply leaves the fact empty.

use once_cell::sync::Lazy;
use regex_lite::Regex;

use super::tables::{
    skill_family, tech_display_name, EXPERIENCE_LEVELS, HYBRID_KEYWORDS, LOCATIONS,
    ONSITE_KEYWORDS, REMOTE_KEYWORDS, ROLE_TYPES, SKILL_FAMILIES, TECH_TOKENS,
};
use super::terms::{contains_any, push_unique};
use super::types::{ExperienceLevel, RoleType, WorkArrangement};

static YEARS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\+?\s*(?:years?|yrs?)").expect("valid years pattern"));

static TECH_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let alternation = TECH_TOKENS
        .iter()
        .map(|(token, _)| *token)
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b({})\b", alternation)).expect("valid tech token pattern")
});

static CITY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bin\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*(?:,\s*[A-Z]{2})?)")
        .expect("valid city pattern")
});

/// Experience requirement found in a query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExperienceFact {
    pub level: Option<ExperienceLevel>,
    pub min_years: Option<u32>,
}

/// Seniority keyword lookup, overridden by an explicit "N years" mention.
pub fn extract_experience(text: &str) -> ExperienceFact {
    let mut fact = ExperienceFact::default();

    if let Some(entry) = EXPERIENCE_LEVELS
        .iter()
        .find(|entry| contains_any(text, entry.keywords))
    {
        fact.level = Some(entry.level);
        fact.min_years = Some(entry.min_years);
    }

    let explicit = YEARS_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok());
    if let Some(years) = explicit {
        fact.min_years = Some(years);
        fact.level = Some(ExperienceLevel::from_years(years));
    }

    fact
}

/// Skill extraction in two passes: family members, then bare technology tokens.
///
/// Order is table order followed by token order in the query; duplicates
/// (ignoring case) keep their first spelling.
pub fn extract_skills(text: &str) -> Vec<String> {
    let mut skills = Vec::new();

    for family in SKILL_FAMILIES {
        if family.matches(text) {
            for skill in family.expands_to {
                push_unique(&mut skills, skill);
            }
        }
    }

    for caps in TECH_PATTERN.captures_iter(text) {
        let Some(token) = caps.get(1) else { continue };
        let token = token.as_str().to_lowercase();
        if let Some(display) = tech_display_name(&token) {
            push_unique(&mut skills, display);
        }
        if let Some(family) = skill_family(&token) {
            for skill in family.expands_to {
                push_unique(&mut skills, skill);
            }
        }
    }

    skills
}

/// Location aliases from the lower-cased text, then "in City[, ST]" phrases
/// from the original text (the phrase pattern needs capitalisation).
pub fn extract_locations(lower: &str, original: &str) -> Vec<String> {
    let mut locations = Vec::new();

    for alias in LOCATIONS {
        if contains_any(lower, alias.triggers) {
            for spelling in alias.expands_to {
                push_unique(&mut locations, spelling);
            }
        }
    }

    for caps in CITY_PATTERN.captures_iter(original) {
        if let Some(place) = caps.get(1) {
            push_unique(&mut locations, place.as_str());
        }
    }

    locations
}

/// Remote beats hybrid beats onsite.
pub fn extract_work_arrangement(text: &str) -> Option<WorkArrangement> {
    if contains_any(text, REMOTE_KEYWORDS) {
        Some(WorkArrangement::Remote)
    } else if contains_any(text, HYBRID_KEYWORDS) {
        Some(WorkArrangement::Hybrid)
    } else if contains_any(text, ONSITE_KEYWORDS) {
        Some(WorkArrangement::Onsite)
    } else {
        None
    }
}

pub fn extract_role_type(text: &str) -> Option<RoleType> {
    ROLE_TYPES
        .iter()
        .find(|(_, keywords)| contains_any(text, keywords))
        .map(|(role, _)| *role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_keyword() {
        let fact = extract_experience("find senior python developers");
        assert_eq!(fact.level, Some(ExperienceLevel::Senior));
        assert_eq!(fact.min_years, Some(5));
    }

    #[test]
    fn test_experience_table_order_wins() {
        // "graduate" (intern) precedes "lead" (senior) in table order
        let fact = extract_experience("graduate or lead engineer");
        assert_eq!(fact.level, Some(ExperienceLevel::Intern));
    }

    #[test]
    fn test_junior_and_entry_map_to_junior() {
        for text in ["junior python developer", "entry level analyst", "entry-level role"] {
            let fact = extract_experience(text);
            assert_eq!(fact.level, Some(ExperienceLevel::Junior), "{text}");
            assert_eq!(fact.min_years, Some(0), "{text}");
        }
        assert_eq!(
            extract_experience("summer internship").level,
            Some(ExperienceLevel::Intern)
        );
    }

    #[test]
    fn test_experience_years_override() {
        let fact = extract_experience("junior react engineers with 6+ years experience");
        assert_eq!(fact.level, Some(ExperienceLevel::Senior));
        assert_eq!(fact.min_years, Some(6));

        let fact = extract_experience("someone with 1 yr");
        assert_eq!(fact.level, Some(ExperienceLevel::Junior));
        assert_eq!(fact.min_years, Some(1));

        let fact = extract_experience("10 years in the field");
        assert_eq!(fact.level, Some(ExperienceLevel::Principal));
    }

    #[test]
    fn test_experience_none() {
        assert_eq!(extract_experience("python people"), ExperienceFact::default());
        // Substring of another word must not count
        assert_eq!(extract_experience("internal tools"), ExperienceFact::default());
    }

    #[test]
    fn test_skills_family_and_tokens() {
        let skills = extract_skills("senior ml engineers with python and aws");
        assert_eq!(&skills[..5], &["Machine Learning", "ML", "TensorFlow", "PyTorch", "Scikit-learn"]);
        assert!(skills.contains(&"Python".to_string()));
        assert!(skills.contains(&"Django".to_string()));
        assert!(skills.contains(&"AWS".to_string()));
    }

    #[test]
    fn test_skills_dedup_keeps_first_spelling() {
        let skills = extract_skills("javascript and js and react");
        let lower: Vec<_> = skills.iter().map(|s| s.to_lowercase()).collect();
        let mut unique = lower.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(lower.len(), unique.len());
        assert_eq!(skills[0], "JavaScript");
    }

    #[test]
    fn test_skills_no_false_positive() {
        // "ml" inside "html" must not pull in machine learning
        let skills = extract_skills("html wizards");
        assert!(skills.contains(&"HTML".to_string()));
        assert!(!skills.contains(&"ML".to_string()));
        assert!(extract_skills("haskell wizards").is_empty());
        assert!(extract_skills("").is_empty());
    }

    #[test]
    fn test_skills_member_expands_family() {
        let skills = extract_skills("find tensorflow engineers");
        assert_eq!(
            skills,
            vec!["Machine Learning", "ML", "TensorFlow", "PyTorch", "Scikit-learn"]
        );

        let skills = extract_skills("find django developers");
        for expected in ["Python", "Django", "Flask", "FastAPI", "Pandas", "NumPy"] {
            assert!(skills.contains(&expected.to_string()), "{expected}");
        }

        let skills = extract_skills("find kubernetes engineers");
        for expected in ["DevOps", "Docker", "AWS", "Azure", "GCP", "Cloud", "Kubernetes"] {
            assert!(skills.contains(&expected.to_string()), "{expected}");
        }
    }

    #[test]
    fn test_skills_token_only() {
        let skills = extract_skills("rust and kotlin");
        assert_eq!(skills, vec!["Rust", "Kotlin"]);
    }

    #[test]
    fn test_locations_alias() {
        let text = "python developers in sf";
        let locations = extract_locations(text, text);
        assert_eq!(locations, vec!["San Francisco", "SF", "Bay Area"]);
    }

    #[test]
    fn test_locations_city_phrase_uses_original_case() {
        let original = "Find senior Python developers in San Francisco";
        let locations = extract_locations(&original.to_lowercase(), original);
        assert_eq!(locations[0], "San Francisco");
        assert!(!locations.contains(&"san francisco".to_string()));

        let original = "Engineers in Portland, OR";
        let locations = extract_locations(&original.to_lowercase(), original);
        assert_eq!(locations, vec!["Portland, OR"]);
    }

    #[test]
    fn test_locations_flask_is_not_la() {
        assert!(extract_locations("flask apis", "flask apis").is_empty());
    }

    #[test]
    fn test_work_arrangement_precedence() {
        assert_eq!(
            extract_work_arrangement("hybrid or remote"),
            Some(WorkArrangement::Remote)
        );
        assert_eq!(
            extract_work_arrangement("hybrid in the office"),
            Some(WorkArrangement::Hybrid)
        );
        assert_eq!(
            extract_work_arrangement("on-site in boston"),
            Some(WorkArrangement::Onsite)
        );
        assert_eq!(extract_work_arrangement("python developers"), None);
    }

    #[test]
    fn test_role_type() {
        assert_eq!(extract_role_type("react developers"), Some(RoleType::Engineer));
        assert_eq!(extract_role_type("engineering manager"), Some(RoleType::Manager));
        assert_eq!(extract_role_type("ux designer"), Some(RoleType::Designer));
        assert_eq!(extract_role_type("data scientists"), Some(RoleType::Analyst));
        assert_eq!(extract_role_type("build a guide"), None);
    }
}
