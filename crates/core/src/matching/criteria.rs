//! What a candidate is scored against.

use serde::{Deserialize, Serialize};

use crate::query::{ExperienceLevel, ParsedQuery, QueryFilters};

/// Required seniority band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seniority {
    Entry,
    Mid,
    Senior,
    Lead,
}

impl Seniority {
    /// Inclusive years-of-experience band.
    pub fn year_range(&self) -> (u32, u32) {
        match self {
            Seniority::Entry => (0, 2),
            Seniority::Mid => (2, 5),
            Seniority::Senior => (5, 10),
            Seniority::Lead => (8, 15),
        }
    }
}

impl From<ExperienceLevel> for Seniority {
    fn from(level: ExperienceLevel) -> Self {
        match level {
            ExperienceLevel::Intern | ExperienceLevel::Junior => Seniority::Entry,
            ExperienceLevel::Mid => Seniority::Mid,
            ExperienceLevel::Senior => Seniority::Senior,
            ExperienceLevel::Principal | ExperienceLevel::Executive => Seniority::Lead,
        }
    }
}

/// Requirements a candidate is scored against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCriteria {
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub min_experience: Option<u32>,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub remote_ok: bool,
    #[serde(default)]
    pub seniority: Option<Seniority>,
}

impl MatchCriteria {
    /// Criteria for the primary search path.
    pub fn from_parsed(parsed: &ParsedQuery) -> Self {
        Self {
            required_skills: parsed.filters.required_skills.clone(),
            min_experience: parsed.filters.min_experience,
            locations: parsed.extracted_components.locations.clone(),
            remote_ok: parsed.filters.remote_ok,
            seniority: parsed.extracted_components.experience_level.map(Seniority::from),
        }
    }

    /// Criteria for the filter-first path, where no seniority is known.
    pub fn from_filters(filters: &QueryFilters) -> Self {
        let location = filters.location.trim();
        Self {
            required_skills: filters.required_skills.clone(),
            min_experience: filters.min_experience,
            locations: if location.is_empty() {
                Vec::new()
            } else {
                vec![location.to_string()]
            },
            remote_ok: filters.remote_ok,
            seniority: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::parse_query;

    #[test]
    fn test_seniority_from_level() {
        assert_eq!(Seniority::from(ExperienceLevel::Intern), Seniority::Entry);
        assert_eq!(Seniority::from(ExperienceLevel::Junior), Seniority::Entry);
        assert_eq!(Seniority::from(ExperienceLevel::Mid), Seniority::Mid);
        assert_eq!(Seniority::from(ExperienceLevel::Senior), Seniority::Senior);
        assert_eq!(Seniority::from(ExperienceLevel::Principal), Seniority::Lead);
        assert_eq!(Seniority::from(ExperienceLevel::Executive), Seniority::Lead);
    }

    #[test]
    fn test_from_parsed() {
        let parsed = parse_query("Senior Rust engineers in Boston");
        let criteria = MatchCriteria::from_parsed(&parsed);
        assert_eq!(criteria.required_skills, vec!["Rust"]);
        assert_eq!(criteria.min_experience, Some(5));
        assert_eq!(criteria.locations, vec!["Boston", "Massachusetts"]);
        assert!(!criteria.remote_ok);
        assert_eq!(criteria.seniority, Some(Seniority::Senior));
    }

    #[test]
    fn test_from_filters() {
        let filters = QueryFilters {
            min_experience: Some(3),
            required_skills: vec!["Go".to_string()],
            location: "  ".to_string(),
            remote_ok: true,
        };
        let criteria = MatchCriteria::from_filters(&filters);
        assert!(criteria.locations.is_empty());
        assert_eq!(criteria.seniority, None);
        assert!(criteria.remote_ok);
    }
}
