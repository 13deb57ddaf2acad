//! Query compiler result types.

use serde::{Deserialize, Serialize};

/// Seniority tiers recognised in a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Intern,
    Junior,
    Mid,
    Senior,
    Principal,
    Executive,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Intern => "intern",
            ExperienceLevel::Junior => "junior",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
            ExperienceLevel::Principal => "principal",
            ExperienceLevel::Executive => "executive",
        }
    }

    /// Level implied by an explicit "N years" mention.
    pub fn from_years(years: u32) -> Self {
        match years {
            y if y >= 8 => ExperienceLevel::Principal,
            y if y >= 5 => ExperienceLevel::Senior,
            y if y >= 2 => ExperienceLevel::Mid,
            _ => ExperienceLevel::Junior,
        }
    }
}

impl std::fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkArrangement {
    Remote,
    Hybrid,
    Onsite,
}

/// Broad role category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleType {
    Engineer,
    Manager,
    Designer,
    Analyst,
    Consultant,
}

impl RoleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleType::Engineer => "engineer",
            RoleType::Manager => "manager",
            RoleType::Designer => "designer",
            RoleType::Analyst => "analyst",
            RoleType::Consultant => "consultant",
        }
    }
}

impl std::fmt::Display for RoleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hard filters derived from a query, or supplied directly by a caller.
///
/// Deserialization is strict: a wrongly-typed field is a caller bug and
/// must surface as an error rather than be coerced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QueryFilters {
    #[serde(default)]
    pub min_experience: Option<u32>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub remote_ok: bool,
}

impl QueryFilters {
    pub fn is_empty(&self) -> bool {
        self.min_experience.unwrap_or(0) == 0
            && self.required_skills.is_empty()
            && self.location.trim().is_empty()
    }
}

/// Facts pulled out of the query by the extractors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedComponents {
    pub experience_level: Option<ExperienceLevel>,
    pub skills: Vec<String>,
    pub locations: Vec<String>,
    pub work_arrangement: Option<WorkArrangement>,
    pub role_type: Option<RoleType>,
}

/// Output of the query compiler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedQuery {
    pub original_query: String,
    pub job_description: String,
    pub filters: QueryFilters,
    pub extracted_components: ExtractedComponents,
    /// 0.0 to 1.0
    pub confidence_score: f64,
    pub suggestions: Vec<String>,
}

/// Caller-side validity check result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryValidation {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QueryValidation {
    pub fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_years() {
        assert_eq!(ExperienceLevel::from_years(0), ExperienceLevel::Junior);
        assert_eq!(ExperienceLevel::from_years(2), ExperienceLevel::Mid);
        assert_eq!(ExperienceLevel::from_years(5), ExperienceLevel::Senior);
        assert_eq!(ExperienceLevel::from_years(8), ExperienceLevel::Principal);
        assert_eq!(ExperienceLevel::from_years(30), ExperienceLevel::Principal);
    }

    #[test]
    fn test_enum_serialization() {
        assert_eq!(
            serde_json::to_string(&ExperienceLevel::Senior).unwrap(),
            "\"senior\""
        );
        assert_eq!(
            serde_json::to_string(&WorkArrangement::Onsite).unwrap(),
            "\"onsite\""
        );
        assert_eq!(serde_json::to_string(&RoleType::Analyst).unwrap(), "\"analyst\"");
    }

    #[test]
    fn test_filters_strict_types() {
        let ok: QueryFilters =
            serde_json::from_str(r#"{"min_experience": 3, "required_skills": ["Go"]}"#).unwrap();
        assert_eq!(ok.min_experience, Some(3));
        assert!(!ok.remote_ok);

        assert!(serde_json::from_str::<QueryFilters>(r#"{"min_experience": "three"}"#).is_err());
        assert!(serde_json::from_str::<QueryFilters>(r#"{"required_skills": "Go"}"#).is_err());
        assert!(serde_json::from_str::<QueryFilters>(r#"{"skills": ["Go"]}"#).is_err());
    }

    #[test]
    fn test_filters_is_empty() {
        assert!(QueryFilters::default().is_empty());
        let filters = QueryFilters {
            min_experience: Some(0),
            remote_ok: true,
            ..Default::default()
        };
        assert!(filters.is_empty());
        let filters = QueryFilters {
            location: "Boston".to_string(),
            ..Default::default()
        };
        assert!(!filters.is_empty());
    }

    #[test]
    fn test_validation_serialization() {
        let json = serde_json::to_string(&QueryValidation::ok()).unwrap();
        assert_eq!(json, r#"{"valid":true}"#);
        let json = serde_json::to_string(&QueryValidation::invalid("Query too short")).unwrap();
        assert!(json.contains("Query too short"));
    }
}
