//! Candidate record as supplied by the external store.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A candidate profile.
///
/// Deserialization is lenient: the store holds whatever the upstream
/// résumé extractor produced, so numeric and list fields accept several
/// shapes and normalize to one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Opaque identifier, stable across requests.
    #[serde(default, deserialize_with = "de_id")]
    pub id: String,
    #[serde(default, deserialize_with = "de_string")]
    pub name: String,
    #[serde(default, deserialize_with = "de_string")]
    pub email: String,
    #[serde(default, deserialize_with = "de_string")]
    pub location: String,
    /// Case-preserving, deduplicated case-insensitively.
    #[serde(default, deserialize_with = "de_skills")]
    pub skills: Vec<String>,
    /// Whole years; anything unparsable becomes 0.
    #[serde(default, deserialize_with = "de_years")]
    pub experience_years: u32,
    #[serde(default, deserialize_with = "de_string")]
    pub summary: String,
    #[serde(default, deserialize_with = "de_entries")]
    pub education: Vec<EducationEntry>,
    #[serde(default, deserialize_with = "de_entries")]
    pub experience: Vec<ExperienceEntry>,
    /// Fields the core does not interpret, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One education record (display only).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default, deserialize_with = "de_string")]
    pub degree: String,
    #[serde(default, deserialize_with = "de_string")]
    pub institution: String,
    #[serde(default, alias = "year", deserialize_with = "de_string")]
    pub duration: String,
}

/// One work-history record (display only).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default, alias = "role", deserialize_with = "de_string")]
    pub title: String,
    #[serde(default, alias = "institution", deserialize_with = "de_string")]
    pub company: String,
    #[serde(default, deserialize_with = "de_string")]
    pub duration: String,
}

impl Candidate {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: String::new(),
            location: String::new(),
            skills: Vec::new(),
            experience_years: 0,
            summary: String::new(),
            education: Vec::new(),
            experience: Vec::new(),
            extra: Map::new(),
        }
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = dedup_skills(skills.into_iter().map(Into::into));
        self
    }

    pub fn with_experience_years(mut self, years: u32) -> Self {
        self.experience_years = years;
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Lower-cased skills for case-insensitive comparisons.
    pub fn skills_lower(&self) -> Vec<String> {
        self.skills.iter().map(|s| s.to_lowercase()).collect()
    }
}

/// Deduplicate case-insensitively, keeping the first spelling and order.
fn dedup_skills(skills: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    skills
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.to_lowercase()))
        .collect()
}

/// Parse an experience figure such as `5`, `5.7`, `"5+"` or `"3 years"`.
pub(crate) fn parse_years(value: &Value) -> u32 {
    match value {
        Value::Number(n) => {
            if let Some(v) = n.as_u64() {
                v.min(u64::from(u32::MAX)) as u32
            } else if let Some(v) = n.as_f64() {
                if v.is_finite() && v > 0.0 {
                    v.floor().min(f64::from(u32::MAX)) as u32
                } else {
                    0
                }
            } else {
                0
            }
        }
        Value::String(s) => s
            .trim()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect::<String>()
            .parse()
            .unwrap_or(0),
        _ => 0,
    }
}

fn de_years<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    let value = Value::deserialize(d)?;
    Ok(parse_years(&value))
}

fn de_id<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    let value = Value::deserialize(d)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

fn de_string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    let value = Value::deserialize(d)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

fn de_skills<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    let value = Value::deserialize(d)?;
    let raw: Vec<String> = match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        Value::String(s) => s.split(',').map(String::from).collect(),
        _ => Vec::new(),
    };
    Ok(dedup_skills(raw.into_iter()))
}

fn de_entries<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Value::deserialize(d)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter(Value::is_object)
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_years_shapes() {
        assert_eq!(parse_years(&json!(5)), 5);
        assert_eq!(parse_years(&json!(5.9)), 5);
        assert_eq!(parse_years(&json!("5+")), 5);
        assert_eq!(parse_years(&json!("3 years")), 3);
        assert_eq!(parse_years(&json!("a few")), 0);
        assert_eq!(parse_years(&json!(-2)), 0);
        assert_eq!(parse_years(&json!(null)), 0);
    }

    #[test]
    fn test_deserialize_lenient_candidate() {
        let candidate: Candidate = serde_json::from_value(json!({
            "id": 42,
            "name": "Ada",
            "skills": "Python, python, Rust , ",
            "experience_years": "7+",
            "location": "Remote",
            "uploaded_at": "2024-01-01T00:00:00"
        }))
        .unwrap();

        assert_eq!(candidate.id, "42");
        assert_eq!(candidate.skills, vec!["Python", "Rust"]);
        assert_eq!(candidate.experience_years, 7);
        assert_eq!(candidate.extra.get("uploaded_at"), Some(&json!("2024-01-01T00:00:00")));
    }

    #[test]
    fn test_deserialize_missing_fields_default() {
        let candidate: Candidate = serde_json::from_value(json!({"name": "Bo"})).unwrap();
        assert_eq!(candidate.id, "");
        assert!(candidate.skills.is_empty());
        assert_eq!(candidate.experience_years, 0);
        assert!(candidate.extra.is_empty());
    }

    #[test]
    fn test_deserialize_entries_skip_garbage() {
        let candidate: Candidate = serde_json::from_value(json!({
            "experience": [
                {"title": "Engineer", "company": "Acme", "duration": "2019-2023"},
                "not a record",
                {"role": "Intern", "institution": "Lab"}
            ],
            "education": [{"degree": "BSc", "institution": "MIT", "year": 2018}]
        }))
        .unwrap();

        assert_eq!(candidate.experience.len(), 2);
        assert_eq!(candidate.experience[1].title, "Intern");
        assert_eq!(candidate.experience[1].company, "Lab");
        assert_eq!(candidate.education[0].duration, "2018");
    }

    #[test]
    fn test_serialize_keeps_extra_fields() {
        let mut candidate = Candidate::new("c1", "Cy");
        candidate
            .extra
            .insert("filename".to_string(), json!("cy.pdf"));
        let value = serde_json::to_value(&candidate).unwrap();
        assert_eq!(value["filename"], "cy.pdf");
        assert_eq!(value["id"], "c1");
    }

    #[test]
    fn test_builder_dedups_skills() {
        let candidate = Candidate::new("c1", "Cy").with_skills(["React", "react", "Go"]);
        assert_eq!(candidate.skills, vec!["React", "Go"]);
        assert_eq!(candidate.skills_lower(), vec!["react", "go"]);
    }
}
