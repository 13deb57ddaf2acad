//! Candidate records and snapshot normalization.

mod types;

pub use types::{Candidate, EducationEntry, ExperienceEntry};

use serde_json::Value;

use crate::matching::MatchError;

/// Normalize a snapshot of loosely-typed records into candidates.
///
/// Every element must be a key/value map; anything else is a caller bug.
/// Records without an id get their pool position as id so that results
/// stay addressable.
pub fn candidates_from_value(value: Value) -> Result<Vec<Candidate>, MatchError> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(MatchError::InvalidCandidate(format!(
                "expected a list of candidates, got {}",
                json_kind(&other)
            )))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            if !item.is_object() {
                return Err(MatchError::InvalidCandidate(format!(
                    "candidate #{} is {}, expected an object",
                    index,
                    json_kind(&item)
                )));
            }
            let mut candidate: Candidate = serde_json::from_value(item)
                .map_err(|e| MatchError::InvalidCandidate(format!("candidate #{}: {}", index, e)))?;
            if candidate.id.is_empty() {
                candidate.id = index.to_string();
            }
            Ok(candidate)
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
