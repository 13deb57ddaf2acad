//! Summary statistics over a candidate pool.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::candidate::Candidate;

/// Skills reported in the distribution.
pub const TOP_SKILLS: usize = 10;

/// How often one skill appears in the pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCount {
    pub skill: String,
    pub count: usize,
}

/// Candidates per experience band.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceDistribution {
    #[serde(rename = "0-2")]
    pub up_to_2: usize,
    #[serde(rename = "3-5")]
    pub from_3_to_5: usize,
    #[serde(rename = "6-10")]
    pub from_6_to_10: usize,
    #[serde(rename = "10+")]
    pub over_10: usize,
}

impl ExperienceDistribution {
    fn record(&mut self, years: u32) {
        match years {
            0..=2 => self.up_to_2 += 1,
            3..=5 => self.from_3_to_5 += 1,
            6..=10 => self.from_6_to_10 += 1,
            _ => self.over_10 += 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolAnalytics {
    pub total_candidates: usize,
    /// Most common skills, most frequent first. Ties keep first-seen order.
    pub skills_distribution: Vec<SkillCount>,
    pub experience_distribution: ExperienceDistribution,
    pub location_distribution: BTreeMap<String, usize>,
}

/// Compute pool statistics. An empty pool yields all-zero analytics.
pub fn pool_analytics(candidates: &[Candidate]) -> PoolAnalytics {
    let mut skills: Vec<SkillCount> = Vec::new();
    let mut skill_index: HashMap<&str, usize> = HashMap::new();
    let mut experience = ExperienceDistribution::default();
    let mut locations: BTreeMap<String, usize> = BTreeMap::new();

    for candidate in candidates {
        for skill in &candidate.skills {
            match skill_index.get(skill.as_str()) {
                Some(&i) => skills[i].count += 1,
                None => {
                    skill_index.insert(skill.as_str(), skills.len());
                    skills.push(SkillCount {
                        skill: skill.clone(),
                        count: 1,
                    });
                }
            }
        }

        experience.record(candidate.experience_years);

        let location = candidate.location.trim();
        let location = if location.is_empty() { "Unknown" } else { location };
        *locations.entry(location.to_string()).or_default() += 1;
    }

    skills.sort_by(|a, b| b.count.cmp(&a.count));
    skills.truncate(TOP_SKILLS);

    PoolAnalytics {
        total_candidates: candidates.len(),
        skills_distribution: skills,
        experience_distribution: experience,
        location_distribution: locations,
    }
}
