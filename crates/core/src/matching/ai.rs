//! AI-delegated scoring.
//!
//! One completion per candidate. The reply must embed a JSON object with the
//! numeric score fields; anything else is a `ScoringError` the strategy layer
//! turns into a deterministic fallback.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::candidate::Candidate;
use crate::config::LlmConfig;
use crate::llm::{CompletionRequest, LlmClient};
use crate::matching::criteria::MatchCriteria;
use crate::matching::json_extract::extract_json_object;
use crate::matching::prompts::{scoring_prompt, SYSTEM_PROMPT};
use crate::matching::traits::{Scorer, ScorerOutput, ScoringError};
use crate::matching::types::MatchScore;
use crate::metrics;

/// Score fields expected in the model's reply.
#[derive(Debug, Deserialize)]
struct AiScoreResponse {
    match_score: f64,
    skill_match: f64,
    experience_match: f64,
    location_match: f64,
    #[serde(default)]
    match_reasons: Vec<String>,
    #[serde(default, alias = "missing_skills")]
    concerns: Vec<String>,
}

/// Scorer backed by an external text-generation service.
pub struct AiScorer {
    client: Arc<dyn LlmClient>,
    max_tokens: u32,
    temperature: f32,
}

impl AiScorer {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self {
            client,
            max_tokens: 1000,
            temperature: 0.3,
        }
    }

    /// Use the generation settings from the `[llm]` section.
    pub fn from_config(client: Arc<dyn LlmClient>, config: &LlmConfig) -> Self {
        Self::new(client)
            .with_max_tokens(config.max_tokens)
            .with_temperature(config.temperature)
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn client(&self) -> &Arc<dyn LlmClient> {
        &self.client
    }
}

/// Parse a model reply into a score.
pub(crate) fn parse_score_response(text: &str) -> Result<MatchScore, ScoringError> {
    let json = extract_json_object(text).ok_or(ScoringError::NoJson)?;
    let parsed: AiScoreResponse =
        serde_json::from_str(json).map_err(|e| ScoringError::InvalidJson(e.to_string()))?;

    let fields = [
        parsed.match_score,
        parsed.skill_match,
        parsed.experience_match,
        parsed.location_match,
    ];
    if fields.iter().any(|v| !v.is_finite()) {
        return Err(ScoringError::InvalidJson("non-finite score".to_string()));
    }

    let keep = |items: Vec<String>| -> Vec<String> {
        items
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    };

    Ok(MatchScore::new(
        to_score(parsed.match_score),
        to_score(parsed.skill_match),
        to_score(parsed.experience_match),
        to_score(parsed.location_match),
        keep(parsed.match_reasons),
        keep(parsed.concerns),
    ))
}

fn to_score(value: f64) -> u32 {
    value.round().clamp(0.0, 100.0) as u32
}

#[async_trait]
impl Scorer for AiScorer {
    fn name(&self) -> &str {
        "ai"
    }

    async fn score(
        &self,
        candidate: &Candidate,
        job_description: &str,
        _criteria: &MatchCriteria,
    ) -> Result<ScorerOutput, ScoringError> {
        let provider = self.client.provider().to_string();
        let request = CompletionRequest::new(scoring_prompt(job_description, candidate))
            .with_system(SYSTEM_PROMPT)
            .with_max_tokens(self.max_tokens)
            .with_temperature(self.temperature);

        let response = match self.client.complete(request).await {
            Ok(response) => {
                metrics::LLM_REQUESTS
                    .with_label_values(&[provider.as_str(), "success"])
                    .inc();
                response
            }
            Err(e) => {
                metrics::LLM_REQUESTS
                    .with_label_values(&[provider.as_str(), "error"])
                    .inc();
                return Err(e.into());
            }
        };

        metrics::LLM_TOKENS
            .with_label_values(&[provider.as_str(), "input"])
            .inc_by(u64::from(response.usage.input_tokens));
        metrics::LLM_TOKENS
            .with_label_values(&[provider.as_str(), "output"])
            .inc_by(u64::from(response.usage.output_tokens));

        let score = parse_score_response(&response.text)?;
        debug!(
            candidate = %candidate.id,
            score = score.match_score,
            model = %response.model,
            "AI scored candidate"
        );

        Ok(ScorerOutput {
            score,
            llm_usage: Some(response.usage),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::types::OverallFit;
    use crate::testing::{fixtures, MockLlmClient, MockReply};

    #[test]
    fn test_parse_wrapped_response() {
        let text = "Sure! Here's the analysis:\n```json\n{\"match_score\": 88.6, \"skill_match\": 90, \"experience_match\": 75, \"location_match\": 100, \"match_reasons\": [\"Deep Python\", \" \"], \"missing_skills\": [\"Kubernetes\"]}\n```";
        let score = parse_score_response(text).unwrap();

        assert_eq!(score.match_score, 89);
        assert_eq!(score.skill_match, 90);
        assert_eq!(score.location_match, 100);
        assert_eq!(score.match_reasons, vec!["Deep Python"]);
        assert_eq!(score.concerns, vec!["Kubernetes"]);
        assert_eq!(score.overall_fit, OverallFit::Excellent);
    }

    #[test]
    fn test_parse_clamps_out_of_range() {
        let text = r#"{"match_score": 140, "skill_match": -5, "experience_match": 50, "location_match": 50}"#;
        let score = parse_score_response(text).unwrap();
        assert_eq!(score.match_score, 100);
        assert_eq!(score.skill_match, 0);
        assert!(score.match_reasons.is_empty());
    }

    #[test]
    fn test_parse_failures() {
        assert!(matches!(
            parse_score_response("I cannot help with that."),
            Err(ScoringError::NoJson)
        ));
        assert!(matches!(
            parse_score_response(r#"{"match_score": 70}"#),
            Err(ScoringError::InvalidJson(_))
        ));
        assert!(matches!(
            parse_score_response(
                r#"{"match_score": "high", "skill_match": 1, "experience_match": 1, "location_match": 1}"#
            ),
            Err(ScoringError::InvalidJson(_))
        ));
    }

    #[tokio::test]
    async fn test_score_with_mock_client() {
        let client = Arc::new(MockLlmClient::new());
        client
            .reply_for("Name: Ada", MockReply::Text(fixtures::score_json(91)))
            .await;
        let scorer = AiScorer::new(client.clone()).with_temperature(0.0);

        let candidate = fixtures::candidate("1", "Ada", &["Python"], 5, "London");
        let output = scorer
            .score(&candidate, "Python developer", &MatchCriteria::default())
            .await
            .unwrap();

        assert_eq!(output.score.match_score, 91);
        assert_eq!(output.llm_usage, Some(client.usage_per_call()));

        let requests = client.recorded_requests().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].system.as_deref(), Some(SYSTEM_PROMPT));
        assert_eq!(requests[0].temperature, 0.0);
        assert!(requests[0].prompt.contains("Python developer"));
    }

    #[tokio::test]
    async fn test_score_propagates_client_error() {
        let client = Arc::new(MockLlmClient::new());
        client
            .reply_for("Name: Bob", MockReply::Fail("boom".to_string()))
            .await;
        let scorer = AiScorer::new(client);

        let candidate = fixtures::candidate("2", "Bob", &[], 1, "");
        let err = scorer
            .score(&candidate, "anything", &MatchCriteria::default())
            .await
            .unwrap_err();
        assert_eq!(err.reason(), "llm");
    }
}
