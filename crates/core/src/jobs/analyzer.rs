//! AI-first job description analysis.

use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use super::keywords::keyword_analysis;
use super::types::{
    AnalysisError, AnalysisMethod, JobAnalysis, JobDetails, JobRequirements, Recommendations,
    MIN_JOB_DESCRIPTION_LEN,
};
use crate::config::LlmConfig;
use crate::llm::{CompletionRequest, LlmClient, LlmUsage};
use crate::matching::extract_json_object;
use crate::metrics;

pub const ANALYSIS_SYSTEM_PROMPT: &str =
    "You are an expert HR analyst. Always respond with valid JSON only.";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct AiJobReply {
    requirements: AiRequirements,
    #[serde(default)]
    analysis: AiDetails,
    #[serde(default)]
    key_responsibilities: Vec<String>,
    #[serde(default)]
    recommendations: Recommendations,
}

#[derive(Debug, Deserialize)]
struct AiRequirements {
    #[serde(default)]
    required_skills: Vec<String>,
    #[serde(default)]
    min_experience_years: f64,
    #[serde(default)]
    education_level: Option<String>,
    #[serde(default)]
    job_level: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct AiDetails {
    job_type: Option<String>,
    industry: Option<String>,
    remote_work: Option<String>,
}

/// Analyses job descriptions with the external AI service when one is
/// configured, and by keyword matching otherwise.
///
/// A failed AI attempt never fails the call: the keyword result comes back
/// with [`AnalysisMethod::Fallback`] and the failure in `error`.
#[derive(Clone)]
pub struct JobAnalyzer {
    client: Option<Arc<dyn LlmClient>>,
    max_tokens: u32,
    temperature: f32,
    timeout: Duration,
}

impl std::fmt::Debug for JobAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JobAnalyzer")
            .field("ai_enabled", &self.ai_enabled())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for JobAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl JobAnalyzer {
    /// Keyword-only analyzer.
    pub fn new() -> Self {
        Self {
            client: None,
            max_tokens: 1000,
            temperature: 0.3,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_llm(client: Arc<dyn LlmClient>) -> Self {
        Self {
            client: Some(client),
            ..Self::new()
        }
    }

    /// Use the generation settings from the `[llm]` section.
    pub fn from_config(client: Arc<dyn LlmClient>, config: &LlmConfig) -> Self {
        Self::with_llm(client)
            .with_max_tokens(config.max_tokens)
            .with_temperature(config.temperature)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn ai_enabled(&self) -> bool {
        self.client.is_some()
    }

    /// Analyse a job description.
    ///
    /// Fails only when the trimmed text is shorter than
    /// [`MIN_JOB_DESCRIPTION_LEN`] characters.
    pub async fn analyze(&self, job_description: &str) -> Result<JobAnalysis, AnalysisError> {
        let text = job_description.trim();
        if text.chars().count() < MIN_JOB_DESCRIPTION_LEN {
            return Err(AnalysisError::TooShort);
        }

        let Some(client) = &self.client else {
            metrics::JOB_ANALYSES
                .with_label_values(&[AnalysisMethod::Keyword.as_str()])
                .inc();
            return Ok(keyword_analysis(text));
        };

        let analysis = match self.ai_analysis(client.as_ref(), text).await {
            Ok(analysis) => analysis,
            Err(e) => {
                warn!(
                    reason = e.reason(),
                    "AI job analysis failed, using keyword analysis: {}", e
                );
                let mut fallback = keyword_analysis(text);
                fallback.method = AnalysisMethod::Fallback;
                fallback.error = Some(format!("AI analysis failed: {}", e));
                fallback
            }
        };

        metrics::JOB_ANALYSES
            .with_label_values(&[analysis.method.as_str()])
            .inc();
        Ok(analysis)
    }

    async fn ai_analysis(
        &self,
        client: &dyn LlmClient,
        text: &str,
    ) -> Result<JobAnalysis, AnalysisError> {
        let provider = client.provider().to_string();
        let request = CompletionRequest::new(analysis_prompt(text))
            .with_system(ANALYSIS_SYSTEM_PROMPT)
            .with_max_tokens(self.max_tokens)
            .with_temperature(self.temperature);

        let response = match tokio::time::timeout(self.timeout, client.complete(request)).await {
            Ok(Ok(response)) => {
                metrics::LLM_REQUESTS
                    .with_label_values(&[provider.as_str(), "success"])
                    .inc();
                response
            }
            Ok(Err(e)) => {
                metrics::LLM_REQUESTS
                    .with_label_values(&[provider.as_str(), "error"])
                    .inc();
                return Err(e.into());
            }
            Err(_) => {
                metrics::LLM_REQUESTS
                    .with_label_values(&[provider.as_str(), "error"])
                    .inc();
                return Err(AnalysisError::Timeout(self.timeout));
            }
        };

        metrics::LLM_TOKENS
            .with_label_values(&[provider.as_str(), "input"])
            .inc_by(u64::from(response.usage.input_tokens));
        metrics::LLM_TOKENS
            .with_label_values(&[provider.as_str(), "output"])
            .inc_by(u64::from(response.usage.output_tokens));

        let analysis = parse_analysis_response(&response.text, text, response.usage)?;
        debug!(
            skills = analysis.requirements.required_skills.len(),
            model = %response.model,
            "AI analysed job description"
        );
        Ok(analysis)
    }
}

fn analysis_prompt(job_description: &str) -> String {
    format!(
        r#"Analyze this job description and extract key information in JSON format:

JOB DESCRIPTION:
{job_description}

Please provide analysis in this exact JSON format:
{{
    "requirements": {{
        "required_skills": ["skill1", "skill2"],
        "min_experience_years": 0,
        "education_level": "bachelor",
        "job_level": "mid"
    }},
    "analysis": {{
        "job_type": "full-time",
        "industry": "technology",
        "remote_work": "hybrid"
    }},
    "key_responsibilities": ["resp1", "resp2"],
    "recommendations": {{
        "for_candidates": ["tip1", "tip2"],
        "for_recruiters": ["tip1", "tip2"]
    }}
}}"#
    )
}

/// Parse a model reply. Fields the model leaves out are filled from the
/// keyword reading of the same text.
fn parse_analysis_response(
    reply: &str,
    job_description: &str,
    usage: LlmUsage,
) -> Result<JobAnalysis, AnalysisError> {
    let json = extract_json_object(reply).ok_or(AnalysisError::NoJson)?;
    let parsed: AiJobReply =
        serde_json::from_str(json).map_err(|e| AnalysisError::InvalidJson(e.to_string()))?;

    let years = parsed.requirements.min_experience_years;
    if !years.is_finite() {
        return Err(AnalysisError::InvalidJson(
            "non-finite min_experience_years".to_string(),
        ));
    }

    let keyword = keyword_analysis(job_description);
    let pick = |value: Option<String>, default: String| {
        value
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(default)
    };

    Ok(JobAnalysis {
        requirements: JobRequirements {
            required_skills: keep_nonblank(parsed.requirements.required_skills),
            min_experience_years: years.round().clamp(0.0, 60.0) as u32,
            education_level: pick(
                parsed.requirements.education_level,
                keyword.requirements.education_level,
            ),
            job_level: pick(parsed.requirements.job_level, keyword.requirements.job_level),
        },
        analysis: JobDetails {
            job_type: pick(parsed.analysis.job_type, keyword.analysis.job_type),
            industry: pick(parsed.analysis.industry, keyword.analysis.industry),
            remote_work: pick(parsed.analysis.remote_work, keyword.analysis.remote_work),
        },
        key_responsibilities: keep_nonblank(parsed.key_responsibilities),
        recommendations: Recommendations {
            for_candidates: keep_nonblank(parsed.recommendations.for_candidates),
            for_recruiters: keep_nonblank(parsed.recommendations.for_recruiters),
        },
        metrics: keyword.metrics,
        method: AnalysisMethod::Ai,
        ai_powered: true,
        note: None,
        error: None,
        llm_usage: Some(usage),
    })
}

fn keep_nonblank(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
