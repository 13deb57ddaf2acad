use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub candidates: CandidateStoreConfig,
    #[serde(default)]
    pub matching: MatchingConfig,
    /// External text-generation service. Absent means deterministic scoring only.
    #[serde(default)]
    pub llm: Option<LlmConfig>,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8080
}

/// Where the caller reads the candidate snapshot from.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CandidateStoreConfig {
    #[serde(default = "default_candidates_path")]
    pub path: PathBuf,
}

impl Default for CandidateStoreConfig {
    fn default() -> Self {
        Self {
            path: default_candidates_path(),
        }
    }
}

fn default_candidates_path() -> PathBuf {
    PathBuf::from("data/candidates.json")
}

/// Ranking engine tuning.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MatchingConfig {
    /// Maximum candidates scored at the same time.
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,
    /// Per-candidate budget for an AI scoring call, in seconds.
    #[serde(default = "default_ai_timeout")]
    pub ai_timeout_secs: u64,
    /// Budget for the startup availability probe, in seconds.
    #[serde(default = "default_probe_timeout")]
    pub probe_timeout_secs: u64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            max_concurrency: default_max_concurrency(),
            ai_timeout_secs: default_ai_timeout(),
            probe_timeout_secs: default_probe_timeout(),
        }
    }
}

fn default_max_concurrency() -> usize {
    8
}

fn default_ai_timeout() -> u64 {
    20
}

fn default_probe_timeout() -> u64 {
    10
}

/// LLM provider type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LlmProvider {
    /// Anthropic Messages API.
    Anthropic,
    /// OpenAI chat completions.
    #[serde(rename = "openai")]
    OpenAi,
    /// Groq (OpenAI-compatible endpoint).
    Groq,
    /// Local Ollama instance (OpenAI-compatible endpoint, no key).
    Ollama,
}

impl LlmProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            LlmProvider::Anthropic => "anthropic",
            LlmProvider::OpenAi => "openai",
            LlmProvider::Groq => "groq",
            LlmProvider::Ollama => "ollama",
        }
    }

    /// Default API base for the provider.
    pub fn default_api_base(&self) -> &'static str {
        match self {
            LlmProvider::Anthropic => "https://api.anthropic.com",
            LlmProvider::OpenAi => "https://api.openai.com/v1",
            LlmProvider::Groq => "https://api.groq.com/openai/v1",
            LlmProvider::Ollama => "http://localhost:11434/v1",
        }
    }
}

/// LLM client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    pub provider: LlmProvider,
    /// Model name/identifier.
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Custom API base URL (for proxies or self-hosted).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
    /// HTTP request timeout in seconds.
    #[serde(default = "default_llm_timeout")]
    pub timeout_secs: u32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_llm_timeout() -> u32 {
    30
}

fn default_max_tokens() -> u32 {
    1000
}

fn default_temperature() -> f32 {
    0.3
}

/// Sanitized config for API responses (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub server: ServerConfig,
    pub candidates: CandidateStoreConfig,
    pub matching: MatchingConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub llm: Option<SanitizedLlmConfig>,
}

/// Sanitized LLM config (API key hidden)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedLlmConfig {
    pub provider: String,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
    pub api_key_configured: bool,
    pub timeout_secs: u32,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            server: config.server.clone(),
            candidates: config.candidates.clone(),
            matching: config.matching.clone(),
            llm: config.llm.as_ref().map(|llm| SanitizedLlmConfig {
                provider: llm.provider.as_str().to_string(),
                model: llm.model.clone(),
                api_base: llm.api_base.clone(),
                api_key_configured: llm.api_key.as_deref().is_some_and(|k| !k.is_empty()),
                timeout_secs: llm.timeout_secs,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host.to_string(), "0.0.0.0");
        assert_eq!(
            config.candidates.path.to_str().unwrap(),
            "data/candidates.json"
        );
        assert_eq!(config.matching.ai_timeout_secs, 20);
        assert!(config.llm.is_none());
    }

    #[test]
    fn test_deserialize_llm_section() {
        let toml = r#"
[llm]
provider = "groq"
model = "mixtral-8x7b-32768"
api_key = "gsk-test"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let llm = config.llm.unwrap();
        assert_eq!(llm.provider, LlmProvider::Groq);
        assert_eq!(llm.model, "mixtral-8x7b-32768");
        assert_eq!(llm.timeout_secs, 30);
        assert_eq!(llm.max_tokens, 1000);
        assert_eq!(llm.temperature, 0.3);
    }

    #[test]
    fn test_deserialize_openai_provider_name() {
        let toml = r#"
[llm]
provider = "openai"
model = "gpt-4o-mini"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.llm.unwrap().provider, LlmProvider::OpenAi);
    }

    #[test]
    fn test_sanitized_config_hides_key() {
        let config = Config {
            llm: Some(LlmConfig {
                provider: LlmProvider::Anthropic,
                model: "claude-3-haiku-20240307".to_string(),
                api_key: Some("sk-secret".to_string()),
                api_base: None,
                timeout_secs: 60,
                max_tokens: 1000,
                temperature: 0.3,
            }),
            ..Default::default()
        };

        let sanitized = SanitizedConfig::from(&config);
        let llm = sanitized.llm.as_ref().unwrap();
        assert_eq!(llm.provider, "anthropic");
        assert!(llm.api_key_configured);

        let json = serde_json::to_string(&sanitized).unwrap();
        assert!(!json.contains("sk-secret"));
    }

    #[test]
    fn test_sanitized_config_without_llm() {
        let sanitized = SanitizedConfig::from(&Config::default());
        assert!(sanitized.llm.is_none());
        assert_eq!(sanitized.server.port, 8080);
    }
}
