use super::{types::Config, ConfigError, LlmProvider};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Matching concurrency and timeouts are non-zero
/// - LLM section (when present) names a model and can authenticate
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    let matching = &config.matching;
    if matching.max_concurrency == 0 {
        return Err(ConfigError::ValidationError(
            "matching.max_concurrency must be at least 1".to_string(),
        ));
    }
    if matching.ai_timeout_secs == 0 || matching.probe_timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "matching timeouts must be greater than 0".to_string(),
        ));
    }

    if let Some(llm) = &config.llm {
        if llm.model.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "llm.model cannot be empty".to_string(),
            ));
        }
        if !(0.0..=2.0).contains(&llm.temperature) {
            return Err(ConfigError::ValidationError(format!(
                "llm.temperature must be between 0.0 and 2.0, got {}",
                llm.temperature
            )));
        }
        // Local Ollama needs no key; hosted providers need a key or a proxy base
        if llm.provider != LlmProvider::Ollama && llm.api_key.is_none() && llm.api_base.is_none() {
            return Err(ConfigError::ValidationError(format!(
                "llm provider {:?} requires api_key or api_base",
                llm.provider
            )));
        }
    }

    Ok(())
}
