pub mod analytics;
pub mod candidate;
pub mod config;
pub mod jobs;
pub mod llm;
pub mod matching;
pub mod metrics;
pub mod query;
pub mod testing;

pub use analytics::{pool_analytics, PoolAnalytics};
pub use candidate::{candidates_from_value, Candidate, EducationEntry, ExperienceEntry};
pub use config::{
    load_config, load_config_from_str, validate_config, CandidateStoreConfig, Config, ConfigError,
    LlmConfig, LlmProvider, MatchingConfig, SanitizedConfig, ServerConfig,
};
pub use jobs::{keyword_analysis, AnalysisError, AnalysisMethod, JobAnalysis, JobAnalyzer};
pub use llm::{create_llm_client, LlmClient, LlmError, LlmUsage};
pub use matching::{
    apply_filters, filters_from_value, AiScorer, MatchCriteria, MatchEngine, MatchError,
    MatchScore, OverallFit, RankingResult, ScoredCandidate, ScoringMethod, Strategy,
    StrategySelector,
};
pub use query::{
    parse_query, query_examples, validate_query, ParsedQuery, QueryFilters, QueryValidation,
};
