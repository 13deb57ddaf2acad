use hiresift_core::{Config, JobAnalyzer, MatchEngine, SanitizedConfig};

use crate::store::CandidateStore;

/// Shared application state
pub struct AppState {
    config: Config,
    engine: MatchEngine,
    store: CandidateStore,
    analyzer: JobAnalyzer,
}

impl AppState {
    pub fn new(config: Config, engine: MatchEngine, store: CandidateStore) -> Self {
        Self {
            config,
            engine,
            store,
            analyzer: JobAnalyzer::new(),
        }
    }

    /// Replace the keyword-only job analyzer.
    pub fn with_analyzer(mut self, analyzer: JobAnalyzer) -> Self {
        self.analyzer = analyzer;
        self
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    pub fn store(&self) -> &CandidateStore {
        &self.store
    }

    pub fn analyzer(&self) -> &JobAnalyzer {
        &self.analyzer
    }
}
