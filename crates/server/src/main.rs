use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hiresift_core::{
    create_llm_client, load_config, validate_config, AiScorer, Config, ConfigError, JobAnalyzer,
    LlmClient, MatchEngine, StrategySelector,
};
use hiresift_server::api::create_router;
use hiresift_server::state::AppState;
use hiresift_server::store::CandidateStore;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine config path
    let config_path = std::env::var("HIRESIFT_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration; a missing file means defaults
    info!("Loading configuration from {:?}", config_path);
    let config = match load_config(&config_path) {
        Ok(config) => config,
        Err(ConfigError::FileNotFound(path)) => {
            warn!("Config file {} not found, using defaults", path);
            Config::default()
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to load config from {:?}", config_path))
        }
    };

    validate_config(&config).context("Configuration validation failed")?;

    info!("Configuration loaded successfully");
    info!("Candidate snapshot: {:?}", config.candidates.path);

    // Build the LLM client if one is configured. A client that cannot be
    // built is treated like an unreachable one.
    let llm_client: Option<Arc<dyn LlmClient>> = match &config.llm {
        Some(llm_config) => match create_llm_client(llm_config) {
            Ok(client) => {
                info!(
                    "Initializing {} client (model: {})",
                    client.provider(),
                    client.model()
                );
                Some(client)
            }
            Err(e) => {
                error!("Failed to create LLM client: {}", e);
                None
            }
        },
        None => None,
    };

    let ai_scorer = match (&llm_client, &config.llm) {
        (Some(client), Some(llm_config)) => Some(AiScorer::from_config(client.clone(), llm_config)),
        _ => None,
    };

    // Probe once; the outcome holds for the life of the process
    let strategy = StrategySelector::select(ai_scorer, &config.matching).await;
    info!("Scoring strategy: {}", strategy.name());

    // Job analysis follows the same availability decision as scoring
    let analyzer = match (&llm_client, &config.llm) {
        (Some(client), Some(llm_config)) if strategy.is_ai() => {
            JobAnalyzer::from_config(client.clone(), llm_config)
                .with_timeout(Duration::from_secs(config.matching.ai_timeout_secs))
        }
        _ => JobAnalyzer::new(),
    };
    info!("Job analysis: {}", if analyzer.ai_enabled() { "ai" } else { "keyword" });

    let engine = MatchEngine::new(strategy, config.matching.clone());
    let store = CandidateStore::new(config.candidates.path.clone());

    match store.load().await {
        Ok(candidates) => info!("Candidate pool: {} candidates", candidates.len()),
        Err(e) => warn!("Candidate snapshot unreadable at startup: {}", e),
    }

    let state = Arc::new(AppState::new(config.clone(), engine, store).with_analyzer(analyzer));

    // Create router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(config.server.host, config.server.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
