//! Common test utilities for API testing with mocks.
//!
//! This module provides a test fixture that creates an in-process server
//! backed by a temporary candidate snapshot and, optionally, a mock LLM,
//! so the full HTTP surface can be exercised without external services.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use hiresift_core::{
    testing::MockLlmClient, AiScorer, CandidateStoreConfig, Config, JobAnalyzer, MatchEngine,
    MatchingConfig, ServerConfig, Strategy, StrategySelector,
};
use hiresift_server::{state::AppState, store::CandidateStore};

/// Re-export fixtures for test convenience
pub use hiresift_core::testing::fixtures;

/// Test fixture for API testing.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_search() {
///     let fixture = TestFixture::new().await;
///
///     let response = fixture.post("/api/v1/search", json!({
///         "query": "Senior Python engineer"
///     })).await;
///
///     assert_eq!(response.status, 200);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock LLM, present when AI scoring is enabled
    pub llm: Option<Arc<MockLlmClient>>,
    /// Temporary directory holding the candidate snapshot
    pub temp_dir: TempDir,
    /// Path of the candidate snapshot
    pub snapshot_path: PathBuf,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// Options for building a fixture.
pub struct TestConfig {
    /// Snapshot contents; `None` leaves the file absent.
    pub snapshot: Option<Value>,
    /// Mock LLM to enable AI scoring with.
    pub llm: Option<MockLlmClient>,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            snapshot: Some(sample_snapshot()),
            llm: None,
        }
    }
}

/// The fixture pool as raw snapshot JSON.
pub fn sample_snapshot() -> Value {
    serde_json::to_value(fixtures::sample_pool()).expect("Failed to serialize pool")
}

impl TestFixture {
    /// Deterministic scoring over the sample pool.
    pub async fn new() -> Self {
        Self::with_config(TestConfig::default()).await
    }

    /// AI scoring over the sample pool, using the given mock.
    pub async fn with_llm(llm: MockLlmClient) -> Self {
        Self::with_config(TestConfig {
            llm: Some(llm),
            ..Default::default()
        })
        .await
    }

    /// Create a test fixture with custom configuration.
    pub async fn with_config(test_config: TestConfig) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let snapshot_path = temp_dir.path().join("candidates.json");

        if let Some(snapshot) = &test_config.snapshot {
            std::fs::write(&snapshot_path, snapshot.to_string())
                .expect("Failed to write snapshot");
        }

        let matching = MatchingConfig {
            max_concurrency: 4,
            ai_timeout_secs: 2,
            probe_timeout_secs: 1,
        };

        let config = Config {
            server: ServerConfig {
                host: std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
                port: 0, // Not used for in-process testing
            },
            candidates: CandidateStoreConfig {
                path: snapshot_path.clone(),
            },
            matching: matching.clone(),
            llm: None,
        };

        let (strategy, llm) = match test_config.llm {
            Some(mock) => {
                let mock = Arc::new(mock);
                let scorer = AiScorer::new(mock.clone());
                (StrategySelector::select(Some(scorer), &matching).await, Some(mock))
            }
            None => (Strategy::Deterministic, None),
        };

        let analyzer = match &llm {
            Some(mock) if strategy.is_ai() => {
                JobAnalyzer::with_llm(mock.clone()).with_timeout(Duration::from_secs(2))
            }
            _ => JobAnalyzer::new(),
        };

        let state = Arc::new(
            AppState::new(
                config,
                MatchEngine::new(strategy, matching),
                CandidateStore::new(snapshot_path.clone()),
            )
            .with_analyzer(analyzer),
        );

        // Create router
        let router = hiresift_server::api::create_router(state);

        Self {
            router,
            llm,
            temp_dir,
            snapshot_path,
        }
    }

    /// Replace the snapshot on disk.
    pub fn write_snapshot(&self, snapshot: &Value) {
        std::fs::write(&self.snapshot_path, snapshot.to_string())
            .expect("Failed to write snapshot");
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }

    /// Send a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request("POST", path, Some(body)).await
    }

    /// Send a GET request and return the raw text body.
    pub async fn get_text(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        (status, String::from_utf8_lossy(&bytes).to_string())
    }

    /// Send a request to the test server.
    async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let mut request_builder = Request::builder().method(method).uri(path);

        let body = match body {
            Some(json) => {
                request_builder = request_builder.header("Content-Type", "application/json");
                Body::from(serde_json::to_string(&json).unwrap())
            }
            None => Body::empty(),
        };

        let request = request_builder.body(body).unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}
