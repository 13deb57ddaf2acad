//! Mock text-generation client for testing.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::llm::{CompletionRequest, CompletionResponse, LlmClient, LlmError, LlmUsage};

/// Scripted behavior for prompts containing a given substring.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Return this text.
    Text(String),
    /// Fail with an HTTP error carrying this message.
    Fail(String),
    /// Sleep, then return this text.
    Delayed(Duration, String),
}

/// Mock implementation of the LlmClient trait.
///
/// Provides controllable behavior for testing:
/// - A default response for every prompt
/// - Per-candidate replies, matched by a substring of the prompt
///   (usually the candidate's name)
/// - Failures, delays and a failing probe
/// - Call counting and request recording
///
/// # Example
///
/// ```rust,ignore
/// use hiresift_core::testing::{fixtures, MockLlmClient, MockReply};
///
/// let client = MockLlmClient::new();
/// client.reply_for("Name: Ada", MockReply::Text(fixtures::score_json(91))).await;
/// client.reply_for("Name: Bob", MockReply::Fail("boom".into())).await;
/// ```
pub struct MockLlmClient {
    provider: String,
    model: String,
    default_response: Arc<RwLock<String>>,
    replies: Arc<RwLock<Vec<(String, MockReply)>>>,
    requests: Arc<RwLock<Vec<CompletionRequest>>>,
    calls: AtomicUsize,
    probe_fails: AtomicBool,
    usage: LlmUsage,
}

impl std::fmt::Debug for MockLlmClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockLlmClient")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("calls", &self.calls.load(Ordering::SeqCst))
            .finish()
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockLlmClient {
    /// Create a mock answering every prompt with a valid score of 80.
    pub fn new() -> Self {
        Self::with_default_response(super::fixtures::score_json(80))
    }

    /// Create a mock answering every prompt with `response`.
    pub fn with_default_response(response: impl Into<String>) -> Self {
        Self {
            provider: "mock".to_string(),
            model: "mock-model".to_string(),
            default_response: Arc::new(RwLock::new(response.into())),
            replies: Arc::new(RwLock::new(Vec::new())),
            requests: Arc::new(RwLock::new(Vec::new())),
            calls: AtomicUsize::new(0),
            probe_fails: AtomicBool::new(false),
            usage: LlmUsage {
                input_tokens: 120,
                output_tokens: 40,
            },
        }
    }

    /// Make the reachability probe fail.
    pub fn with_failing_probe(self) -> Self {
        self.probe_fails.store(true, Ordering::SeqCst);
        self
    }

    /// Change the response used when no scripted reply matches.
    pub async fn set_default_response(&self, response: impl Into<String>) {
        *self.default_response.write().await = response.into();
    }

    /// Script the reply for prompts containing `needle`. First match wins.
    pub async fn reply_for(&self, needle: impl Into<String>, reply: MockReply) {
        self.replies.write().await.push((needle.into(), reply));
    }

    /// Number of completion calls made (probes excluded).
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Requests received so far.
    pub async fn recorded_requests(&self) -> Vec<CompletionRequest> {
        self.requests.read().await.clone()
    }

    /// Token usage reported for every successful call.
    pub fn usage_per_call(&self) -> LlmUsage {
        self.usage
    }

    async fn reply_to(&self, prompt: &str) -> MockReply {
        let scripted = self
            .replies
            .read()
            .await
            .iter()
            .find(|(needle, _)| prompt.contains(needle.as_str()))
            .map(|(_, reply)| reply.clone());

        match scripted {
            Some(reply) => reply,
            None => MockReply::Text(self.default_response.read().await.clone()),
        }
    }

    fn respond(&self, text: String) -> CompletionResponse {
        CompletionResponse {
            text,
            usage: self.usage,
            model: self.model.clone(),
        }
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    fn provider(&self) -> &str {
        &self.provider
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let reply = self.reply_to(&request.prompt).await;
        self.requests.write().await.push(request);

        match reply {
            MockReply::Text(text) => Ok(self.respond(text)),
            MockReply::Fail(message) => Err(LlmError::Http(message)),
            MockReply::Delayed(delay, text) => {
                tokio::time::sleep(delay).await;
                Ok(self.respond(text))
            }
        }
    }

    async fn probe(&self) -> Result<(), LlmError> {
        if self.probe_fails.load(Ordering::SeqCst) {
            Err(LlmError::Http("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_and_scripted_replies() {
        let client = MockLlmClient::with_default_response("plain");
        client
            .reply_for("Name: Ada", MockReply::Text("for ada".to_string()))
            .await;
        client
            .reply_for("Name: Bob", MockReply::Fail("boom".to_string()))
            .await;

        let ada = client
            .complete(CompletionRequest::new("Name: Ada\n..."))
            .await
            .unwrap();
        assert_eq!(ada.text, "for ada");

        let other = client
            .complete(CompletionRequest::new("Name: Eve"))
            .await
            .unwrap();
        assert_eq!(other.text, "plain");
        assert_eq!(other.usage.input_tokens, 120);

        let bob = client.complete(CompletionRequest::new("Name: Bob")).await;
        assert!(matches!(bob, Err(LlmError::Http(_))));

        assert_eq!(client.call_count(), 3);
        assert_eq!(client.recorded_requests().await.len(), 3);
    }

    #[tokio::test]
    async fn test_probe() {
        assert!(MockLlmClient::new().probe().await.is_ok());

        let failing = MockLlmClient::new().with_failing_probe();
        assert!(failing.probe().await.is_err());
        assert_eq!(failing.call_count(), 0);
    }
}
