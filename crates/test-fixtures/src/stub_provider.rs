//! Scripted in-process inference provider.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use ecoguard_core::errors::AnalysisError;
use ecoguard_core::traits::{GenerationRequest, IInferenceProvider};

/// What the stub does on one call.
#[derive(Debug, Clone)]
pub enum StubReply {
    /// Return this payload.
    Payload(serde_json::Value),
    /// Fail with this error.
    Error(AnalysisError),
    /// Wait, then return the payload.
    Delayed(Duration, serde_json::Value),
    /// Never complete.
    Hang,
}

/// Provider stub that replays scripted replies and records every request.
///
/// Replies are consumed in order; the last one repeats once the script
/// runs out.
#[derive(Debug)]
pub struct StubProvider {
    name: String,
    script: Mutex<VecDeque<StubReply>>,
    requests: Mutex<Vec<GenerationRequest>>,
    calls: AtomicUsize,
}

impl StubProvider {
    pub fn scripted(replies: Vec<StubReply>) -> Self {
        assert!(!replies.is_empty(), "stub needs at least one reply");
        Self {
            name: "stub".to_string(),
            script: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn returning(payload: serde_json::Value) -> Self {
        Self::scripted(vec![StubReply::Payload(payload)])
    }

    pub fn failing(error: AnalysisError) -> Self {
        Self::scripted(vec![StubReply::Error(error)])
    }

    pub fn hanging() -> Self {
        Self::scripted(vec![StubReply::Hang])
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Number of times `generate` was entered.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn was_called(&self) -> bool {
        self.calls() > 0
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().expect("stub request log poisoned").clone()
    }

    fn next_reply(&self) -> StubReply {
        let mut script = self.script.lock().expect("stub script poisoned");
        if script.len() > 1 {
            script.pop_front().expect("script is non-empty")
        } else {
            script.front().cloned().expect("script is non-empty")
        }
    }
}

impl IInferenceProvider for StubProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<serde_json::Value, AnalysisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .expect("stub request log poisoned")
            .push(request.clone());

        match self.next_reply() {
            StubReply::Payload(value) => Ok(value),
            StubReply::Error(err) => Err(err),
            StubReply::Delayed(delay, value) => {
                tokio::time::sleep(delay).await;
                Ok(value)
            }
            StubReply::Hang => std::future::pending().await,
        }
    }
}
