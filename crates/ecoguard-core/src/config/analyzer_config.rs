use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Confidence analyzer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Maximum length of each request field, in characters.
    pub max_field_chars: usize,
    /// Maximum size of the rendered prompt, in tokens.
    pub max_prompt_tokens: usize,
    /// Overall deadline for the provider call, retries included (milliseconds).
    pub request_deadline_ms: u64,
}

impl AnalyzerConfig {
    pub fn request_deadline(&self) -> Duration {
        Duration::from_millis(self.request_deadline_ms)
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_field_chars: defaults::DEFAULT_MAX_FIELD_CHARS,
            max_prompt_tokens: defaults::DEFAULT_MAX_PROMPT_TOKENS,
            request_deadline_ms: defaults::DEFAULT_REQUEST_DEADLINE_MS,
        }
    }
}
