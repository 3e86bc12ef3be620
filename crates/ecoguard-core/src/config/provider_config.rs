use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Model-inference provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Base URL of the inference API, without a trailing slash.
    pub base_url: String,
    /// Model identifier, e.g. "gemini-2.0-flash".
    pub model: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Maximum retry attempts for transient failures. Zero disables retries.
    pub max_retries: u32,
    /// Initial backoff in milliseconds (doubles each retry).
    pub initial_backoff_ms: u64,
    /// Backoff ceiling in milliseconds.
    pub max_backoff_ms: u64,
    /// Sampling temperature passed to the model.
    pub temperature: f64,
}

impl ProviderConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn initial_backoff(&self) -> Duration {
        Duration::from_millis(self.initial_backoff_ms)
    }

    pub fn max_backoff(&self) -> Duration {
        Duration::from_millis(self.max_backoff_ms)
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::DEFAULT_PROVIDER_BASE_URL.to_string(),
            model: defaults::DEFAULT_PROVIDER_MODEL.to_string(),
            api_key_env: defaults::DEFAULT_API_KEY_ENV.to_string(),
            timeout_ms: defaults::DEFAULT_PROVIDER_TIMEOUT_MS,
            max_retries: defaults::DEFAULT_MAX_RETRIES,
            initial_backoff_ms: defaults::DEFAULT_INITIAL_BACKOFF_MS,
            max_backoff_ms: defaults::DEFAULT_MAX_BACKOFF_MS,
            temperature: defaults::DEFAULT_TEMPERATURE,
        }
    }
}
