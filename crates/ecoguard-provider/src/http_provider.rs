//! HTTP inference provider with retry, exponential backoff, timeout, and gzip.

use std::fmt;
use std::time::Duration;

use ecoguard_core::config::ProviderConfig;
use ecoguard_core::errors::{AnalysisError, ConfigError};
use ecoguard_core::traits::{GenerationRequest, IInferenceProvider};
use ecoguard_observability::tracing_setup::events;
use reqwest::StatusCode;
use tracing::Instrument;

use crate::protocol::{GenerateContentRequest, GenerateContentResponse};

/// Name the provider reports in errors and logs.
pub const PROVIDER_NAME: &str = "gemini";

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Error bodies are cut to this many characters before being surfaced.
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Resolved settings for one provider instance.
#[derive(Clone)]
pub struct HttpProviderConfig {
    /// Base URL of the inference API, without a trailing slash.
    pub base_url: String,
    pub model: String,
    pub api_key: String,
    /// Per-attempt timeout.
    pub timeout: Duration,
    /// Retries after the first attempt, for retryable failures only.
    pub max_retries: u32,
    /// Initial backoff (doubles each retry).
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
    pub temperature: f64,
}

impl HttpProviderConfig {
    /// Resolve settings from config, reading the API key through `lookup`.
    pub fn from_config<F>(config: &ProviderConfig, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(&config.api_key_env)
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ConfigError::ValidationFailed {
                field: "provider.api_key_env".to_string(),
                message: format!("environment variable {} is not set", config.api_key_env),
            })?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
            timeout: config.timeout(),
            max_retries: config.max_retries,
            initial_backoff: config.initial_backoff(),
            max_backoff: config.max_backoff(),
            temperature: config.temperature,
        })
    }

    /// Resolve settings from config, reading the API key from the process environment.
    pub fn from_env(config: &ProviderConfig) -> Result<Self, ConfigError> {
        Self::from_config(config, |key| std::env::var(key).ok())
    }
}

impl fmt::Debug for HttpProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpProviderConfig")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .field("initial_backoff", &self.initial_backoff)
            .field("max_backoff", &self.max_backoff)
            .field("temperature", &self.temperature)
            .finish()
    }
}

/// Inference provider backed by a `generateContent` HTTP endpoint.
///
/// Holds one pooled `reqwest::Client`; safe to share across concurrent
/// analyses.
#[derive(Debug)]
pub struct HttpInferenceProvider {
    config: HttpProviderConfig,
    endpoint: String,
    client: reqwest::Client,
}

impl HttpInferenceProvider {
    pub fn new(config: HttpProviderConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .gzip(true)
            .build()
            .map_err(|e| ConfigError::ValidationFailed {
                field: "provider".to_string(),
                message: format!("HTTP client could not be built: {e}"),
            })?;
        let endpoint = format!("{}/models/{}:generateContent", config.base_url, config.model);

        Ok(Self {
            config,
            endpoint,
            client,
        })
    }

    /// Build from config with the API key taken from the process environment.
    pub fn from_provider_config(config: &ProviderConfig) -> Result<Self, ConfigError> {
        Self::new(HttpProviderConfig::from_env(config)?)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn config(&self) -> &HttpProviderConfig {
        &self.config
    }

    /// Retry loop around [`send_once`](Self::send_once).
    async fn send_with_retry(
        &self,
        body: &GenerateContentRequest,
    ) -> Result<serde_json::Value, AnalysisError> {
        let mut backoff = self.config.initial_backoff;
        let mut attempt = 0;

        loop {
            match self.send_once(body).await {
                Ok(payload) => return Ok(payload),
                Err(e) if e.is_retryable() && attempt < self.config.max_retries => {
                    attempt += 1;
                    events::provider_retry(
                        PROVIDER_NAME,
                        attempt,
                        self.config.max_retries,
                        backoff.as_millis() as u64,
                        &e.to_string(),
                    );
                    tokio::time::sleep(backoff).await;
                    backoff = (backoff * 2).min(self.config.max_backoff);
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn send_once(
        &self,
        body: &GenerateContentRequest,
    ) -> Result<serde_json::Value, AnalysisError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(AnalysisError::unavailable(
                PROVIDER_NAME,
                "rate limited (HTTP 429)",
                false,
            ));
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AnalysisError::unavailable(
                PROVIDER_NAME,
                format!("HTTP {status}: {}", truncate(&text)),
                status.is_server_error(),
            ));
        }

        let bytes = response.bytes().await.map_err(|e| self.transport_error(&e))?;
        let envelope: GenerateContentResponse = serde_json::from_slice(&bytes).map_err(|e| {
            AnalysisError::contract(PROVIDER_NAME, format!("undecodable response envelope: {e}"))
        })?;
        envelope.into_payload(PROVIDER_NAME)
    }

    fn transport_error(&self, e: &reqwest::Error) -> AnalysisError {
        let reason = if e.is_timeout() {
            format!("timed out after {}ms", self.config.timeout.as_millis())
        } else {
            format!("transport error: {e}")
        };
        AnalysisError::unavailable(PROVIDER_NAME, reason, true)
    }
}

impl IInferenceProvider for HttpInferenceProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<serde_json::Value, AnalysisError> {
        let body = GenerateContentRequest::structured(
            &request.prompt,
            request.output_schema.clone(),
            self.config.temperature,
        );
        let span = ecoguard_observability::provider_span!(PROVIDER_NAME, self.config.model);
        self.send_with_retry(&body).instrument(span).await
    }
}

fn truncate(text: &str) -> String {
    let text = text.trim();
    match text.char_indices().nth(MAX_ERROR_BODY_CHARS) {
        Some((cut, _)) => format!("{}…", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key(key: Option<&str>) -> Result<HttpProviderConfig, ConfigError> {
        let key = key.map(str::to_string);
        HttpProviderConfig::from_config(&ProviderConfig::default(), move |_| key.clone())
    }

    #[test]
    fn missing_or_blank_key_is_a_config_error() {
        for key in [None, Some(""), Some("   ")] {
            let err = config_with_key(key).unwrap_err();
            assert!(matches!(err, ConfigError::ValidationFailed { .. }));
            assert!(err.to_string().contains("GEMINI_API_KEY"));
        }
    }

    #[test]
    fn from_env_reads_the_configured_variable() {
        let config = ProviderConfig {
            api_key_env: "ECOGUARD_TEST_KEY_FROM_ENV".to_string(),
            model: "m-env".to_string(),
            ..ProviderConfig::default()
        };
        std::env::set_var(&config.api_key_env, "env-key");

        let resolved = HttpProviderConfig::from_env(&config).unwrap();
        assert_eq!(resolved.api_key, "env-key");

        let provider = HttpInferenceProvider::from_provider_config(&config).unwrap();
        assert_eq!(provider.config().api_key, "env-key");
        assert!(provider.endpoint().ends_with("/models/m-env:generateContent"));
    }

    #[test]
    fn from_env_fails_when_variable_is_unset() {
        let config = ProviderConfig {
            api_key_env: "ECOGUARD_TEST_KEY_NEVER_SET".to_string(),
            ..ProviderConfig::default()
        };
        std::env::remove_var(&config.api_key_env);

        let err = HttpProviderConfig::from_env(&config).unwrap_err();
        assert!(err.to_string().contains("ECOGUARD_TEST_KEY_NEVER_SET"));
        assert!(matches!(
            HttpInferenceProvider::from_provider_config(&config),
            Err(ConfigError::ValidationFailed { .. })
        ));
    }

    #[test]
    fn endpoint_targets_model() {
        let mut config = config_with_key(Some("k")).unwrap();
        config.base_url = "http://localhost:9".to_string();
        config.model = "m-1".to_string();
        let provider = HttpInferenceProvider::new(config).unwrap();
        assert_eq!(provider.endpoint(), "http://localhost:9/models/m-1:generateContent");
    }

    #[test]
    fn trailing_slash_is_dropped() {
        let config = ProviderConfig {
            base_url: "http://host/v1beta/".to_string(),
            ..ProviderConfig::default()
        };
        let resolved = HttpProviderConfig::from_config(&config, |_| Some("k".into())).unwrap();
        assert_eq!(resolved.base_url, "http://host/v1beta");
    }

    #[test]
    fn debug_output_redacts_key() {
        let config = config_with_key(Some("secret-key")).unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn truncate_caps_long_bodies() {
        assert_eq!(truncate("  short  "), "short");
        let long = "é".repeat(500);
        assert_eq!(truncate(&long).chars().count(), MAX_ERROR_BODY_CHARS + 1);
    }
}
