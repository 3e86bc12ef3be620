//! Top-level EcoGuard configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{AnalyzerConfig, ObservabilityConfig, ProviderConfig};
use crate::constants::CONFIG_FILENAME;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`ECOGUARD_*`)
/// 2. Project config (`ecoguard.toml` in the given root)
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EcoGuardConfig {
    pub analyzer: AnalyzerConfig,
    pub provider: ProviderConfig,
    pub observability: ObservabilityConfig,
}

impl EcoGuardConfig {
    /// Load configuration for a project root, reading the process environment.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        Self::load_with(root, |key| std::env::var(key).ok())
    }

    /// Load configuration with an explicit environment lookup.
    pub fn load_with<F>(root: &Path, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = root.join(CONFIG_FILENAME);
        let mut config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_env_overrides(lookup);
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML file. Missing keys fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply environment variable overrides.
    /// Pattern: `ECOGUARD_PROVIDER_MODEL`, `ECOGUARD_ANALYZER_MAX_FIELD_CHARS`, etc.
    /// Values that fail to parse are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = parse_var(&lookup, "ECOGUARD_ANALYZER_MAX_FIELD_CHARS") {
            self.analyzer.max_field_chars = v;
        }
        if let Some(v) = parse_var(&lookup, "ECOGUARD_ANALYZER_MAX_PROMPT_TOKENS") {
            self.analyzer.max_prompt_tokens = v;
        }
        if let Some(v) = parse_var(&lookup, "ECOGUARD_ANALYZER_REQUEST_DEADLINE_MS") {
            self.analyzer.request_deadline_ms = v;
        }
        if let Some(v) = lookup("ECOGUARD_PROVIDER_BASE_URL") {
            self.provider.base_url = v;
        }
        if let Some(v) = lookup("ECOGUARD_PROVIDER_MODEL") {
            self.provider.model = v;
        }
        if let Some(v) = lookup("ECOGUARD_PROVIDER_API_KEY_ENV") {
            self.provider.api_key_env = v;
        }
        if let Some(v) = parse_var(&lookup, "ECOGUARD_PROVIDER_TIMEOUT_MS") {
            self.provider.timeout_ms = v;
        }
        if let Some(v) = parse_var(&lookup, "ECOGUARD_PROVIDER_MAX_RETRIES") {
            self.provider.max_retries = v;
        }
        if let Some(v) = parse_var(&lookup, "ECOGUARD_PROVIDER_TEMPERATURE") {
            self.provider.temperature = v;
        }
        if let Some(v) = lookup("ECOGUARD_OBSERVABILITY_LOG_LEVEL") {
            self.observability.log_level = v;
        }
        if let Some(v) = parse_var(&lookup, "ECOGUARD_OBSERVABILITY_JSON") {
            self.observability.json = v;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.analyzer.max_field_chars == 0 {
            return Err(invalid("analyzer.max_field_chars", "must be greater than 0"));
        }
        if self.analyzer.max_prompt_tokens == 0 {
            return Err(invalid("analyzer.max_prompt_tokens", "must be greater than 0"));
        }
        if self.analyzer.request_deadline_ms == 0 {
            return Err(invalid("analyzer.request_deadline_ms", "must be greater than 0"));
        }
        if self.provider.base_url.trim().is_empty() {
            return Err(invalid("provider.base_url", "must not be empty"));
        }
        if self.provider.model.trim().is_empty() {
            return Err(invalid("provider.model", "must not be empty"));
        }
        if self.provider.timeout_ms == 0 {
            return Err(invalid("provider.timeout_ms", "must be greater than 0"));
        }
        if !(0.0..=2.0).contains(&self.provider.temperature) {
            return Err(invalid("provider.temperature", "must be between 0.0 and 2.0"));
        }
        if self.provider.initial_backoff_ms > self.provider.max_backoff_ms {
            return Err(invalid(
                "provider.initial_backoff_ms",
                "must not exceed provider.max_backoff_ms",
            ));
        }
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key).and_then(|v| v.trim().parse().ok())
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
