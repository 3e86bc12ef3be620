//! Confidence-analysis errors.

use serde::{Deserialize, Serialize};

use super::error_code::{self, ErrorCode};

/// The three failure kinds an analysis can surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisErrorKind {
    /// Caller input is malformed; the provider was never called.
    InvalidInput,
    /// The provider could not be reached or refused the call.
    ProviderUnavailable,
    /// The provider answered with a payload that breaks the output schema.
    ProviderContract,
}

impl AnalysisErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::ProviderUnavailable => "provider_unavailable",
            Self::ProviderContract => "provider_contract",
        }
    }
}

/// Errors that can occur while analyzing an incident's confidence level.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    #[error("invalid input for {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("provider {provider} unavailable: {reason}")]
    ProviderUnavailable {
        provider: String,
        reason: String,
        retryable: bool,
    },

    #[error("provider {provider} violated the output contract: {reason}")]
    ProviderContract { provider: String, reason: String },
}

impl AnalysisError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn unavailable(
        provider: impl Into<String>,
        reason: impl Into<String>,
        retryable: bool,
    ) -> Self {
        Self::ProviderUnavailable {
            provider: provider.into(),
            reason: reason.into(),
            retryable,
        }
    }

    pub fn contract(provider: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ProviderContract {
            provider: provider.into(),
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> AnalysisErrorKind {
        match self {
            Self::Validation { .. } => AnalysisErrorKind::InvalidInput,
            Self::ProviderUnavailable { .. } => AnalysisErrorKind::ProviderUnavailable,
            Self::ProviderContract { .. } => AnalysisErrorKind::ProviderContract,
        }
    }

    /// Whether a caller may reasonably retry the same request unchanged.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ProviderUnavailable {
                retryable: true,
                ..
            }
        )
    }
}

impl ErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => error_code::INVALID_INPUT,
            Self::ProviderUnavailable { .. } => error_code::PROVIDER_UNAVAILABLE,
            Self::ProviderContract { .. } => error_code::PROVIDER_CONTRACT,
        }
    }
}
