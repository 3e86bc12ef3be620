use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::errors::AnalysisError;

/// A rendered prompt plus the schema the answer must conform to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Fully rendered prompt text.
    pub prompt: String,
    /// Content fingerprint of `prompt`, safe to log.
    pub fingerprint: String,
    /// JSON schema describing the required structured output.
    pub output_schema: serde_json::Value,
}

/// Model-inference provider producing schema-constrained structured output.
///
/// Implementations return the raw decoded JSON payload. Checking that payload
/// against the output schema is the caller's job, so a provider must not
/// repair or default missing fields.
///
/// Errors must be `ProviderUnavailable` (could not get an answer) or
/// `ProviderContract` (got an answer that is not structured output at all).
pub trait IInferenceProvider: Send + Sync {
    /// Human-readable provider name, used in errors and logs.
    fn name(&self) -> &str;

    /// Run one generation. Dropping the returned future abandons the call.
    fn generate(
        &self,
        request: &GenerationRequest,
    ) -> impl Future<Output = Result<serde_json::Value, AnalysisError>> + Send;
}
