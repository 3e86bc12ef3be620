//! Wire types for the structured-output `generateContent` call.

use ecoguard_core::errors::AnalysisError;
use serde::{Deserialize, Serialize};

/// MIME type requesting a bare JSON document as the model's reply.
pub const JSON_MIME_TYPE: &str = "application/json";

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// Single user turn asking for JSON shaped by `response_schema`.
    pub fn structured(prompt: &str, response_schema: serde_json::Value, temperature: f64) -> Self {
        Self {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: JSON_MIME_TYPE.to_string(),
                response_schema,
                temperature,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: serde_json::Value,
    pub temperature: f64,
}

/// Response envelope. Only the fields needed to extract the reply are read.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Decode the first candidate's text as a JSON value.
    ///
    /// The value is returned as-is; checking it against the output schema is
    /// the caller's job.
    pub fn into_payload(self, provider: &str) -> Result<serde_json::Value, AnalysisError> {
        if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(AnalysisError::contract(
                provider,
                format!("prompt blocked: {reason}"),
            ));
        }

        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| AnalysisError::contract(provider, "response has no candidates"))?;

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().map(|p| p.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            let finish = candidate.finish_reason.as_deref().unwrap_or("unknown");
            return Err(AnalysisError::contract(
                provider,
                format!("candidate has no text (finish reason {finish})"),
            ));
        }

        serde_json::from_str(&text).map_err(|e| {
            AnalysisError::contract(provider, format!("candidate text is not JSON: {e}"))
        })
    }
}
