//! ConfidenceAnalyzer: input check, prompt, provider call, output check.

use std::time::Instant;

use ecoguard_core::config::AnalyzerConfig;
use ecoguard_core::constants::FIELD_PROMPT;
use ecoguard_core::errors::AnalysisError;
use ecoguard_core::models::{ConfidenceRequest, ConfidenceResult};
use ecoguard_core::traits::{GenerationRequest, IInferenceProvider};
use ecoguard_observability::tracing_setup::events;
use ecoguard_observability::{AnalysisMetrics, AnalysisMetricsSnapshot};
use tracing::Instrument;

use crate::prompt::render_prompt;
use crate::schema::{output_schema, parse_request, validate_output, validate_request};
use crate::tokens::count_tokens;

/// Stateless confidence analyzer over an injected inference provider.
///
/// Concurrent calls share nothing but the provider handle and the outcome
/// counters. Dropping an `analyze` future abandons its provider call.
pub struct ConfidenceAnalyzer<P> {
    provider: P,
    config: AnalyzerConfig,
    metrics: AnalysisMetrics,
}

impl<P: IInferenceProvider> ConfidenceAnalyzer<P> {
    pub fn new(provider: P, config: AnalyzerConfig) -> Self {
        Self {
            provider,
            config,
            metrics: AnalysisMetrics::new(),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn metrics(&self) -> AnalysisMetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Validate a request and build the provider call for it, without
    /// touching the provider.
    pub fn prepare(&self, request: &ConfidenceRequest) -> Result<GenerationRequest, AnalysisError> {
        validate_request(request, &self.config)?;

        let prompt = render_prompt(request);
        let tokens = count_tokens(&prompt.text);
        if tokens > self.config.max_prompt_tokens {
            return Err(AnalysisError::validation(
                FIELD_PROMPT,
                format!(
                    "rendered prompt is {tokens} tokens, limit is {}",
                    self.config.max_prompt_tokens
                ),
            ));
        }

        Ok(GenerationRequest {
            prompt: prompt.text,
            fingerprint: prompt.fingerprint,
            output_schema: output_schema(),
        })
    }

    /// Estimate the confidence level of an incident.
    pub async fn analyze(
        &self,
        request: &ConfidenceRequest,
    ) -> Result<ConfidenceResult, AnalysisError> {
        let generation = self.prepare(request).map_err(|e| self.fail(None, e))?;
        let span = ecoguard_observability::analysis_span!(generation.fingerprint);
        self.run(request, &generation).instrument(span).await
    }

    /// Same as [`analyze`](Self::analyze) for an untyped inbound payload.
    pub async fn analyze_json(
        &self,
        payload: &serde_json::Value,
    ) -> Result<ConfidenceResult, AnalysisError> {
        let request = parse_request(payload).map_err(|e| self.fail(None, e))?;
        self.analyze(&request).await
    }

    async fn run(
        &self,
        request: &ConfidenceRequest,
        generation: &GenerationRequest,
    ) -> Result<ConfidenceResult, AnalysisError> {
        let fingerprint = generation.fingerprint.as_str();
        events::analysis_started(
            fingerprint,
            request.sensor_data.chars().count(),
            request.historical_incident_data.chars().count(),
        );

        let started = Instant::now();
        let deadline = self.config.request_deadline();
        let payload = match tokio::time::timeout(deadline, self.provider.generate(generation)).await
        {
            Ok(Ok(payload)) => payload,
            Ok(Err(e)) => return Err(self.fail(Some(fingerprint), e)),
            Err(_elapsed) => {
                let e = AnalysisError::unavailable(
                    self.provider.name(),
                    format!("no response within {}ms", deadline.as_millis()),
                    true,
                );
                return Err(self.fail(Some(fingerprint), e));
            }
        };

        let result = validate_output(&payload, self.provider.name())
            .map_err(|e| self.fail(Some(fingerprint), e))?;

        self.metrics.record_success(result.should_notify_rangers);
        events::analysis_completed(
            fingerprint,
            self.provider.name(),
            result.confidence_score,
            result.should_notify_rangers,
            started.elapsed().as_millis() as u64,
        );
        Ok(result)
    }

    fn fail(&self, fingerprint: Option<&str>, error: AnalysisError) -> AnalysisError {
        self.metrics.record_failure(error.kind());
        events::analysis_failed(fingerprint, &error);
        error
    }
}
