//! Structured log events for key system operations.
//!
//! Each function emits a `tracing` event with structured fields. Request
//! text never reaches the log; callers pass the prompt fingerprint instead.

use ecoguard_core::errors::{AnalysisError, AnalysisErrorKind};

/// Log the start of an analysis.
pub fn analysis_started(fingerprint: &str, sensor_chars: usize, historical_chars: usize) {
    tracing::debug!(
        event = "analysis_started",
        fingerprint = %fingerprint,
        sensor_chars = sensor_chars,
        historical_chars = historical_chars,
        "confidence analysis started"
    );
}

/// Log a successful analysis.
pub fn analysis_completed(
    fingerprint: &str,
    provider: &str,
    confidence_score: f64,
    should_notify_rangers: bool,
    elapsed_ms: u64,
) {
    tracing::info!(
        event = "analysis_completed",
        fingerprint = %fingerprint,
        provider = %provider,
        confidence_score = confidence_score,
        should_notify_rangers = should_notify_rangers,
        elapsed_ms = elapsed_ms,
        "confidence analysis completed"
    );
}

/// Log a failed analysis at a level matching its kind.
///
/// Contract violations go out at `error` under their own event name since
/// they point at prompt or provider drift rather than a transient fault.
pub fn analysis_failed(fingerprint: Option<&str>, error: &AnalysisError) {
    let fingerprint = fingerprint.unwrap_or("-");
    match error.kind() {
        AnalysisErrorKind::InvalidInput => tracing::info!(
            event = "analysis_rejected",
            kind = AnalysisErrorKind::InvalidInput.as_str(),
            fingerprint = %fingerprint,
            error = %error,
            "confidence analysis rejected invalid input"
        ),
        AnalysisErrorKind::ProviderUnavailable => tracing::warn!(
            event = "provider_unavailable",
            kind = AnalysisErrorKind::ProviderUnavailable.as_str(),
            fingerprint = %fingerprint,
            retryable = error.is_retryable(),
            error = %error,
            "inference provider unavailable"
        ),
        AnalysisErrorKind::ProviderContract => tracing::error!(
            event = "provider_contract_violation",
            kind = AnalysisErrorKind::ProviderContract.as_str(),
            fingerprint = %fingerprint,
            error = %error,
            "inference provider violated output contract"
        ),
    }
}

/// Log a provider retry.
pub fn provider_retry(
    provider: &str,
    attempt: u32,
    max_retries: u32,
    backoff_ms: u64,
    reason: &str,
) {
    tracing::debug!(
        event = "provider_retry",
        provider = %provider,
        attempt = attempt,
        max_retries = max_retries,
        backoff_ms = backoff_ms,
        reason = %reason,
        "retrying inference provider call"
    );
}

/// Log an incident creation.
pub fn incident_created(incident_id: &str, tree_id: &str, confidence: f64) {
    tracing::info!(
        event = "incident_created",
        incident_id = %incident_id,
        tree_id = %tree_id,
        confidence = confidence,
        "incident created"
    );
}

/// Log an incident status change.
pub fn incident_status_changed(incident_id: &str, from: &str, to: &str, actor: &str) {
    tracing::info!(
        event = "incident_status_changed",
        incident_id = %incident_id,
        from = %from,
        to = %to,
        actor = %actor,
        "incident status changed"
    );
}

/// Log an analysis result stored on an incident.
pub fn analysis_recorded(incident_id: &str, confidence_score: f64, should_notify_rangers: bool) {
    tracing::info!(
        event = "analysis_recorded",
        incident_id = %incident_id,
        confidence_score = confidence_score,
        should_notify_rangers = should_notify_rangers,
        "analysis recorded on incident"
    );
}

/// Log a record deletion.
pub fn record_deleted(collection: &str, id: &str) {
    tracing::info!(
        event = "record_deleted",
        collection = %collection,
        id = %id,
        "record deleted"
    );
}
