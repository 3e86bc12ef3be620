use ecoguard_core::errors::*;
use ecoguard_core::models::IncidentStatus;

#[test]
fn validation_error_carries_field_and_reason() {
    let err = AnalysisError::validation("sensorData", "must not be empty");
    let msg = err.to_string();
    assert!(msg.contains("sensorData"));
    assert!(msg.contains("must not be empty"));
    assert_eq!(err.kind(), AnalysisErrorKind::InvalidInput);
    assert!(!err.is_retryable());
}

#[test]
fn unavailable_error_exposes_retry_hint() {
    let transient = AnalysisError::unavailable("gemini", "connection reset", true);
    assert!(transient.is_retryable());
    assert_eq!(transient.kind(), AnalysisErrorKind::ProviderUnavailable);

    let rate_limited = AnalysisError::unavailable("gemini", "rate limited", false);
    assert!(!rate_limited.is_retryable());
}

#[test]
fn contract_error_is_never_retryable() {
    let err = AnalysisError::contract("gemini", "missing shouldNotifyRangers");
    assert_eq!(err.kind(), AnalysisErrorKind::ProviderContract);
    assert!(!err.is_retryable());
}

#[test]
fn analysis_errors_map_to_distinct_codes() {
    let codes = [
        AnalysisError::validation("f", "r").error_code(),
        AnalysisError::unavailable("p", "r", true).error_code(),
        AnalysisError::contract("p", "r").error_code(),
    ];
    assert_eq!(codes, ["INVALID_INPUT", "PROVIDER_UNAVAILABLE", "PROVIDER_CONTRACT"]);
}

#[test]
fn coded_message_prefixes_code() {
    let err = AnalysisError::contract("gemini", "score out of range");
    assert!(err.coded_message().starts_with("[PROVIDER_CONTRACT] "));
}

#[test]
fn kind_serializes_snake_case() {
    let json = serde_json::to_string(&AnalysisErrorKind::ProviderContract).unwrap();
    assert_eq!(json, "\"provider_contract\"");
    assert_eq!(AnalysisErrorKind::InvalidInput.as_str(), "invalid_input");
}

// --- From impls ---

#[test]
fn analysis_error_converts_to_ecoguard_error() {
    let err: EcoGuardError = AnalysisError::contract("p", "r").into();
    assert!(matches!(err, EcoGuardError::Analysis(_)));
    assert_eq!(err.error_code(), "PROVIDER_CONTRACT");
}

#[test]
fn record_error_converts_to_ecoguard_error() {
    let err: EcoGuardError = RecordError::not_found("incidents", "inc-404").into();
    assert!(matches!(err, EcoGuardError::Record(_)));
    assert_eq!(err.error_code(), "RECORD_NOT_FOUND");
    assert!(err.to_string().contains("inc-404"));
}

#[test]
fn config_error_converts_to_ecoguard_error() {
    let err: EcoGuardError = ConfigError::ValidationFailed {
        field: "provider.model".into(),
        message: "must not be empty".into(),
    }
    .into();
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}

#[test]
fn invalid_transition_names_both_states() {
    let err = RecordError::InvalidTransition {
        id: "inc-1".into(),
        from: IncidentStatus::Resolved,
        to: IncidentStatus::Acknowledged,
    };
    let msg = err.to_string();
    assert!(msg.contains("resolved"));
    assert!(msg.contains("acknowledged"));
    assert_eq!(err.error_code(), "INVALID_TRANSITION");
}
