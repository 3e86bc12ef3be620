//! Data contracts for the analyzer's input and output.
//!
//! Every check here is a plain function over values, callable without a
//! provider. Input failures are `Validation`; output failures are
//! `ProviderContract`. Nothing is clamped or coerced.

use ecoguard_core::config::AnalyzerConfig;
use ecoguard_core::constants::{
    CONFIDENCE_MAX, CONFIDENCE_MIN, FIELD_CONFIDENCE_SCORE, FIELD_HISTORICAL_INCIDENT_DATA,
    FIELD_SENSOR_DATA, FIELD_SHOULD_NOTIFY_RANGERS,
};
use ecoguard_core::errors::AnalysisError;
use ecoguard_core::models::{ConfidenceRequest, ConfidenceResult};
use serde_json::{json, Map, Value};

/// Build a typed request from an untyped inbound payload.
///
/// Only shape is checked here (object, both fields present, both strings);
/// content limits are applied by [`validate_request`].
pub fn parse_request(payload: &Value) -> Result<ConfidenceRequest, AnalysisError> {
    let object = payload.as_object().ok_or_else(|| {
        AnalysisError::validation(
            "request",
            format!("expected a JSON object, got {}", type_name(payload)),
        )
    })?;

    Ok(ConfidenceRequest {
        sensor_data: required_string(object, FIELD_SENSOR_DATA)?,
        historical_incident_data: required_string(object, FIELD_HISTORICAL_INCIDENT_DATA)?,
    })
}

/// Check a typed request against the input contract.
pub fn validate_request(
    request: &ConfidenceRequest,
    config: &AnalyzerConfig,
) -> Result<(), AnalysisError> {
    check_text(FIELD_SENSOR_DATA, &request.sensor_data, config.max_field_chars)?;
    check_text(
        FIELD_HISTORICAL_INCIDENT_DATA,
        &request.historical_incident_data,
        config.max_field_chars,
    )
}

/// JSON schema of the structured output the provider must produce.
pub fn output_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            FIELD_CONFIDENCE_SCORE: {
                "type": "number",
                "minimum": CONFIDENCE_MIN,
                "maximum": CONFIDENCE_MAX,
                "description": "A score between 0 and 1 representing the confidence level \
                                of the incident."
            },
            FIELD_SHOULD_NOTIFY_RANGERS: {
                "type": "boolean",
                "description": "Whether or not rangers should be notified \
                                based on the confidence score."
            }
        },
        "required": [FIELD_CONFIDENCE_SCORE, FIELD_SHOULD_NOTIFY_RANGERS]
    })
}

/// Check a provider payload against the output contract.
///
/// Unknown extra fields are ignored. `provider` only labels the error.
pub fn validate_output(payload: &Value, provider: &str) -> Result<ConfidenceResult, AnalysisError> {
    let object = payload.as_object().ok_or_else(|| {
        AnalysisError::contract(
            provider,
            format!("expected a JSON object, got {}", type_name(payload)),
        )
    })?;

    let score = match object.get(FIELD_CONFIDENCE_SCORE) {
        None => return Err(missing(provider, FIELD_CONFIDENCE_SCORE)),
        Some(Value::Number(n)) => n.as_f64().ok_or_else(|| {
            AnalysisError::contract(
                provider,
                format!("{FIELD_CONFIDENCE_SCORE} is not representable as f64"),
            )
        })?,
        Some(other) => return Err(wrong_type(provider, FIELD_CONFIDENCE_SCORE, "number", other)),
    };
    if !score.is_finite() || !(CONFIDENCE_MIN..=CONFIDENCE_MAX).contains(&score) {
        return Err(AnalysisError::contract(
            provider,
            format!(
                "{FIELD_CONFIDENCE_SCORE} {score} is outside [{CONFIDENCE_MIN}, {CONFIDENCE_MAX}]"
            ),
        ));
    }

    let notify = match object.get(FIELD_SHOULD_NOTIFY_RANGERS) {
        None => return Err(missing(provider, FIELD_SHOULD_NOTIFY_RANGERS)),
        Some(Value::Bool(b)) => *b,
        Some(other) => {
            return Err(wrong_type(provider, FIELD_SHOULD_NOTIFY_RANGERS, "boolean", other))
        }
    };

    Ok(ConfidenceResult {
        confidence_score: score,
        should_notify_rangers: notify,
    })
}

fn required_string(object: &Map<String, Value>, field: &str) -> Result<String, AnalysisError> {
    match object.get(field) {
        None | Some(Value::Null) => Err(AnalysisError::validation(field, "is required")),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(AnalysisError::validation(
            field,
            format!("must be a string, got {}", type_name(other)),
        )),
    }
}

fn check_text(field: &str, text: &str, max_chars: usize) -> Result<(), AnalysisError> {
    if text.trim().is_empty() {
        return Err(AnalysisError::validation(field, "must not be empty"));
    }
    let chars = text.chars().count();
    if chars > max_chars {
        return Err(AnalysisError::validation(
            field,
            format!("is {chars} characters, limit is {max_chars}"),
        ));
    }
    Ok(())
}

fn missing(provider: &str, field: &str) -> AnalysisError {
    AnalysisError::contract(provider, format!("missing required field {field}"))
}

fn wrong_type(provider: &str, field: &str, expected: &str, got: &Value) -> AnalysisError {
    AnalysisError::contract(
        provider,
        format!("{field} must be a {expected}, got {}", type_name(got)),
    )
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecoguard_core::errors::AnalysisErrorKind;

    fn kind(err: AnalysisError) -> AnalysisErrorKind {
        err.kind()
    }

    #[test]
    fn parse_request_accepts_both_fields() {
        let req = parse_request(&json!({
            "sensorData": "vibration",
            "historicalIncidentData": "none"
        }))
        .unwrap();
        assert_eq!(req.sensor_data, "vibration");
        assert_eq!(req.historical_incident_data, "none");
    }

    #[test]
    fn parse_request_rejects_missing_null_and_wrong_type() {
        let missing = parse_request(&json!({ "sensorData": "x" })).unwrap_err();
        assert!(matches!(
            missing,
            AnalysisError::Validation { ref field, .. } if field == "historicalIncidentData"
        ));

        let null = parse_request(&json!({ "sensorData": null, "historicalIncidentData": "x" }))
            .unwrap_err();
        assert!(matches!(
            null,
            AnalysisError::Validation { ref field, .. } if field == "sensorData"
        ));

        let number = parse_request(&json!({ "sensorData": 7, "historicalIncidentData": "x" }))
            .unwrap_err();
        assert!(number.to_string().contains("got number"));

        assert_eq!(
            kind(parse_request(&json!(["x"])).unwrap_err()),
            AnalysisErrorKind::InvalidInput
        );
    }

    #[test]
    fn validate_request_rejects_blank_and_oversized() {
        let config = AnalyzerConfig {
            max_field_chars: 10,
            ..AnalyzerConfig::default()
        };
        let blank = ConfidenceRequest::new("\n\t ", "ok");
        assert!(validate_request(&blank, &config).is_err());

        let long = ConfidenceRequest::new("ok", "x".repeat(11));
        let err = validate_request(&long, &config).unwrap_err();
        assert!(err.to_string().contains("historicalIncidentData"));

        let exact = ConfidenceRequest::new("é".repeat(10), "ok");
        assert!(validate_request(&exact, &config).is_ok(), "limit counts chars, not bytes");
    }

    #[test]
    fn validate_output_accepts_bounds() {
        for score in [0.0, 1.0, 0.5] {
            let r = validate_output(
                &json!({ "confidenceScore": score, "shouldNotifyRangers": false }),
                "stub",
            )
            .unwrap();
            assert_eq!(r.confidence_score, score);
        }
        let int_score = validate_output(
            &json!({ "confidenceScore": 1, "shouldNotifyRangers": true }),
            "stub",
        );
        assert_eq!(int_score.unwrap().confidence_score, 1.0);
    }

    #[test]
    fn validate_output_rejects_contract_breaks() {
        let cases = [
            json!({ "confidenceScore": 1.4, "shouldNotifyRangers": true }),
            json!({ "confidenceScore": -0.01, "shouldNotifyRangers": true }),
            json!({ "confidenceScore": 0.5 }),
            json!({ "shouldNotifyRangers": true }),
            json!({ "confidenceScore": "0.5", "shouldNotifyRangers": true }),
            json!({ "confidenceScore": 0.5, "shouldNotifyRangers": "true" }),
            json!({ "confidenceScore": 0.5, "shouldNotifyRangers": null }),
            json!("0.5"),
            Value::Null,
        ];
        for payload in cases {
            let err = validate_output(&payload, "stub").unwrap_err();
            assert_eq!(err.kind(), AnalysisErrorKind::ProviderContract, "{payload}");
        }
    }

    #[test]
    fn validate_output_labels_provider() {
        let err = validate_output(&json!({}), "gemini").unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::ProviderContract { ref provider, .. } if provider == "gemini"
        ));
    }

    #[test]
    fn output_schema_requires_both_fields() {
        let schema = output_schema();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["confidenceScore"]["type"], "number");
        assert_eq!(schema["properties"]["shouldNotifyRangers"]["type"], "boolean");
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .collect();
        assert_eq!(required, vec!["confidenceScore", "shouldNotifyRangers"]);
    }
}
