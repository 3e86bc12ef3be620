use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Free-text evidence submitted for a confidence analysis.
///
/// Both fields are natural language; no structure is imposed on their
/// content beyond being present and non-blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ConfidenceRequest {
    /// Triggered sensors, readings and timing reported by the EcoGuard device.
    pub sensor_data: String,
    /// Similar past incidents and local context (weather, hotspot proximity).
    pub historical_incident_data: String,
}

impl ConfidenceRequest {
    pub fn new(
        sensor_data: impl Into<String>,
        historical_incident_data: impl Into<String>,
    ) -> Self {
        Self {
            sensor_data: sensor_data.into(),
            historical_incident_data: historical_incident_data.into(),
        }
    }
}

/// Validated output of a confidence analysis.
///
/// `should_notify_rangers` is the model's own decision and is never derived
/// from `confidence_score` by a fixed cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ConfidenceResult {
    /// Likelihood in [0, 1] that the incident is a serious illegal-logging event.
    pub confidence_score: f64,
    /// Whether rangers should be alerted.
    pub should_notify_rangers: bool,
}

impl ConfidenceResult {
    /// Score as a whole percentage, as shown to operators.
    pub fn percent(&self) -> u8 {
        (self.confidence_score * 100.0).round().clamp(0.0, 100.0) as u8
    }

    /// Operator-facing recommendation text.
    pub fn recommendation(&self) -> &'static str {
        if self.should_notify_rangers {
            "Notify Rangers Immediately"
        } else {
            "Continue monitoring, no immediate notification required."
        }
    }
}
