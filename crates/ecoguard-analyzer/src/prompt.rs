//! Prompt rendering for the confidence analysis.

use ecoguard_core::models::ConfidenceRequest;

/// Rendered prompt plus a content fingerprint that is safe to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptText {
    pub text: String,
    /// blake3 hex digest of `text`.
    pub fingerprint: String,
}

impl PromptText {
    fn new(text: String) -> Self {
        let fingerprint = blake3::hash(text.as_bytes()).to_hex().to_string();
        Self { text, fingerprint }
    }
}

const PREAMBLE: &str = "\
You are an expert system designed to analyze the confidence level of new forest incidents \
reported by EcoGuard devices.

You will receive raw sensor data and historical incident data. \
Your goal is to determine a confidence score (between 0 and 1) \
indicating the likelihood that the incident is a serious illegal logging event.

Based on the confidence score, you will also determine whether rangers should be notified. \
Notify rangers only if the incident is likely to be serious to avoid false alarms.
";

const FACTORS: &str = "\
Consider the following factors when determining the confidence score and notification decision:

- Number and type of triggered sensors
- Similarity to past illegal logging incidents in the area
- Time of day
- Weather conditions
- Proximity to known logging hotspots

Output a JSON object containing the confidenceScore and shouldNotifyRangers fields.
";

/// Render the analysis prompt for a request.
///
/// Pure and deterministic: the same request always yields the same text and
/// fingerprint. Field text is inserted verbatim in a single pass, so
/// placeholder-looking text inside a field is never expanded.
pub fn render_prompt(request: &ConfidenceRequest) -> PromptText {
    let text = format!(
        "{PREAMBLE}\nSensor Data: {}\nHistorical Incident Data: {}\n\n{FACTORS}",
        request.sensor_data, request.historical_incident_data
    );
    PromptText::new(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_both_fields_in_order() {
        let p = render_prompt(&ConfidenceRequest::new("SENSOR-X", "HISTORY-Y"));
        let sensor_at = p.text.find("Sensor Data: SENSOR-X").unwrap();
        let history_at = p.text.find("Historical Incident Data: HISTORY-Y").unwrap();
        assert!(sensor_at < history_at);
    }

    #[test]
    fn prompt_names_every_weighing_factor() {
        let p = render_prompt(&ConfidenceRequest::new("a", "b"));
        for factor in [
            "Number and type of triggered sensors",
            "Similarity to past illegal logging incidents",
            "Time of day",
            "Weather conditions",
            "Proximity to known logging hotspots",
            "confidenceScore and shouldNotifyRangers",
        ] {
            assert!(p.text.contains(factor), "missing: {factor}");
        }
    }

    #[test]
    fn fingerprint_tracks_content() {
        let a = render_prompt(&ConfidenceRequest::new("a", "b"));
        let a2 = render_prompt(&ConfidenceRequest::new("a", "b"));
        let c = render_prompt(&ConfidenceRequest::new("a", "c"));
        assert_eq!(a, a2);
        assert_ne!(a.fingerprint, c.fingerprint);
        assert_eq!(a.fingerprint.len(), 64);
    }

    #[test]
    fn braces_in_fields_are_literal() {
        let p = render_prompt(&ConfidenceRequest::new("{historicalIncidentData}", "{}"));
        assert!(p.text.contains("Sensor Data: {historicalIncidentData}"));
        assert!(p.text.contains("Historical Incident Data: {}"));
    }
}
