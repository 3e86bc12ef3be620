//! Log output of failed analyses, captured as JSON lines.

use std::io;
use std::sync::{Arc, Mutex};

use ecoguard_analyzer::ConfidenceAnalyzer;
use ecoguard_core::config::AnalyzerConfig;
use ecoguard_core::errors::AnalysisError;
use ecoguard_core::models::ConfidenceRequest;
use serde_json::{json, Value};
use test_fixtures::StubProvider;

const SENSOR_MARKER: &str = "SENSOR-MARKER-7731";
const HISTORY_MARKER: &str = "HISTORY-MARKER-4410";

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Captured {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    fn lines(&self) -> Vec<Value> {
        self.text()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }
}

/// Run one analysis with a JSON subscriber installed on this thread.
async fn capture(stub: StubProvider, request: ConfidenceRequest) -> Captured {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .json()
        .flatten_event(true)
        .with_max_level(tracing::Level::TRACE)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let analyzer = ConfidenceAnalyzer::new(stub, AnalyzerConfig::default());
    assert!(analyzer.analyze(&request).await.is_err());
    captured
}

fn marked_request() -> ConfidenceRequest {
    ConfidenceRequest::new(
        format!("Vibration spike near tree 12, {SENSOR_MARKER}"),
        format!("One confirmed logging case last week, {HISTORY_MARKER}"),
    )
}

fn level_of(lines: &[Value], event: &str) -> Option<String> {
    lines
        .iter()
        .find(|l| l["event"] == event)
        .and_then(|l| l["level"].as_str())
        .map(str::to_string)
}

fn assert_no_request_text(captured: &Captured) {
    let text = captured.text();
    assert!(!text.contains(SENSOR_MARKER), "sensor text leaked: {text}");
    assert!(!text.contains(HISTORY_MARKER), "history text leaked: {text}");
}

#[tokio::test]
async fn contract_violation_is_logged_at_error() {
    let stub = StubProvider::returning(
        json!({ "confidenceScore": 1.4, "shouldNotifyRangers": true }),
    );
    let captured = capture(stub, marked_request()).await;

    let lines = captured.lines();
    assert_eq!(
        level_of(&lines, "provider_contract_violation").as_deref(),
        Some("ERROR")
    );
    assert!(level_of(&lines, "analysis_completed").is_none());
    assert_no_request_text(&captured);
}

#[tokio::test]
async fn invalid_input_is_logged_at_info() {
    let request = ConfidenceRequest::new("   ", format!("history {HISTORY_MARKER}"));
    let stub = StubProvider::returning(
        json!({ "confidenceScore": 0.5, "shouldNotifyRangers": false }),
    );
    let captured = capture(stub, request).await;

    let lines = captured.lines();
    assert_eq!(level_of(&lines, "analysis_rejected").as_deref(), Some("INFO"));
    assert!(level_of(&lines, "analysis_started").is_none());
    assert_no_request_text(&captured);
}

#[tokio::test]
async fn provider_outage_is_logged_at_warn() {
    let stub = StubProvider::failing(AnalysisError::unavailable("stub", "HTTP 503", true));
    let captured = capture(stub, marked_request()).await;

    let lines = captured.lines();
    assert_eq!(level_of(&lines, "provider_unavailable").as_deref(), Some("WARN"));
    assert_eq!(level_of(&lines, "analysis_started").as_deref(), Some("DEBUG"));
    assert_no_request_text(&captured);
}
