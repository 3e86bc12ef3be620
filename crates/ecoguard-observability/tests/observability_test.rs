use std::sync::Arc;

use ecoguard_core::config::ObservabilityConfig;
use ecoguard_core::errors::{AnalysisError, AnalysisErrorKind};
use ecoguard_observability::tracing_setup::{events, spans};
use ecoguard_observability::{build_filter, init_tracing, AnalysisMetrics};

#[test]
fn events_and_spans_emit_without_subscriber() {
    let span = ecoguard_observability::analysis_span!("abc123");
    let _guard = span.enter();
    events::analysis_started("abc123", 10, 20);
    events::analysis_completed("abc123", "stub", 0.91, true, 12);
    events::analysis_failed(Some("abc123"), &AnalysisError::contract("stub", "bad"));
    events::analysis_failed(None, &AnalysisError::validation("sensorData", "empty"));
    events::analysis_failed(None, &AnalysisError::unavailable("stub", "timeout", true));
    events::incident_status_changed("inc-1", "new", "acknowledged", "Ranger Smith");
}

#[test]
fn init_tracing_is_idempotent() {
    let config = ObservabilityConfig::default();
    let first = init_tracing(&config);
    let second = init_tracing(&config);
    // Whichever call installed the subscriber, the other must not panic.
    assert!(!(first && second));
}

#[test]
fn env_directive_takes_precedence_over_config_level() {
    let filter = build_filter(Some("ecoguard_analyzer=trace"), "warn");
    assert_eq!(filter.to_string(), "ecoguard_analyzer=trace");

    let filter = build_filter(Some(" debug "), "warn");
    assert_eq!(filter.to_string(), "debug");
}

#[test]
fn absent_blank_or_invalid_directive_uses_config_level() {
    for directive in [None, Some(""), Some("   "), Some("ecoguard=notalevel")] {
        let filter = build_filter(directive, "warn");
        assert_eq!(filter.to_string(), "warn", "{directive:?}");
    }
}

#[test]
fn span_names_are_namespaced() {
    assert!(spans::names::ANALYSIS.starts_with("ecoguard."));
    assert!(spans::names::PROVIDER.starts_with("ecoguard."));
    assert!(spans::names::RECORD.starts_with("ecoguard."));
}

#[test]
fn metrics_are_shareable_across_threads() {
    let metrics = Arc::new(AnalysisMetrics::new());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let m = Arc::clone(&metrics);
            std::thread::spawn(move || {
                for _ in 0..100 {
                    if i % 2 == 0 {
                        m.record_success(i % 4 == 0);
                    } else {
                        m.record_failure(AnalysisErrorKind::ProviderUnavailable);
                    }
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let snap = metrics.snapshot();
    assert_eq!(snap.succeeded, 400);
    assert_eq!(snap.notified, 200);
    assert_eq!(snap.provider_unavailable, 400);
    assert_eq!(snap.total(), 800);

    let json = serde_json::to_value(snap).unwrap();
    assert_eq!(json["succeeded"], 400);
}
