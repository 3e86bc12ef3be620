//! Lock-free counters of analysis outcomes.

use std::sync::atomic::{AtomicU64, Ordering};

use ecoguard_core::errors::AnalysisErrorKind;
use serde::{Deserialize, Serialize};

/// Counts analyses by outcome. Shared freely between concurrent calls.
#[derive(Debug, Default)]
pub struct AnalysisMetrics {
    succeeded: AtomicU64,
    notified: AtomicU64,
    invalid_input: AtomicU64,
    provider_unavailable: AtomicU64,
    provider_contract: AtomicU64,
}

/// Point-in-time copy of [`AnalysisMetrics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnalysisMetricsSnapshot {
    pub succeeded: u64,
    pub notified: u64,
    pub invalid_input: u64,
    pub provider_unavailable: u64,
    pub provider_contract: u64,
}

impl AnalysisMetricsSnapshot {
    pub fn total(&self) -> u64 {
        self.succeeded + self.failed()
    }

    pub fn failed(&self) -> u64 {
        self.invalid_input + self.provider_unavailable + self.provider_contract
    }
}

impl AnalysisMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful analysis.
    pub fn record_success(&self, should_notify_rangers: bool) {
        self.succeeded.fetch_add(1, Ordering::Relaxed);
        if should_notify_rangers {
            self.notified.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a failed analysis under its kind.
    pub fn record_failure(&self, kind: AnalysisErrorKind) {
        let counter = match kind {
            AnalysisErrorKind::InvalidInput => &self.invalid_input,
            AnalysisErrorKind::ProviderUnavailable => &self.provider_unavailable,
            AnalysisErrorKind::ProviderContract => &self.provider_contract,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> AnalysisMetricsSnapshot {
        AnalysisMetricsSnapshot {
            succeeded: self.succeeded.load(Ordering::Relaxed),
            notified: self.notified.load(Ordering::Relaxed),
            invalid_input: self.invalid_input.load(Ordering::Relaxed),
            provider_unavailable: self.provider_unavailable.load(Ordering::Relaxed),
            provider_contract: self.provider_contract.load(Ordering::Relaxed),
        }
    }
}
