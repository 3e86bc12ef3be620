//! # ecoguard-observability
//!
//! Structured tracing with span definitions, log events for analysis and
//! incident operations, and lock-free counters of analysis outcomes.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::{AnalysisMetrics, AnalysisMetricsSnapshot};
pub use tracing_setup::{build_filter, init_tracing, init_tracing_with_filter};
