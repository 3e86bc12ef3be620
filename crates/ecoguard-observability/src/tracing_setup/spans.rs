//! Span definitions per operation: analysis, provider call, record action.

/// Create an analysis span.
#[macro_export]
macro_rules! analysis_span {
    ($fingerprint:expr) => {
        tracing::info_span!("ecoguard.analysis", fingerprint = %$fingerprint)
    };
}

/// Create a provider-call span.
#[macro_export]
macro_rules! provider_span {
    ($provider:expr, $model:expr) => {
        tracing::info_span!("ecoguard.provider", provider = %$provider, model = %$model)
    };
}

/// Create a record-action span.
#[macro_export]
macro_rules! record_span {
    ($collection:expr, $id:expr) => {
        tracing::debug_span!("ecoguard.record", collection = %$collection, id = %$id)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const ANALYSIS: &str = "ecoguard.analysis";
    pub const PROVIDER: &str = "ecoguard.provider";
    pub const RECORD: &str = "ecoguard.record";
}
