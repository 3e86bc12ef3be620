//! Tracing setup: subscriber install, span macros and structured events.

pub mod events;
pub mod spans;

use ecoguard_core::config::ObservabilityConfig;
use ecoguard_core::constants::LOG_ENV_VAR;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Respects the `ECOGUARD_LOG` environment variable for filtering and falls
/// back to `config.log_level`. Returns `false` if a subscriber was already
/// installed.
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    let env_directive = std::env::var(LOG_ENV_VAR).ok();
    let filter = build_filter(env_directive.as_deref(), &config.log_level);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if config.json {
        builder
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init()
            .is_ok()
    } else {
        builder.try_init().is_ok()
    }
}

/// Filter from the `ECOGUARD_LOG` directive, or from `fallback` when the
/// directive is absent, blank or unparsable.
pub fn build_filter(env_directive: Option<&str>, fallback: &str) -> EnvFilter {
    env_directive
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback))
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) -> bool {
    let filter = EnvFilter::new(filter);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .json()
        .try_init()
        .is_ok()
}
