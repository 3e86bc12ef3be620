//! Configuration system for EcoGuard.
//! TOML-based, 3-layer resolution: env > project file > defaults.

pub mod analyzer_config;
pub mod defaults;
pub mod ecoguard_config;
pub mod observability_config;
pub mod provider_config;

pub use analyzer_config::AnalyzerConfig;
pub use ecoguard_config::EcoGuardConfig;
pub use observability_config::ObservabilityConfig;
pub use provider_config::ProviderConfig;
