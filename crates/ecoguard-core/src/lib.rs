//! # ecoguard-core
//!
//! Foundation crate for the EcoGuard forest-incident system.
//! Defines the shared models, the provider and document-store seams, errors,
//! config, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::EcoGuardConfig;
pub use errors::{AnalysisError, AnalysisErrorKind, EcoGuardError, EcoGuardResult};
pub use models::{ConfidenceRequest, ConfidenceResult, Incident, IncidentStatus};
pub use traits::{GenerationRequest, IDocumentStore, IInferenceProvider, Record};
