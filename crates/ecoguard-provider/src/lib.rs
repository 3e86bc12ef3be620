//! # ecoguard-provider
//!
//! Network-backed implementation of the inference-provider seam. Requests
//! structured JSON output from a `generateContent` endpoint and maps every
//! transport, status and envelope failure onto the analysis error kinds.

pub mod http_provider;
pub mod protocol;

pub use http_provider::{HttpInferenceProvider, HttpProviderConfig, PROVIDER_NAME};
