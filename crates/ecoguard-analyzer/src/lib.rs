//! # ecoguard-analyzer
//!
//! Estimates how likely a reported incident is a serious illegal-logging
//! event. Input and output are checked against explicit data contracts,
//! the prompt is rendered by a pure function, and the model call goes
//! through an injected [`IInferenceProvider`](ecoguard_core::IInferenceProvider).

pub mod analyzer;
pub mod prompt;
pub mod schema;
pub mod tokens;

pub use analyzer::ConfidenceAnalyzer;
pub use prompt::{render_prompt, PromptText};
pub use schema::{output_schema, parse_request, validate_output, validate_request};
