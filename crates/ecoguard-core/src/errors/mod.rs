//! Error handling for EcoGuard.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod analysis_error;
pub mod config_error;
pub mod error_code;
pub mod record_error;

pub use analysis_error::{AnalysisError, AnalysisErrorKind};
pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use record_error::RecordError;

/// Top-level error aggregating every subsystem error via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum EcoGuardError {
    #[error("analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("record error: {0}")]
    Record(#[from] RecordError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ErrorCode for EcoGuardError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Analysis(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Record(e) => e.error_code(),
            Self::Serialization(_) => error_code::SERIALIZATION_ERROR,
        }
    }
}

/// Convenience alias used across the workspace.
pub type EcoGuardResult<T> = Result<T, EcoGuardError>;
