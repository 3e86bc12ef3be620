//! Record (document store) errors.

use super::error_code::{self, ErrorCode};
use crate::models::IncidentStatus;

/// Errors raised by record actions over the document store.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    #[error("{collection} record not found: {id}")]
    NotFound { collection: String, id: String },

    #[error("{collection} record already exists: {id}")]
    AlreadyExists { collection: String, id: String },

    #[error("invalid {field}: {reason}")]
    InvalidField { field: String, reason: String },

    #[error("incident {id} cannot move from {from} to {to}")]
    InvalidTransition {
        id: String,
        from: IncidentStatus,
        to: IncidentStatus,
    },

    #[error("document store failure: {reason}")]
    StoreFailure { reason: String },
}

impl RecordError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn not_found(collection: &str, id: &str) -> Self {
        Self::NotFound {
            collection: collection.to_string(),
            id: id.to_string(),
        }
    }
}

impl ErrorCode for RecordError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => error_code::RECORD_NOT_FOUND,
            Self::AlreadyExists { .. } => error_code::RECORD_CONFLICT,
            Self::InvalidField { .. } => error_code::RECORD_INVALID,
            Self::InvalidTransition { .. } => error_code::INVALID_TRANSITION,
            Self::StoreFailure { .. } => error_code::STORE_FAILURE,
        }
    }
}
