//! Stable error codes for callers that cross a process or language boundary.

/// Maps an error to a stable code string so the presentation layer can
/// branch on the failure kind without matching on display text.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "INVALID_INPUT").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn coded_message(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const PROVIDER_UNAVAILABLE: &str = "PROVIDER_UNAVAILABLE";
pub const PROVIDER_CONTRACT: &str = "PROVIDER_CONTRACT";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const RECORD_NOT_FOUND: &str = "RECORD_NOT_FOUND";
pub const RECORD_CONFLICT: &str = "RECORD_CONFLICT";
pub const RECORD_INVALID: &str = "RECORD_INVALID";
pub const INVALID_TRANSITION: &str = "INVALID_TRANSITION";
pub const STORE_FAILURE: &str = "STORE_FAILURE";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
