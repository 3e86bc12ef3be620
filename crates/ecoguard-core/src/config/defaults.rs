// Single source of truth for all default values.

// --- Analyzer ---
pub const DEFAULT_MAX_FIELD_CHARS: usize = 8_000;
pub const DEFAULT_MAX_PROMPT_TOKENS: usize = 4_000;
pub const DEFAULT_REQUEST_DEADLINE_MS: u64 = 30_000;

// --- Provider ---
pub const DEFAULT_PROVIDER_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_PROVIDER_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const DEFAULT_PROVIDER_TIMEOUT_MS: u64 = 20_000;
pub const DEFAULT_MAX_RETRIES: u32 = 0;
pub const DEFAULT_INITIAL_BACKOFF_MS: u64 = 500;
pub const DEFAULT_MAX_BACKOFF_MS: u64 = 8_000;
pub const DEFAULT_TEMPERATURE: f64 = 0.2;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
