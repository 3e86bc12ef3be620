/// Wire name of the sensor-data request field.
pub const FIELD_SENSOR_DATA: &str = "sensorData";

/// Wire name of the historical-context request field.
pub const FIELD_HISTORICAL_INCIDENT_DATA: &str = "historicalIncidentData";

/// Wire name of the score output field.
pub const FIELD_CONFIDENCE_SCORE: &str = "confidenceScore";

/// Wire name of the notification output field.
pub const FIELD_SHOULD_NOTIFY_RANGERS: &str = "shouldNotifyRangers";

/// Pseudo-field used when the rendered prompt as a whole is rejected.
pub const FIELD_PROMPT: &str = "prompt";

/// Inclusive bounds of a confidence score.
pub const CONFIDENCE_MIN: f64 = 0.0;
pub const CONFIDENCE_MAX: f64 = 1.0;

/// Inclusive bounds of a device battery percentage.
pub const BATTERY_MIN: u8 = 0;
pub const BATTERY_MAX: u8 = 100;

/// Minimum length of an administrator-assigned device id.
pub const MIN_DEVICE_ID_CHARS: usize = 6;

/// Minimum length of a user display name.
pub const MIN_USER_NAME_CHARS: usize = 2;

/// First history entry of every new incident.
pub const HISTORY_INCIDENT_DETECTED: &str = "Incident detected";

/// Environment variable consulted for the tracing filter.
pub const LOG_ENV_VAR: &str = "ECOGUARD_LOG";

/// Project-level config file name.
pub const CONFIG_FILENAME: &str = "ecoguard.toml";

