use thiserror::Error;

/// Failure to read a host-supplied [`crate::PageConfig`] override.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config value out of range: {field} = {value}")]
    OutOfRange { field: &'static str, value: f64 },
    #[error("config field {field} must not be empty")]
    Empty { field: &'static str },
}

/// Failure to read or write a persisted preference.
#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("preference storage error: {0}")]
    Storage(String),
}
