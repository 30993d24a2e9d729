//! Core error types for privacygap-core.
//!
//! Schedule generation itself can only fail on a malformed gap policy
//! ([`ConfigurationError`]). The remaining variants cover loading and saving
//! the on-disk configuration used by the CLI.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for privacygap-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Invalid privacy-gap policy bounds
    #[error("Invalid gap configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Configuration file errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A bound violation in a [`PrivacyGapConfig`](crate::PrivacyGapConfig).
///
/// Raised before any pseudo-random draw is consumed, so an invalid policy
/// never yields a partial schedule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// An hour-of-day field outside the clock
    #[error("'{field}' must be a valid hour of day, got {value}")]
    HourOutOfRange { field: &'static str, value: u32 },

    /// Waking window of zero or negative length
    #[error("waking hours are empty: start ({start}) must be before end ({end})")]
    EmptyWakingWindow { start: u32, end: u32 },

    /// A min/max pair with min above max
    #[error("'{field}' bounds are inverted: min ({min}) > max ({max})")]
    InvertedBounds {
        field: &'static str,
        min: u64,
        max: u64,
    },

    /// Gap durations must be positive
    #[error("min_gap_duration_ms must be positive")]
    NonPositiveDuration,

    /// The window cannot hold the maximum number of maximal gaps
    #[error(
        "waking window of {window_minutes} min cannot hold {required_minutes} min of gaps"
    )]
    WindowTooSmall {
        required_minutes: u64,
        window_minutes: u64,
    },

    /// The day's waking window lies outside the representable time range
    #[error("no representable waking window on {date}")]
    DateOutOfRange { date: chrono::NaiveDate },
}

/// Configuration-file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Key does not exist in the configuration tree
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_error_wraps_into_core_error() {
        let err: CoreError = ConfigurationError::NonPositiveDuration.into();
        assert!(matches!(err, CoreError::Configuration(_)));
        assert!(err.to_string().contains("must be positive"));
    }

    #[test]
    fn inverted_bounds_message_names_field() {
        let err = ConfigurationError::InvertedBounds {
            field: "daily_gaps",
            min: 5,
            max: 2,
        };
        assert_eq!(
            err.to_string(),
            "'daily_gaps' bounds are inverted: min (5) > max (2)"
        );
    }
}
