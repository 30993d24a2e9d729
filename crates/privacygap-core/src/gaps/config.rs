//! Privacy-gap policy bounds.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

const MS_PER_MINUTE: u64 = 60_000;

/// Bounds for a subject's daily privacy gaps.
///
/// Supplied by the policy source and treated as immutable by the generator.
/// Call [`validate`](Self::validate) (the generator does) before relying on
/// any of the derived quantities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacyGapConfig {
    /// First hour of the waking window (UTC, inclusive)
    #[serde(default = "default_waking_hours_start")]
    pub waking_hours_start: u32,
    /// Hour at which the waking window closes (UTC, exclusive)
    #[serde(default = "default_waking_hours_end")]
    pub waking_hours_end: u32,
    #[serde(default = "default_min_daily_gaps")]
    pub min_daily_gaps: u32,
    #[serde(default = "default_max_daily_gaps")]
    pub max_daily_gaps: u32,
    #[serde(default = "default_min_gap_duration_ms")]
    pub min_gap_duration_ms: u64,
    #[serde(default = "default_max_gap_duration_ms")]
    pub max_gap_duration_ms: u64,
    #[serde(default = "default_min_gap_spacing_ms")]
    pub min_gap_spacing_ms: u64,
}

fn default_waking_hours_start() -> u32 {
    6
}
fn default_waking_hours_end() -> u32 {
    22
}
fn default_min_daily_gaps() -> u32 {
    2
}
fn default_max_daily_gaps() -> u32 {
    5
}
fn default_min_gap_duration_ms() -> u64 {
    5 * MS_PER_MINUTE
}
fn default_max_gap_duration_ms() -> u64 {
    15 * MS_PER_MINUTE
}
fn default_min_gap_spacing_ms() -> u64 {
    30 * MS_PER_MINUTE
}

impl Default for PrivacyGapConfig {
    fn default() -> Self {
        Self {
            waking_hours_start: default_waking_hours_start(),
            waking_hours_end: default_waking_hours_end(),
            min_daily_gaps: default_min_daily_gaps(),
            max_daily_gaps: default_max_daily_gaps(),
            min_gap_duration_ms: default_min_gap_duration_ms(),
            max_gap_duration_ms: default_max_gap_duration_ms(),
            min_gap_spacing_ms: default_min_gap_spacing_ms(),
        }
    }
}

impl PrivacyGapConfig {
    /// Check every bound pair.
    ///
    /// # Errors
    /// Returns the first violated bound. Nothing is clamped or corrected.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.waking_hours_start > 23 {
            return Err(ConfigurationError::HourOutOfRange {
                field: "waking_hours_start",
                value: self.waking_hours_start,
            });
        }
        if self.waking_hours_end > 24 {
            return Err(ConfigurationError::HourOutOfRange {
                field: "waking_hours_end",
                value: self.waking_hours_end,
            });
        }
        if self.waking_hours_start >= self.waking_hours_end {
            return Err(ConfigurationError::EmptyWakingWindow {
                start: self.waking_hours_start,
                end: self.waking_hours_end,
            });
        }
        if self.min_daily_gaps > self.max_daily_gaps {
            return Err(ConfigurationError::InvertedBounds {
                field: "daily_gaps",
                min: u64::from(self.min_daily_gaps),
                max: u64::from(self.max_daily_gaps),
            });
        }
        if self.min_gap_duration_ms == 0 {
            return Err(ConfigurationError::NonPositiveDuration);
        }
        if self.min_gap_duration_ms > self.max_gap_duration_ms {
            return Err(ConfigurationError::InvertedBounds {
                field: "gap_duration_ms",
                min: self.min_gap_duration_ms,
                max: self.max_gap_duration_ms,
            });
        }

        let required_minutes =
            u64::from(self.max_daily_gaps).saturating_mul(self.footprint_minutes());
        let window_minutes = self.window_minutes();
        if required_minutes > window_minutes {
            return Err(ConfigurationError::WindowTooSmall {
                required_minutes,
                window_minutes,
            });
        }

        Ok(())
    }

    /// Length of the waking window in minutes.
    pub fn window_minutes(&self) -> u64 {
        u64::from(self.waking_hours_end.saturating_sub(self.waking_hours_start)) * 60
    }

    /// Whole minutes reserved per gap when placing offsets (max duration, rounded up).
    pub fn footprint_minutes(&self) -> u64 {
        self.max_gap_duration_ms.div_ceil(MS_PER_MINUTE)
    }

    /// Minimum spacing in whole minutes, rounded up.
    pub fn spacing_minutes(&self) -> u64 {
        self.min_gap_spacing_ms.div_ceil(MS_PER_MINUTE)
    }

    /// Absolute `[start, end)` of the waking window on `date`.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::DateOutOfRange`] when the window end
    /// falls past the last representable instant (e.g. a window closing at
    /// 24:00 on [`NaiveDate::MAX`]).
    pub fn window_bounds(
        &self,
        date: NaiveDate,
    ) -> Result<(DateTime<Utc>, DateTime<Utc>), ConfigurationError> {
        let out_of_range = || ConfigurationError::DateOutOfRange { date };
        let start = date
            .and_time(chrono::NaiveTime::MIN)
            .and_utc()
            .checked_add_signed(Duration::hours(i64::from(self.waking_hours_start)))
            .ok_or_else(out_of_range)?;
        let end = start
            .checked_add_signed(Duration::minutes(self.window_minutes() as i64))
            .ok_or_else(out_of_range)?;
        Ok((start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = PrivacyGapConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.window_minutes(), 16 * 60);
        assert_eq!(config.footprint_minutes(), 15);
        assert_eq!(config.spacing_minutes(), 30);
    }

    #[test]
    fn footprint_rounds_partial_minutes_up() {
        let config = PrivacyGapConfig {
            max_gap_duration_ms: 60_001,
            min_gap_duration_ms: 1,
            ..Default::default()
        };
        assert_eq!(config.footprint_minutes(), 2);
    }

    #[test]
    fn rejects_inverted_gap_counts() {
        let config = PrivacyGapConfig {
            min_daily_gaps: 4,
            max_daily_gaps: 3,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigurationError::InvertedBounds {
                field: "daily_gaps",
                min: 4,
                max: 3
            })
        );
    }

    #[test]
    fn rejects_inverted_durations() {
        let config = PrivacyGapConfig {
            min_gap_duration_ms: 900_000,
            max_gap_duration_ms: 300_000,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::InvertedBounds { field: "gap_duration_ms", .. })
        ));
    }

    #[test]
    fn rejects_zero_duration() {
        let config = PrivacyGapConfig {
            min_gap_duration_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigurationError::NonPositiveDuration));
    }

    #[test]
    fn rejects_empty_and_inverted_windows() {
        let empty = PrivacyGapConfig {
            waking_hours_start: 9,
            waking_hours_end: 9,
            ..Default::default()
        };
        assert!(matches!(
            empty.validate(),
            Err(ConfigurationError::EmptyWakingWindow { start: 9, end: 9 })
        ));

        let inverted = PrivacyGapConfig {
            waking_hours_start: 22,
            waking_hours_end: 6,
            ..Default::default()
        };
        assert!(inverted.validate().is_err());
    }

    #[test]
    fn rejects_hours_off_the_clock() {
        let config = PrivacyGapConfig {
            waking_hours_start: 24,
            waking_hours_end: 25,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::HourOutOfRange { field: "waking_hours_start", .. })
        ));
    }

    #[test]
    fn full_day_window_is_allowed() {
        let config = PrivacyGapConfig {
            waking_hours_start: 0,
            waking_hours_end: 24,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.window_minutes(), 1440);
    }

    #[test]
    fn rejects_window_that_cannot_hold_max_gaps() {
        let config = PrivacyGapConfig {
            waking_hours_start: 8,
            waking_hours_end: 9,
            min_daily_gaps: 1,
            max_daily_gaps: 5,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigurationError::WindowTooSmall {
                required_minutes: 75,
                window_minutes: 60
            })
        );
    }

    #[test]
    fn window_bounds_anchor_on_utc_day() {
        let config = PrivacyGapConfig::default();
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let (start, end) = config.window_bounds(date).unwrap();
        assert_eq!(start.to_rfc3339(), "2024-03-01T06:00:00+00:00");
        assert_eq!(end.to_rfc3339(), "2024-03-01T22:00:00+00:00");
    }

    #[test]
    fn window_bounds_reject_unrepresentable_midnight_close() {
        let config = PrivacyGapConfig {
            waking_hours_start: 0,
            waking_hours_end: 24,
            ..Default::default()
        };
        assert_eq!(
            config.window_bounds(NaiveDate::MAX),
            Err(ConfigurationError::DateOutOfRange { date: NaiveDate::MAX })
        );
        assert!(PrivacyGapConfig::default().window_bounds(NaiveDate::MAX).is_ok());
    }

    #[test]
    fn missing_toml_fields_fall_back_to_defaults() {
        let config: PrivacyGapConfig = toml::from_str("max_daily_gaps = 3").unwrap();
        assert_eq!(config.max_daily_gaps, 3);
        assert_eq!(config.waking_hours_start, 6);
    }
}
