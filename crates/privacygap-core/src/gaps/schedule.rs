//! Daily privacy-gap schedules.
//!
//! A schedule is a pure function of (subject id, date, config). Client
//! devices and servers derive the same gaps independently, so there is no
//! shared schedule store to coordinate. Caching is left to callers;
//! `expires_at` is only a hint for them.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::config::PrivacyGapConfig;
use super::placement::{distribute_gaps, sample_durations, select_gap_count, PlacementStrategy};
use super::rng::SeededRandom;
use super::seed::build_seed;
use crate::error::ConfigurationError;

/// Advisory lifetime of a generated schedule in callers' caches.
pub const SCHEDULE_TTL_HOURS: i64 = 24;

/// One window during which monitoring is suspended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledGap {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub duration_ms: u64,
}

impl ScheduledGap {
    fn new(start_time: DateTime<Utc>, duration_ms: u64) -> Self {
        Self {
            start_time,
            end_time: start_time + Duration::milliseconds(duration_ms as i64),
            duration_ms,
        }
    }

    /// Whether `t` falls inside `[start_time, end_time)`.
    pub fn contains(&self, t: DateTime<Utc>) -> bool {
        self.start_time <= t && t < self.end_time
    }

    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }
}

/// A subject's privacy gaps for one UTC calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacyGapSchedule {
    pub subject_id: String,
    pub date: NaiveDate,
    /// Ascending by start time, non-overlapping
    pub gaps: Vec<ScheduledGap>,
    pub generated_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl PrivacyGapSchedule {
    /// Whether a cached copy has outlived its advisory TTL.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Sum of all gap durations.
    pub fn total_gap_duration(&self) -> Duration {
        self.gaps
            .iter()
            .fold(Duration::zero(), |total, gap| total + gap.duration())
    }
}

/// Generate the schedule for `subject_id` on `date`, stamped with the current time.
///
/// # Errors
/// Returns [`ConfigurationError`] if `config` fails validation or `date` has
/// no representable waking window. No draws are made and nothing is produced
/// in that case.
pub fn generate_daily_gap_schedule(
    subject_id: &str,
    date: NaiveDate,
    config: &PrivacyGapConfig,
) -> Result<PrivacyGapSchedule, ConfigurationError> {
    generate_daily_gap_schedule_at(subject_id, date, config, Utc::now())
}

/// Like [`generate_daily_gap_schedule`], with an explicit generation time.
///
/// Two calls with equal arguments return equal schedules.
///
/// # Errors
/// Returns [`ConfigurationError`] if `config` fails validation or `date` has
/// no representable waking window.
pub fn generate_daily_gap_schedule_at(
    subject_id: &str,
    date: NaiveDate,
    config: &PrivacyGapConfig,
    now: DateTime<Utc>,
) -> Result<PrivacyGapSchedule, ConfigurationError> {
    config.validate()?;
    let (window_start, _) = config.window_bounds(date)?;
    Ok(assemble(subject_id, date, window_start, config, now))
}

/// Generate `days` consecutive daily schedules starting at `from`.
///
/// The config and every day's window are checked up front, so either every
/// day is produced or none is.
///
/// # Errors
/// Returns [`ConfigurationError`] if `config` fails validation or any day in
/// the range has no representable waking window.
pub fn generate_schedule_range(
    subject_id: &str,
    from: NaiveDate,
    days: u32,
    config: &PrivacyGapConfig,
    now: DateTime<Utc>,
) -> Result<Vec<PrivacyGapSchedule>, ConfigurationError> {
    config.validate()?;
    let windows = from
        .iter_days()
        .take(days as usize)
        .map(|date| config.window_bounds(date).map(|(start, _)| (date, start)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(windows
        .into_iter()
        .map(|(date, window_start)| assemble(subject_id, date, window_start, config, now))
        .collect())
}

/// Callers pass a `window_start` from a successful `window_bounds`, so every
/// gap instant (which ends by the window end) is representable.
fn assemble(
    subject_id: &str,
    date: NaiveDate,
    window_start: DateTime<Utc>,
    config: &PrivacyGapConfig,
    now: DateTime<Utc>,
) -> PrivacyGapSchedule {
    let mut rng = SeededRandom::new(&build_seed(subject_id, date));

    let gap_count = select_gap_count(&mut rng, config);
    let placement = distribute_gaps(
        &mut rng,
        gap_count,
        config.window_minutes(),
        config.spacing_minutes(),
        config.footprint_minutes(),
    );
    let durations = sample_durations(&mut rng, placement.offsets.len(), config);

    let gaps: Vec<ScheduledGap> = placement
        .offsets
        .iter()
        .zip(durations)
        .map(|(&offset, duration_ms)| {
            ScheduledGap::new(window_start + Duration::minutes(offset as i64), duration_ms)
        })
        .collect();

    tracing::debug!(
        subject_id,
        %date,
        gap_count = gaps.len(),
        even_spacing = placement.strategy == PlacementStrategy::EvenSpacing,
        "generated privacy gap schedule"
    );

    PrivacyGapSchedule {
        subject_id: subject_id.to_string(),
        date,
        gaps,
        generated_at: now,
        expires_at: now
            .checked_add_signed(Duration::hours(SCHEDULE_TTL_HOURS))
            .unwrap_or(DateTime::<Utc>::MAX_UTC),
    }
}
