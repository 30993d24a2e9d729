//! Lookups over an assembled schedule.
//!
//! Gaps are half-open: a gap covers its start instant but not its end.

use chrono::{DateTime, Duration, Utc};

use super::schedule::{PrivacyGapSchedule, ScheduledGap};

/// Whether `timestamp` falls inside any gap of `schedule`.
pub fn is_timestamp_in_scheduled_gap(
    schedule: &PrivacyGapSchedule,
    timestamp: DateTime<Utc>,
) -> bool {
    get_current_gap(schedule, timestamp).is_some()
}

/// The gap containing `timestamp`, if any.
pub fn get_current_gap(
    schedule: &PrivacyGapSchedule,
    timestamp: DateTime<Utc>,
) -> Option<&ScheduledGap> {
    schedule.gaps.iter().find(|gap| gap.contains(timestamp))
}

/// Time from `timestamp` until the next gap starting strictly after it.
///
/// Returns `None` when no further gap remains in the schedule's day.
pub fn get_time_until_next_gap(
    schedule: &PrivacyGapSchedule,
    timestamp: DateTime<Utc>,
) -> Option<Duration> {
    next_gap(schedule, timestamp).map(|gap| gap.start_time - timestamp)
}

/// The earliest gap starting strictly after `timestamp`.
pub fn next_gap(schedule: &PrivacyGapSchedule, timestamp: DateTime<Utc>) -> Option<&ScheduledGap> {
    schedule.gaps.iter().find(|gap| gap.start_time > timestamp)
}

/// Gaps that have not yet ended at `timestamp`, including the current one.
pub fn remaining_gaps(
    schedule: &PrivacyGapSchedule,
    timestamp: DateTime<Utc>,
) -> impl Iterator<Item = &ScheduledGap> {
    schedule
        .gaps
        .iter()
        .filter(move |gap| gap.end_time > timestamp)
}
