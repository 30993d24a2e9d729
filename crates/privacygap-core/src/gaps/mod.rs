//! Deterministic daily privacy-gap schedules.
//!
//! This module provides:
//! - Seed derivation and the seeded random stream
//! - Gap count, offset and duration selection
//! - Schedule assembly and lookups over a schedule

mod config;
mod placement;
mod query;
mod rng;
mod schedule;
mod seed;

pub use config::PrivacyGapConfig;
pub use placement::{
    distribute_gaps, sample_durations, select_gap_count, GapPlacement, PlacementStrategy,
};
pub use query::{
    get_current_gap, get_time_until_next_gap, is_timestamp_in_scheduled_gap, next_gap,
    remaining_gaps,
};
pub use rng::{create_seeded_random, hash_seed, SeededRandom};
pub use schedule::{
    generate_daily_gap_schedule, generate_daily_gap_schedule_at, generate_schedule_range,
    PrivacyGapSchedule, ScheduledGap, SCHEDULE_TTL_HOURS,
};
pub use seed::build_seed;
