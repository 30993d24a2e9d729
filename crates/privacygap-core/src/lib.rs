//! # privacygap Core Library
//!
//! Generates the daily "privacy gaps" of a monitored subject: windows during
//! which activity monitoring is suspended. The schedule for a day is a pure
//! function of the subject id, the UTC date and the gap policy, so every
//! device and server derives the same gaps without talking to each other.
//!
//! ## Architecture
//!
//! - **Gaps**: seeded random stream, stratified gap placement, schedule
//!   assembly and lookups
//! - **Storage**: TOML-based configuration for the CLI
//!
//! ## Key Components
//!
//! - [`generate_daily_gap_schedule`]: Build a day's schedule
//! - [`PrivacyGapConfig`]: Policy bounds for gap count, duration and spacing
//! - [`is_timestamp_in_scheduled_gap`]: Enforcement-side lookup
//! - [`Config`]: Application configuration management

pub mod error;
pub mod gaps;
pub mod storage;

pub use error::{ConfigError, ConfigurationError, CoreError};
pub use gaps::{
    generate_daily_gap_schedule, generate_daily_gap_schedule_at, generate_schedule_range,
    get_current_gap, get_time_until_next_gap, is_timestamp_in_scheduled_gap, PrivacyGapConfig,
    PrivacyGapSchedule, ScheduledGap,
};
pub use storage::Config;
