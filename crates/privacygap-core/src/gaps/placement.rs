//! Gap count selection, offset placement and duration sampling.
//!
//! Every function here consumes draws from a shared [`SeededRandom`] in a
//! fixed order: one draw for the count, one per offset (none for the
//! even-spacing fallback), then one per duration. Changing that order changes
//! every schedule ever generated.

use serde::{Deserialize, Serialize};

use super::config::PrivacyGapConfig;
use super::rng::SeededRandom;

/// How the offsets of a day were placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementStrategy {
    /// Zero or one gap: no distribution needed
    Single,
    /// One randomized start per equal segment of the window
    Stratified,
    /// Spacing did not fit; gaps spread evenly without consuming draws
    EvenSpacing,
}

/// Minute offsets from window start, ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GapPlacement {
    pub offsets: Vec<u64>,
    pub strategy: PlacementStrategy,
}

/// Draw the day's gap count in `[min_daily_gaps, max_daily_gaps]`.
pub fn select_gap_count(rng: &mut SeededRandom, config: &PrivacyGapConfig) -> u32 {
    rng.next_in_range(
        u64::from(config.min_daily_gaps),
        u64::from(config.max_daily_gaps),
    ) as u32
}

/// Place `gap_count` start offsets (minutes) inside a window.
///
/// # Arguments
/// * `window_minutes` - Length of the waking window
/// * `spacing_minutes` - Minimum free time between one gap's end and the next start
/// * `footprint_minutes` - Room reserved per gap (the maximum duration)
///
/// The caller guarantees `gap_count * footprint_minutes <= window_minutes`,
/// which [`PrivacyGapConfig::validate`] enforces for the configured maximum.
pub fn distribute_gaps(
    rng: &mut SeededRandom,
    gap_count: u32,
    window_minutes: u64,
    spacing_minutes: u64,
    footprint_minutes: u64,
) -> GapPlacement {
    let count = u64::from(gap_count);
    match count {
        0 => GapPlacement {
            offsets: Vec::new(),
            strategy: PlacementStrategy::Single,
        },
        1 => GapPlacement {
            offsets: vec![rng.next_in_range(0, window_minutes - footprint_minutes)],
            strategy: PlacementStrategy::Single,
        },
        _ => {
            let required = (count - 1).saturating_mul(spacing_minutes + footprint_minutes);
            let capacity = window_minutes.saturating_sub(count * footprint_minutes);
            if required > capacity {
                tracing::warn!(
                    gap_count,
                    window_minutes,
                    spacing_minutes,
                    "minimum spacing does not fit the waking window; spacing gaps evenly"
                );
                GapPlacement {
                    offsets: even_offsets(count, window_minutes, footprint_minutes),
                    strategy: PlacementStrategy::EvenSpacing,
                }
            } else {
                GapPlacement {
                    offsets: stratified_offsets(
                        rng,
                        count,
                        window_minutes,
                        spacing_minutes,
                        footprint_minutes,
                    ),
                    strategy: PlacementStrategy::Stratified,
                }
            }
        }
    }
}

fn stratified_offsets(
    rng: &mut SeededRandom,
    count: u64,
    window_minutes: u64,
    spacing_minutes: u64,
    footprint_minutes: u64,
) -> Vec<u64> {
    let segment = window_minutes / count;
    let mut offsets: Vec<u64> = Vec::with_capacity(count as usize);

    for i in 0..count {
        let mut lo = i * segment;
        let hi = lo + segment - footprint_minutes;

        if let Some(&prev) = offsets.last() {
            let earliest = prev + footprint_minutes + spacing_minutes;
            if earliest > hi {
                // Spacing cannot be met inside this segment; start as late as it allows.
                // Unsettled rule (DESIGN.md open question 3): changing it changes schedules.
                lo = hi;
            } else if earliest > lo {
                lo = earliest;
            }
        }

        offsets.push(rng.next_in_range(lo, hi));
    }

    offsets
}

fn even_offsets(count: u64, window_minutes: u64, footprint_minutes: u64) -> Vec<u64> {
    let usable = window_minutes - footprint_minutes;
    (0..count).map(|i| i * usable / (count - 1)).collect()
}

/// Draw one duration in `[min_gap_duration_ms, max_gap_duration_ms]` per gap.
pub fn sample_durations(
    rng: &mut SeededRandom,
    gap_count: usize,
    config: &PrivacyGapConfig,
) -> Vec<u64> {
    (0..gap_count)
        .map(|_| rng.next_in_range(config.min_gap_duration_ms, config.max_gap_duration_ms))
        .collect()
}
