//! Seed strings for per-day schedules.

use chrono::NaiveDate;

/// Build the seed for `subject_id` on `date`: `"<subject_id>:<YYYY-MM-DD>"`.
///
/// The date part has fixed width, so distinct (subject, date) pairs give
/// distinct seeds as long as subject ids are unique.
pub fn build_seed(subject_id: &str, date: NaiveDate) -> String {
    format!("{}:{}", subject_id, date.format("%Y-%m-%d"))
}
