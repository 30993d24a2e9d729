pub mod config;
pub mod gap;
pub mod schedule;

use chrono::{NaiveDate, Utc};
use privacygap_core::Config;

/// Subject from `--subject`, falling back to `default_subject` in the config.
pub fn resolve_subject(
    subject: Option<String>,
    config: &Config,
) -> Result<String, Box<dyn std::error::Error>> {
    subject
        .or_else(|| config.default_subject.clone())
        .ok_or_else(|| "no subject given; pass --subject or set default_subject".into())
}

/// Parse `YYYY-MM-DD`, defaulting to today (UTC).
pub fn resolve_date(date: Option<&str>) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| format!("invalid date '{s}': {e}").into()),
        None => Ok(Utc::now().date_naive()),
    }
}
