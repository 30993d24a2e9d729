use chrono::{DateTime, Utc};
use clap::Subcommand;
use privacygap_core::{
    generate_daily_gap_schedule, get_current_gap, get_time_until_next_gap,
    is_timestamp_in_scheduled_gap, Config,
};
use serde::Serialize;

use super::resolve_subject;

#[derive(Subcommand)]
pub enum GapAction {
    /// Report whether an instant falls inside a gap
    Check {
        #[arg(long)]
        subject: Option<String>,
        /// RFC 3339 instant (defaults to now)
        #[arg(long)]
        at: Option<String>,
    },
}

#[derive(Serialize)]
struct GapStatus {
    subject_id: String,
    at: DateTime<Utc>,
    in_gap: bool,
    current_gap: Option<privacygap_core::ScheduledGap>,
    ms_until_next_gap: Option<i64>,
}

pub fn run(action: GapAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        GapAction::Check { subject, at } => {
            let config = Config::load()?;
            let subject = resolve_subject(subject, &config)?;
            let at = match at {
                Some(s) => DateTime::parse_from_rfc3339(&s)
                    .map_err(|e| format!("invalid timestamp '{s}': {e}"))?
                    .with_timezone(&Utc),
                None => Utc::now(),
            };

            let schedule = generate_daily_gap_schedule(&subject, at.date_naive(), &config.gaps)?;
            let status = GapStatus {
                in_gap: is_timestamp_in_scheduled_gap(&schedule, at),
                current_gap: get_current_gap(&schedule, at).cloned(),
                ms_until_next_gap: get_time_until_next_gap(&schedule, at)
                    .map(|d| d.num_milliseconds()),
                subject_id: subject,
                at,
            };
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
    }
    Ok(())
}
