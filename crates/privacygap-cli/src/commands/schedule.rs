use chrono::Utc;
use clap::Subcommand;
use privacygap_core::{
    generate_daily_gap_schedule, generate_schedule_range, Config, PrivacyGapSchedule,
};

use super::{resolve_date, resolve_subject};

#[derive(Subcommand)]
pub enum ScheduleAction {
    /// Show one day's gaps
    Show {
        /// Subject id (defaults to `default_subject` from config)
        #[arg(long)]
        subject: Option<String>,
        /// UTC date as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
        /// Print the schedule as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show gaps for consecutive days
    Range {
        #[arg(long)]
        subject: Option<String>,
        /// First UTC date as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        from: Option<String>,
        /// Number of days
        #[arg(long, default_value = "7")]
        days: u32,
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: ScheduleAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    match action {
        ScheduleAction::Show {
            subject,
            date,
            json,
        } => {
            let subject = resolve_subject(subject, &config)?;
            let date = resolve_date(date.as_deref())?;
            let schedule = generate_daily_gap_schedule(&subject, date, &config.gaps)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&schedule)?);
            } else {
                print_schedule(&schedule);
            }
        }
        ScheduleAction::Range {
            subject,
            from,
            days,
            json,
        } => {
            let subject = resolve_subject(subject, &config)?;
            let from = resolve_date(from.as_deref())?;
            let schedules = generate_schedule_range(&subject, from, days, &config.gaps, Utc::now())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&schedules)?);
            } else {
                for schedule in &schedules {
                    print_schedule(schedule);
                }
            }
        }
    }
    Ok(())
}

fn print_schedule(schedule: &PrivacyGapSchedule) {
    println!(
        "{} {} ({} gaps)",
        schedule.subject_id,
        schedule.date,
        schedule.gaps.len()
    );
    for gap in &schedule.gaps {
        println!(
            "  {} - {}  {}s",
            gap.start_time.format("%H:%M:%S"),
            gap.end_time.format("%H:%M:%S"),
            gap.duration_ms / 1000
        );
    }
}
