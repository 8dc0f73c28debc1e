pub mod config;
pub mod day;
pub mod session;
pub mod week;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use weekcal_core::Scheduler;
use weekcal_core::config::SchedulerConfig;

use crate::utils::dates::parse_day;

/// Build a scheduler for one command, positioned on `--date` if given.
pub(crate) fn open_scheduler(
    config: SchedulerConfig,
    today: NaiveDate,
    date: Option<&str>,
    demo: bool,
) -> Result<Scheduler> {
    let start = match date {
        Some(input) => parse_day(input, today)?,
        None => today,
    };

    let seeded = config.seed_demo_events;
    let mut scheduler = Scheduler::new(config, start).context("Failed to start scheduler")?;

    if demo && !seeded {
        scheduler.seed_demo_week(&mut rand::rng());
    }

    Ok(scheduler)
}
