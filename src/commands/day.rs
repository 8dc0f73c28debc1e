use anyhow::{Context, Result};
use chrono::NaiveDate;
use weekcal_core::config::SchedulerConfig;

use crate::render::render_day;

pub fn run(
    config: SchedulerConfig,
    today: NaiveDate,
    date: Option<String>,
    demo: bool,
    json: bool,
) -> Result<()> {
    let scheduler = super::open_scheduler(config, today, date.as_deref(), demo)?;
    let snapshot = scheduler.snapshot();

    if json {
        println!(
            "{}",
            snapshot.to_json_pretty().context("Failed to serialize day")?
        );
        return Ok(());
    }

    println!("{}", render_day(&snapshot, today));
    Ok(())
}
