use anyhow::{Context, Result};
use chrono::NaiveDate;
use weekcal_core::config::SchedulerConfig;

use crate::render::render_week;

pub fn run(
    config: SchedulerConfig,
    today: NaiveDate,
    date: Option<String>,
    demo: bool,
    json: bool,
) -> Result<()> {
    let scheduler = super::open_scheduler(config, today, date.as_deref(), demo)?;

    if json {
        let groups: Vec<_> = scheduler
            .week_events()
            .into_iter()
            .map(|(day, events)| serde_json::json!({ "date": day, "events": events }))
            .collect();
        let out = serde_json::to_string_pretty(&groups).context("Failed to serialize week")?;
        println!("{}", out);
        return Ok(());
    }

    println!(
        "{}",
        render_week(&scheduler.snapshot(), &scheduler.week_events(), today)
    );
    Ok(())
}
