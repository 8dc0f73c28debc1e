use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use weekcal_core::config::SchedulerConfig;

/// The config file in use: `--config` if given, else the default location.
pub fn resolve_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    match explicit_path {
        Some(path) => Ok(SchedulerConfig::expand_path(path)),
        None => SchedulerConfig::config_path().context("Failed to locate config"),
    }
}

/// Write the commented default config unless one is already there.
pub fn init(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        println!(
            "{} {}",
            "Config already exists:".dimmed(),
            config_path.display()
        );
        return Ok(());
    }

    SchedulerConfig::create_default_config(config_path)
        .context("Failed to write default config")?;
    println!("{} {}", "Created".green(), config_path.display());
    Ok(())
}

pub fn run(config: &SchedulerConfig, config_path: &Path) -> Result<()> {
    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());
    println!();
    println!("{}", "Settings".bold());
    println!("  Week starts on:   {}", config.week_starts_on);
    println!("  Swipe threshold:  {}px", config.swipe_threshold);
    println!("  Mode:             {}", config.mode);
    println!(
        "  Event image:      {}",
        config.default_image_url.as_deref().unwrap_or("none")
    );
    println!("  Seed demo events: {}", config.seed_demo_events);

    Ok(())
}
