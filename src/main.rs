mod commands;
mod render;
mod utils;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use weekcal_core::config::SchedulerConfig;

#[derive(Parser)]
#[command(name = "weekcal")]
#[command(about = "A week/day calendar: move events between days and swipe through weeks")]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the week board
    Week {
        /// Any day in the week to show (e.g., "2025-03-20", "next monday")
        #[arg(short, long)]
        date: Option<String>,

        /// Fill the week with sample events
        #[arg(long)]
        demo: bool,

        /// Print JSON instead of the board
        #[arg(long)]
        json: bool,
    },
    /// Print a single day
    Day {
        /// Day to show (defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Fill the week with sample events
        #[arg(long)]
        demo: bool,

        /// Print the scheduler snapshot as JSON
        #[arg(long)]
        json: bool,
    },
    /// Start an interactive session
    Session {
        /// Use the single-day mobile layout
        #[arg(long)]
        mobile: bool,

        /// Day to start on (defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Start with sample events
        #[arg(long)]
        demo: bool,
    },
    /// Show the config path and effective settings
    Config {
        /// Write the default config file if it doesn't exist
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let today = chrono::Local::now().date_naive();

    if let Commands::Config { init: true } = cli.command {
        commands::config::init(&commands::config::resolve_path(cli.config.as_deref())?)?;
    }

    let config = match cli.config.as_deref() {
        Some(path) => SchedulerConfig::load_from(path),
        None => SchedulerConfig::load(),
    }
    .context("Failed to load config")?;
    debug!(?config, "config loaded");

    match cli.command {
        Commands::Week { date, demo, json } => commands::week::run(config, today, date, demo, json),
        Commands::Day { date, demo, json } => commands::day::run(config, today, date, demo, json),
        Commands::Session { mobile, date, demo } => {
            commands::session::run(config, today, mobile, date, demo)
        }
        Commands::Config { .. } => {
            let config_path = commands::config::resolve_path(cli.config.as_deref())?;
            commands::config::run(&config, &config_path)
        }
    }
}
