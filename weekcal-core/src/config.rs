//! Scheduler configuration.
//!
//! Settings come from built-in defaults, then `~/.config/weekcal/config.toml`
//! (or an explicit file), then `WEEKCAL_*` environment variables.

use std::path::{Path, PathBuf};

use chrono::Weekday;
use ::config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_EVENT_IMAGE_URL, DEFAULT_SWIPE_THRESHOLD, DEFAULT_WEEK_START};
use crate::error::{WeekcalError, WeekcalResult};
use crate::navigation::NavigationMode;

const ENV_PREFIX: &str = "WEEKCAL";

fn default_week_start() -> Weekday {
    DEFAULT_WEEK_START
}

fn default_swipe_threshold() -> f64 {
    DEFAULT_SWIPE_THRESHOLD
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    #[serde(default = "default_week_start")]
    pub week_starts_on: Weekday,

    /// Pixels a swipe must travel before it navigates
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: f64,

    #[serde(default)]
    pub mode: NavigationMode,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_image_url: Option<String>,

    #[serde(default)]
    pub seed_demo_events: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        SchedulerConfig {
            week_starts_on: DEFAULT_WEEK_START,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            mode: NavigationMode::default(),
            default_image_url: None,
            seed_demo_events: false,
        }
    }
}

impl SchedulerConfig {
    pub fn config_path() -> WeekcalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| WeekcalError::Config("Could not determine config directory".into()))?
            .join("weekcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, creating a commented template there
    /// on first use.
    pub fn load() -> WeekcalResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::build(&config_path, Environment::with_prefix(ENV_PREFIX))
    }

    /// Load from an explicit file. `~` is expanded; a missing file is an error.
    pub fn load_from(path: &str) -> WeekcalResult<Self> {
        let expanded = Self::expand_path(path);

        if !expanded.exists() {
            return Err(WeekcalError::Config(format!(
                "Config file not found: {}",
                expanded.display()
            )));
        }

        Self::build(&expanded, Environment::with_prefix(ENV_PREFIX))
    }

    /// Expand a leading `~` in a user-supplied config path.
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).into_owned())
    }

    fn build(path: &Path, env: Environment) -> WeekcalResult<Self> {
        let config: SchedulerConfig = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(env.try_parsing(true))
            .build()
            .map_err(|e| WeekcalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| WeekcalError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> WeekcalResult<()> {
        if !self.swipe_threshold.is_finite() || self.swipe_threshold <= 0.0 {
            return Err(WeekcalError::Config(format!(
                "swipe_threshold must be a positive number of pixels, got {}",
                self.swipe_threshold
            )));
        }
        Ok(())
    }

    /// Write the current settings to `path`.
    pub fn save(&self, path: &Path) -> WeekcalResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| WeekcalError::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)
            .map_err(|e| WeekcalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a config file with every option commented out.
    pub fn create_default_config(path: &Path) -> WeekcalResult<()> {
        let contents = format!(
            "\
# weekcal configuration

# First day of the visible week (mon, tue, ..., sun):
# week_starts_on = \"{}\"

# Pixels a swipe must travel before it changes the day:
# swipe_threshold = {:.0}

# Layout: \"desktop\" (week board, drag and drop) or \"mobile\" (day view, swipe):
# mode = \"desktop\"

# Image attached to new events that don't bring their own:
# default_image_url = \"{}\"

# Fill the first week with sample events:
# seed_demo_events = false
",
            DEFAULT_WEEK_START, DEFAULT_SWIPE_THRESHOLD, DEFAULT_EVENT_IMAGE_URL
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                WeekcalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| WeekcalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
