//! Week and day cursors.
//!
//! `NavigationController` owns the week anchor and the selected day and keeps
//! them consistent: the selected day always lies in the window derived from
//! the anchor.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub use crate::date_window::Direction;
use crate::date_window::{WeekWindow, step_date, week_window};
use crate::error::WeekcalError;

/// Layout the view is rendering, which decides how day selection behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationMode {
    /// Week board; only in-window days are offered for selection
    #[default]
    Desktop,
    /// Single day view navigated by swiping
    Mobile,
}

impl fmt::Display for NavigationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationMode::Desktop => write!(f, "desktop"),
            NavigationMode::Mobile => write!(f, "mobile"),
        }
    }
}

impl FromStr for NavigationMode {
    type Err = WeekcalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "desktop" => Ok(NavigationMode::Desktop),
            "mobile" => Ok(NavigationMode::Mobile),
            other => Err(WeekcalError::Validation(format!(
                "Unknown mode '{}'. Expected desktop or mobile",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NavigationController {
    week_anchor: NaiveDate,
    selected_day: NaiveDate,
    week_starts_on: Weekday,
    mode: NavigationMode,
}

impl NavigationController {
    /// Both cursors start on `today`.
    pub fn new(today: NaiveDate, week_starts_on: Weekday, mode: NavigationMode) -> Self {
        NavigationController {
            week_anchor: today,
            selected_day: today,
            week_starts_on,
            mode,
        }
    }

    pub fn week_anchor(&self) -> NaiveDate {
        self.week_anchor
    }

    pub fn selected_day(&self) -> NaiveDate {
        self.selected_day
    }

    pub fn mode(&self) -> NavigationMode {
        self.mode
    }

    pub fn week_window(&self) -> WeekWindow {
        week_window(self.week_anchor, self.week_starts_on)
    }

    /// Move the anchor a whole week. A selected day left behind snaps to the
    /// first day of the new window.
    pub fn step_week(&mut self, direction: Direction) {
        self.week_anchor = step_date(self.week_anchor, direction, 7);

        let window = self.week_window();
        if !window.contains(self.selected_day) {
            self.selected_day = window.first();
        }

        debug!(%direction, anchor = %self.week_anchor, selected = %self.selected_day, "stepped week");
    }

    /// Move the selected day by one. Crossing into another week re-anchors the
    /// week on the new day.
    pub fn step_day(&mut self, direction: Direction) {
        let previous = week_window(self.selected_day, self.week_starts_on);
        self.selected_day = step_date(self.selected_day, direction, 1);

        if !previous.contains(self.selected_day) {
            self.week_anchor = self.selected_day;
        }

        debug!(%direction, anchor = %self.week_anchor, selected = %self.selected_day, "stepped day");
    }

    /// Select `day` directly.
    ///
    /// In mobile mode a day outside the current window pulls the week along.
    /// In desktop mode the view only offers in-window days, so an
    /// out-of-window day is a caller bug; it is logged, not rejected.
    pub fn select_day(&mut self, day: NaiveDate) {
        let in_window = self.week_window().contains(day);
        self.selected_day = day;

        if !in_window {
            match self.mode {
                NavigationMode::Mobile => self.week_anchor = day,
                NavigationMode::Desktop => {
                    warn!(%day, window = %self.week_window(), "selected day outside visible week")
                }
            }
        }
    }

    /// Jump both cursors to `day`.
    pub fn go_to(&mut self, day: NaiveDate) {
        self.week_anchor = day;
        self.selected_day = day;
    }
}
