//! Week windows and date stepping.
//!
//! Everything here is pure date arithmetic on `NaiveDate`. Windows are derived
//! from an anchor date on every call and never cached.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::constants::{DAYS_PER_WEEK, SUPPORTED_YEARS};
use crate::error::{WeekcalError, WeekcalResult};

/// Which way a cursor moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    fn sign(self) -> i64 {
        match self {
            Direction::Prev => -1,
            Direction::Next => 1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Prev => write!(f, "prev"),
            Direction::Next => write!(f, "next"),
        }
    }
}

/// The 7 consecutive dates of a visible week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WeekWindow {
    days: [NaiveDate; DAYS_PER_WEEK],
}

impl WeekWindow {
    pub fn days(&self) -> &[NaiveDate; DAYS_PER_WEEK] {
        &self.days
    }

    pub fn first(&self) -> NaiveDate {
        self.days[0]
    }

    pub fn last(&self) -> NaiveDate {
        self.days[DAYS_PER_WEEK - 1]
    }

    /// Windows are contiguous, so a range check is enough.
    pub fn contains(&self, day: NaiveDate) -> bool {
        day >= self.first() && day <= self.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.iter().copied()
    }

    /// Header title for the window, e.g. "March 2024".
    pub fn month_label(&self) -> String {
        self.first().format("%B %Y").to_string()
    }
}

impl fmt::Display for WeekWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            self.first().format("%Y-%m-%d"),
            self.last().format("%Y-%m-%d")
        )
    }
}

/// The week containing `anchor`, starting on the most recent `week_starts_on`
/// on or before it.
pub fn week_window(anchor: NaiveDate, week_starts_on: Weekday) -> WeekWindow {
    let start = week_start(anchor, week_starts_on);
    let days = std::array::from_fn(|i| start + Duration::days(i as i64));
    WeekWindow { days }
}

pub fn is_within_window(day: NaiveDate, window: &WeekWindow) -> bool {
    window.iter().any(|d| d == day)
}

/// Shift `date` by `days` in the given direction. A step that would leave
/// `SUPPORTED_YEARS` leaves `date` where it is.
pub fn step_date(date: NaiveDate, direction: Direction, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(direction.sign() * days))
        .filter(|d| SUPPORTED_YEARS.contains(&d.year()))
        .unwrap_or(date)
}

/// Reject dates outside `SUPPORTED_YEARS`.
pub fn ensure_supported(date: NaiveDate) -> WeekcalResult<NaiveDate> {
    if SUPPORTED_YEARS.contains(&date.year()) {
        Ok(date)
    } else {
        Err(WeekcalError::Validation(format!(
            "Date {} is outside the supported years {}-{}",
            date,
            SUPPORTED_YEARS.start(),
            SUPPORTED_YEARS.end()
        )))
    }
}

fn week_start(anchor: NaiveDate, week_starts_on: Weekday) -> NaiveDate {
    let back = (anchor.weekday().num_days_from_monday() + 7
        - week_starts_on.num_days_from_monday())
        % 7;
    anchor - Duration::days(back as i64)
}
