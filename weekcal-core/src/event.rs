//! Event types and field parsing.
//!
//! The view layer hands over raw text for dates, times and durations; the
//! parsers here turn that text into typed values or a `Validation` error.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::date_window::ensure_supported;
use crate::error::{WeekcalError, WeekcalResult};

/// A scheduled event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Assigned once by the store, never changes
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    /// Only used for ordering within a day
    pub time: NaiveTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Duration>,
    /// Opaque URL, never interpreted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<EventColor>,
}

impl Event {
    /// Time of day as shown on a card, e.g. "09:00".
    pub fn time_label(&self) -> String {
        self.time.format("%H:%M").to_string()
    }

    pub fn date_label(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date_label(), self.time_label(), self.title)
    }
}

/// Field values for a new event, before an id is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration: Option<Duration>,
    pub image_url: Option<String>,
    pub color: Option<EventColor>,
}

impl NewEvent {
    pub fn new(title: impl Into<String>, date: NaiveDate, time: NaiveTime) -> Self {
        NewEvent {
            title: title.into(),
            description: String::new(),
            date,
            time,
            duration: None,
            image_url: None,
            color: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn color(mut self, color: EventColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Title with surrounding whitespace removed; fails if nothing is left.
    pub(crate) fn validated_title(&self) -> WeekcalResult<String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(WeekcalError::Validation("Event name is required".into()));
        }
        Ok(title.to_string())
    }

    pub(crate) fn into_event(self, id: String, title: String) -> Event {
        Event {
            id,
            title,
            description: self.description,
            date: self.date,
            time: self.time,
            duration: self.duration,
            image_url: self.image_url,
            color: self.color,
        }
    }
}

/// Card color tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventColor {
    Blue,
    Purple,
    Green,
    Orange,
    Red,
    Pink,
    Indigo,
    Teal,
    Yellow,
    Cyan,
}

impl EventColor {
    pub const ALL: [EventColor; 10] = [
        EventColor::Blue,
        EventColor::Purple,
        EventColor::Green,
        EventColor::Orange,
        EventColor::Red,
        EventColor::Pink,
        EventColor::Indigo,
        EventColor::Teal,
        EventColor::Yellow,
        EventColor::Cyan,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EventColor::Blue => "blue",
            EventColor::Purple => "purple",
            EventColor::Green => "green",
            EventColor::Orange => "orange",
            EventColor::Red => "red",
            EventColor::Pink => "pink",
            EventColor::Indigo => "indigo",
            EventColor::Teal => "teal",
            EventColor::Yellow => "yellow",
            EventColor::Cyan => "cyan",
        }
    }
}

impl fmt::Display for EventColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EventColor {
    type Err = WeekcalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        EventColor::ALL
            .into_iter()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| WeekcalError::Validation(format!("Unknown color '{}'", s)))
    }
}

/// Parse a `yyyy-MM-dd` date.
pub fn parse_date(input: &str) -> WeekcalResult<NaiveDate> {
    let date = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        WeekcalError::Validation(format!(
            "Invalid date format '{}'. Expected YYYY-MM-DD",
            input
        ))
    })?;
    ensure_supported(date)
}

const TIME_FORMATS: [&str; 3] = ["%H:%M", "%H:%M:%S", "%I:%M %p"];

/// Parse a time of day: `HH:MM`, `HH:MM:SS`, or 12-hour `hh:MM AM`.
pub fn parse_time(input: &str) -> WeekcalResult<NaiveTime> {
    let trimmed = input.trim();
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| {
            WeekcalError::Validation(format!(
                "Invalid time '{}'. Expected HH:MM or hh:MM AM/PM",
                input
            ))
        })
}

/// Parse a human duration such as `30m` or `1h 30m`.
pub fn parse_duration(input: &str) -> WeekcalResult<Duration> {
    humantime::parse_duration(input.trim())
        .map_err(|e| WeekcalError::Validation(format!("Invalid duration '{}': {}", input, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_time_24_hour() {
        assert_eq!(parse_time("09:00").unwrap(), NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(parse_time("14:30:15").unwrap(), NaiveTime::from_hms_opt(14, 30, 15).unwrap());
    }

    #[test]
    fn parse_time_12_hour() {
        assert_eq!(parse_time("09:00 AM").unwrap(), NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(parse_time("02:00 PM").unwrap(), NaiveTime::from_hms_opt(14, 0, 0).unwrap());
        assert_eq!(parse_time("12:00 PM").unwrap(), NaiveTime::from_hms_opt(12, 0, 0).unwrap());
    }

    #[test]
    fn parse_time_rejects_garbage() {
        assert!(matches!(parse_time(""), Err(WeekcalError::Validation(_))));
        assert!(matches!(parse_time("25:00"), Err(WeekcalError::Validation(_))));
        assert!(matches!(parse_time("noon"), Err(WeekcalError::Validation(_))));
    }

    #[test]
    fn parse_date_iso_only() {
        assert_eq!(parse_date("2024-03-15").unwrap(), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert!(parse_date("15/03/2024").is_err());
        assert!(parse_date("2024-02-30").is_err());
        assert!(parse_date("+12345-01-01").is_err());
    }

    #[test]
    fn parse_duration_human() {
        assert_eq!(parse_duration("30m").unwrap(), Duration::from_secs(30 * 60));
        assert_eq!(parse_duration("1h 30m").unwrap(), Duration::from_secs(90 * 60));
        assert!(parse_duration("soon").is_err());
    }

    #[test]
    fn color_from_name_is_case_insensitive() {
        assert_eq!("Blue".parse::<EventColor>().unwrap(), EventColor::Blue);
        assert_eq!(" teal ".parse::<EventColor>().unwrap(), EventColor::Teal);
        assert!("magenta".parse::<EventColor>().is_err());
    }

    #[test]
    fn validated_title_trims() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
        let time = NaiveTime::from_hms_opt(9, 0, 0).unwrap();

        let ok = NewEvent::new("  Standup  ", date, time);
        assert_eq!(ok.validated_title().unwrap(), "Standup");

        let blank = NewEvent::new(" \t ", date, time);
        assert!(matches!(blank.validated_title(), Err(WeekcalError::Validation(_))));
    }
}
