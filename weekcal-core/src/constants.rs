use std::ops::RangeInclusive;

use chrono::Weekday;

/// Horizontal pan distance (in pixels) a swipe must exceed to navigate.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 100.0;

pub const DEFAULT_WEEK_START: Weekday = Weekday::Sun;

pub const DAYS_PER_WEEK: usize = 7;

/// Suggested `default_image_url` in the config template. Events get no image
/// unless that option is set.
pub const DEFAULT_EVENT_IMAGE_URL: &str =
    "https://framerusercontent.com/images/B0K9QMUiWeDySxhGs5D2pwZro.jpg?scale-down-to=1200";

/// Years the calendar accepts from user input. Week arithmetic stays clear of
/// chrono's date limits inside this range.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1..=9999;
