//! Image URLs for new events.
//!
//! The scheduler treats images as opaque strings supplied by a provider at
//! creation time.

use crate::event::NewEvent;

pub trait MediaProvider {
    /// An image for `event`, or `None` to leave it without one.
    fn image_for(&mut self, event: &NewEvent) -> Option<String>;
}

/// Never supplies an image.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMedia;

impl MediaProvider for NoMedia {
    fn image_for(&mut self, _event: &NewEvent) -> Option<String> {
        None
    }
}

/// Gives every event the same image.
#[derive(Debug, Clone)]
pub struct FixedImage(pub String);

impl MediaProvider for FixedImage {
    fn image_for(&mut self, _event: &NewEvent) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Provider for an optional configured URL.
pub fn provider_for(url: Option<&str>) -> Box<dyn MediaProvider> {
    match url {
        Some(url) if !url.trim().is_empty() => Box::new(FixedImage(url.to_string())),
        _ => Box::new(NoMedia),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn sample() -> NewEvent {
        NewEvent::new(
            "Sample",
            NaiveDate::from_ymd_opt(2024, 3, 11).unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        )
    }

    #[test]
    fn provider_for_blank_url_gives_nothing() {
        assert_eq!(provider_for(None).image_for(&sample()), None);
        assert_eq!(provider_for(Some("  ")).image_for(&sample()), None);
    }

    #[test]
    fn fixed_image_repeats_url() {
        let mut provider = provider_for(Some("https://img.example/a.jpg"));
        assert_eq!(provider.image_for(&sample()).as_deref(), Some("https://img.example/a.jpg"));
        assert_eq!(provider.image_for(&sample()).as_deref(), Some("https://img.example/a.jpg"));
    }
}
