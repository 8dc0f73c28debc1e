//! Day-indexed queries.

use chrono::NaiveDate;

use super::EventStore;
use crate::date_window::WeekWindow;
use crate::event::Event;

impl EventStore {
    /// Events on `date`, earliest first. Events sharing a time keep their
    /// insertion order. The result is a fresh copy.
    pub fn events_for_day(&self, date: NaiveDate) -> Vec<Event> {
        let mut events: Vec<Event> = self
            .events
            .iter()
            .filter(|e| e.date == date)
            .cloned()
            .collect();

        // Stable, so ties stay in insertion order
        events.sort_by_key(|e| e.time);
        events
    }

    /// One group per day of `window`, in window order.
    pub fn events_for_window(&self, window: &WeekWindow) -> Vec<(NaiveDate, Vec<Event>)> {
        window
            .iter()
            .map(|day| (day, self.events_for_day(day)))
            .collect()
    }
}
