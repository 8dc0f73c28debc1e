//! In-place updates of existing events.

use chrono::{NaiveDate, NaiveTime};
use tracing::debug;

use super::EventStore;
use crate::error::WeekcalResult;
use crate::event::Event;

impl EventStore {
    /// Move an event to `date`. Only the date changes; reassigning to the
    /// current date is a harmless repeat.
    pub fn reassign_date(&mut self, id: &str, date: NaiveDate) -> WeekcalResult<Event> {
        let idx = self.position(id)?;
        self.events[idx].date = date;
        self.touch();

        debug!(id, %date, "event reassigned");
        Ok(self.events[idx].clone())
    }

    /// Change the time of day of an event, leaving its date alone.
    pub fn retime(&mut self, id: &str, time: NaiveTime) -> WeekcalResult<Event> {
        let idx = self.position(id)?;
        self.events[idx].time = time;
        self.touch();

        debug!(id, %time, "event retimed");
        Ok(self.events[idx].clone())
    }
}
