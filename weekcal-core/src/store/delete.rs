//! Removing events from the store.

use tracing::debug;

use super::EventStore;
use crate::error::WeekcalResult;
use crate::event::Event;

impl EventStore {
    /// Remove exactly one event and hand it back.
    pub fn delete(&mut self, id: &str) -> WeekcalResult<Event> {
        let idx = self.position(id)?;
        let removed = self.events.remove(idx);
        self.touch();

        debug!(id, "event deleted");
        Ok(removed)
    }
}
