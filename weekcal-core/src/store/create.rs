//! Adding events to the store.

use tracing::debug;
use uuid::Uuid;

use super::EventStore;
use crate::error::{WeekcalError, WeekcalResult};
use crate::event::{Event, NewEvent};

impl EventStore {
    /// Validate `new_event`, assign it a fresh id and append it.
    ///
    /// An empty title (after trimming) is rejected and leaves the store untouched.
    pub fn add(&mut self, new_event: NewEvent) -> WeekcalResult<Event> {
        let title = new_event.validated_title()?;
        let id = self.fresh_id();
        let event = new_event.into_event(id, title);

        debug!(id = %event.id, date = %event.date, "event added");
        self.events.push(event.clone());
        self.touch();
        Ok(event)
    }

    /// Insert a fully formed event, keeping ids unique.
    pub(crate) fn insert(&mut self, event: Event) -> WeekcalResult<()> {
        if self.find_by_id(&event.id).is_some() {
            return Err(WeekcalError::Validation(format!(
                "Duplicate event id '{}'",
                event.id
            )));
        }
        self.events.push(event);
        self.touch();
        Ok(())
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = format!("event-{}", Uuid::new_v4());
            if self.find_by_id(&id).is_none() {
                return id;
            }
        }
    }
}
