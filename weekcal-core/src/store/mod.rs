//! In-memory event store.
//!
//! A single flat collection is the source of truth. Day groupings and
//! orderings are computed on read, never stored.

mod create;
mod delete;
mod list;
mod update;

use crate::error::{WeekcalError, WeekcalResult};
use crate::event::Event;

#[derive(Debug, Default, Clone)]
pub struct EventStore {
    events: Vec<Event>,
    /// Bumped on every committed mutation
    version: u64,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    fn position(&self, id: &str) -> WeekcalResult<usize> {
        self.events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| WeekcalError::EventNotFound(id.to_string()))
    }

    fn touch(&mut self) {
        self.version += 1;
    }
}
