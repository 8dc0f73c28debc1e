//! Core types for weekcal.
//!
//! This crate holds the scheduling state machine behind the week/day calendar:
//! - `event` and `store` for the in-memory event collection
//! - `date_window` and `navigation` for the week/day cursors
//! - `gesture` for turning drag and swipe gestures into commands
//! - `scheduler`, the composition root consumed by a view layer

pub mod config;
pub mod constants;
pub mod date_window;
pub mod demo;
pub mod error;
pub mod event;
pub mod gesture;
pub mod media;
pub mod navigation;
pub mod scheduler;
pub mod store;

pub use date_window::{WeekWindow, is_within_window, week_window};
pub use error::{WeekcalError, WeekcalResult};
pub use event::{Event, EventColor, NewEvent};
pub use gesture::{Gesture, GestureOutcome, GestureResolver, PanSurface};
pub use navigation::{Direction, NavigationController, NavigationMode};
pub use scheduler::{Change, Scheduler, SchedulerSnapshot};
pub use store::EventStore;
