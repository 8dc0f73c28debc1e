//! Gesture resolution.
//!
//! A gesture's end state is turned into a `GestureOutcome` by a pure resolver;
//! applying the outcome is the scheduler's job. Resolution never fails: data
//! that cannot be interpreted resolves to `NoOp`, the same as releasing a drag
//! outside any drop zone.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::DEFAULT_SWIPE_THRESHOLD;
use crate::date_window::Direction;
use crate::navigation::NavigationMode;

/// Which view a horizontal pan happened on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanSurface {
    /// The single-day event list; pans step days
    DayView,
    /// The week strip; pans step weeks
    WeekHeader,
}

/// The end of a drag or pan, as reported by the view.
#[derive(Debug, Clone, PartialEq)]
pub enum Gesture {
    /// Desktop drag released over `drop_target` (a `yyyy-MM-dd` drop zone id),
    /// or over nothing.
    DragEnd {
        event_id: String,
        drop_target: Option<String>,
    },
    /// Horizontal pan released at `offset_x` pixels from where it began.
    Pan { offset_x: f64, surface: PanSurface },
}

impl Gesture {
    pub fn drag_end(event_id: impl Into<String>, drop_target: Option<&str>) -> Self {
        Gesture::DragEnd {
            event_id: event_id.into(),
            drop_target: drop_target.map(String::from),
        }
    }

    pub fn swipe(offset_x: f64) -> Self {
        Gesture::Pan {
            offset_x,
            surface: PanSurface::DayView,
        }
    }

    pub fn swipe_week(offset_x: f64) -> Self {
        Gesture::Pan {
            offset_x,
            surface: PanSurface::WeekHeader,
        }
    }

    /// Drags only exist on the desktop board.
    fn accepted_in(&self, mode: NavigationMode) -> bool {
        match self {
            Gesture::DragEnd { .. } => mode == NavigationMode::Desktop,
            Gesture::Pan { .. } => true,
        }
    }
}

/// What a gesture asks the scheduler to do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GestureOutcome {
    Reassign { event_id: String, date: NaiveDate },
    NavigateDay { direction: Direction },
    NavigateWeek { direction: Direction },
    NoOp,
}

impl fmt::Display for GestureOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GestureOutcome::Reassign { event_id, date } => {
                write!(f, "reassign {} -> {}", event_id, date.format("%Y-%m-%d"))
            }
            GestureOutcome::NavigateDay { direction } => write!(f, "navigate day {}", direction),
            GestureOutcome::NavigateWeek { direction } => write!(f, "navigate week {}", direction),
            GestureOutcome::NoOp => write!(f, "no-op"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureResolver {
    threshold: f64,
}

impl Default for GestureResolver {
    fn default() -> Self {
        GestureResolver {
            threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

impl GestureResolver {
    /// `threshold` is the pan distance in pixels a swipe must exceed.
    pub fn new(threshold: f64) -> Self {
        GestureResolver { threshold }
    }

    pub fn resolve(&self, gesture: &Gesture) -> GestureOutcome {
        match gesture {
            Gesture::DragEnd {
                event_id,
                drop_target,
            } => resolve_drop(event_id, drop_target.as_deref()),
            Gesture::Pan { offset_x, surface } => match self.swipe_direction(*offset_x) {
                Some(direction) => match surface {
                    PanSurface::DayView => GestureOutcome::NavigateDay { direction },
                    PanSurface::WeekHeader => GestureOutcome::NavigateWeek { direction },
                },
                None => GestureOutcome::NoOp,
            },
        }
    }

    /// Resolve with the view's layout taken into account.
    pub fn resolve_in(&self, mode: NavigationMode, gesture: &Gesture) -> GestureOutcome {
        if !gesture.accepted_in(mode) {
            debug!(%mode, ?gesture, "gesture ignored in this mode");
            return GestureOutcome::NoOp;
        }
        self.resolve(gesture)
    }

    /// Swiping right (positive offset) reveals the previous day.
    fn swipe_direction(&self, offset_x: f64) -> Option<Direction> {
        if !offset_x.is_finite() || offset_x.abs() <= self.threshold {
            return None;
        }
        if offset_x > 0.0 {
            Some(Direction::Prev)
        } else {
            Some(Direction::Next)
        }
    }
}

fn resolve_drop(event_id: &str, drop_target: Option<&str>) -> GestureOutcome {
    let Some(target) = drop_target else {
        return GestureOutcome::NoOp;
    };

    match NaiveDate::parse_from_str(target, "%Y-%m-%d") {
        Ok(date) => GestureOutcome::Reassign {
            event_id: event_id.to_string(),
            date,
        },
        Err(_) => {
            debug!(drop_target = target, "drop target is not a day");
            GestureOutcome::NoOp
        }
    }
}

/// Gesture lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    /// A gesture is in flight; `origin` is the event being dragged, if any
    Active { origin: Option<String> },
}

/// Tracks the Idle/Active lifecycle around the resolver.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    state: GestureState,
}

impl GestureTracker {
    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, GestureState::Active { .. })
    }

    /// The event currently being dragged.
    pub fn origin(&self) -> Option<&str> {
        match &self.state {
            GestureState::Active { origin } => origin.as_deref(),
            GestureState::Idle => None,
        }
    }

    /// Enter `Active`. A new start replaces any gesture still in flight.
    pub fn start(&mut self, origin: Option<String>) {
        self.state = GestureState::Active { origin };
    }

    /// Resolve `gesture` and return to `Idle`, whatever the outcome.
    pub fn finish(
        &mut self,
        resolver: &GestureResolver,
        mode: NavigationMode,
        gesture: &Gesture,
    ) -> GestureOutcome {
        self.state = GestureState::Idle;
        resolver.resolve_in(mode, gesture)
    }

    /// Abandon the gesture in flight.
    pub fn cancel(&mut self) {
        self.state = GestureState::Idle;
    }
}
