//! The scheduler: one session's worth of calendar state.
//!
//! `Scheduler` owns the event store, the navigation cursors and the gesture
//! tracker. A view reads it through `snapshot()` and drives it through the
//! command methods; observers registered with `subscribe` hear about every
//! committed change.

use chrono::{NaiveDate, NaiveTime};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::SchedulerConfig;
use crate::date_window::{Direction, WeekWindow};
use crate::demo::sample_week;
use crate::error::{WeekcalError, WeekcalResult};
use crate::event::{Event, NewEvent};
use crate::gesture::{Gesture, GestureOutcome, GestureResolver, GestureState, GestureTracker};
use crate::media::{self, MediaProvider};
use crate::navigation::{NavigationController, NavigationMode};
use crate::store::EventStore;

/// A committed state change, as seen by observers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Change {
    EventAdded { event_id: String, date: NaiveDate },
    EventReassigned { event_id: String, date: NaiveDate },
    EventRetimed { event_id: String, time: NaiveTime },
    EventDeleted { event_id: String },
    NavigationChanged { week_anchor: NaiveDate, selected_day: NaiveDate },
    DragStateChanged { dragged: Option<String> },
    SelectionChanged { event_id: Option<String> },
}

type Observer = Box<dyn FnMut(&Change)>;

/// Read-only view of the scheduler for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchedulerSnapshot {
    pub mode: NavigationMode,
    pub month_label: String,
    pub week_days: Vec<NaiveDate>,
    pub week_anchor: NaiveDate,
    pub selected_day: NaiveDate,
    /// Events on the selected day, earliest first
    pub events: Vec<Event>,
    pub dragged_event: Option<Event>,
    pub selected_event: Option<Event>,
    pub store_version: u64,
}

impl SchedulerSnapshot {
    pub fn to_json_pretty(&self) -> WeekcalResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| WeekcalError::Serialization(e.to_string()))
    }
}

pub struct Scheduler {
    config: SchedulerConfig,
    store: EventStore,
    navigation: NavigationController,
    resolver: GestureResolver,
    gestures: GestureTracker,
    media: Box<dyn MediaProvider>,
    /// Event opened in the detail view
    selected_event: Option<String>,
    observers: Vec<Observer>,
}

impl Scheduler {
    /// A scheduler whose cursors start on `today`. Images come from the
    /// configured `default_image_url`, if any.
    pub fn new(config: SchedulerConfig, today: NaiveDate) -> WeekcalResult<Self> {
        let media = media::provider_for(config.default_image_url.as_deref());
        Self::with_media(config, today, media)
    }

    pub fn with_media(
        config: SchedulerConfig,
        today: NaiveDate,
        media: Box<dyn MediaProvider>,
    ) -> WeekcalResult<Self> {
        config.validate()?;

        let navigation = NavigationController::new(today, config.week_starts_on, config.mode);
        let mut scheduler = Scheduler {
            resolver: GestureResolver::new(config.swipe_threshold),
            navigation,
            store: EventStore::new(),
            gestures: GestureTracker::default(),
            media,
            selected_event: None,
            observers: Vec::new(),
            config,
        };

        if scheduler.config.seed_demo_events {
            scheduler.seed_demo_week(&mut rand::rng());
        }

        Ok(scheduler)
    }

    /// Register a callback run after every committed change.
    pub fn subscribe(&mut self, observer: impl FnMut(&Change) + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn notify(&mut self, change: Change) {
        for observer in self.observers.iter_mut() {
            observer(&change);
        }
    }

    // READ SIDE:

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn navigation(&self) -> &NavigationController {
        &self.navigation
    }

    pub fn gesture_state(&self) -> &GestureState {
        self.gestures.state()
    }

    pub fn week_window(&self) -> WeekWindow {
        self.navigation.week_window()
    }

    pub fn find_event(&self, id: &str) -> Option<&Event> {
        self.store.find_by_id(id)
    }

    pub fn events_for_day(&self, date: NaiveDate) -> Vec<Event> {
        self.store.events_for_day(date)
    }

    /// Events of the visible week, grouped per day.
    pub fn week_events(&self) -> Vec<(NaiveDate, Vec<Event>)> {
        self.store.events_for_window(&self.week_window())
    }

    pub fn dragged_event(&self) -> Option<&Event> {
        self.gestures.origin().and_then(|id| self.store.find_by_id(id))
    }

    pub fn selected_event(&self) -> Option<&Event> {
        self.selected_event
            .as_deref()
            .and_then(|id| self.store.find_by_id(id))
    }

    pub fn snapshot(&self) -> SchedulerSnapshot {
        let window = self.week_window();
        let selected_day = self.navigation.selected_day();

        SchedulerSnapshot {
            mode: self.navigation.mode(),
            month_label: window.month_label(),
            week_days: window.iter().collect(),
            week_anchor: self.navigation.week_anchor(),
            selected_day,
            events: self.store.events_for_day(selected_day),
            dragged_event: self.dragged_event().cloned(),
            selected_event: self.selected_event().cloned(),
            store_version: self.store.version(),
        }
    }

    // EVENT COMMANDS:

    /// Create an event. Without an image of its own, the media provider is
    /// asked for one.
    pub fn add_event(&mut self, mut new_event: NewEvent) -> WeekcalResult<Event> {
        new_event.validated_title()?;

        if new_event.image_url.is_none() {
            new_event.image_url = self.media.image_for(&new_event);
        }

        let event = self.store.add(new_event)?;
        self.notify(Change::EventAdded {
            event_id: event.id.clone(),
            date: event.date,
        });
        Ok(event)
    }

    pub fn delete_event(&mut self, id: &str) -> WeekcalResult<Event> {
        let removed = self.store.delete(id)?;

        if self.gestures.origin() == Some(id) {
            self.gestures.cancel();
            self.notify(Change::DragStateChanged { dragged: None });
        }
        if self.selected_event.as_deref() == Some(id) {
            self.selected_event = None;
            self.notify(Change::SelectionChanged { event_id: None });
        }

        self.notify(Change::EventDeleted {
            event_id: removed.id.clone(),
        });
        Ok(removed)
    }

    pub fn reassign_event(&mut self, id: &str, date: NaiveDate) -> WeekcalResult<Event> {
        let event = self.store.reassign_date(id, date)?;
        self.notify(Change::EventReassigned {
            event_id: event.id.clone(),
            date,
        });
        Ok(event)
    }

    pub fn retime_event(&mut self, id: &str, time: NaiveTime) -> WeekcalResult<Event> {
        let event = self.store.retime(id, time)?;
        self.notify(Change::EventRetimed {
            event_id: event.id.clone(),
            time,
        });
        Ok(event)
    }

    /// Open an event in the detail view.
    pub fn open_event(&mut self, id: &str) -> WeekcalResult<Event> {
        let event = self
            .store
            .find_by_id(id)
            .cloned()
            .ok_or_else(|| WeekcalError::EventNotFound(id.to_string()))?;

        self.selected_event = Some(event.id.clone());
        self.notify(Change::SelectionChanged {
            event_id: Some(event.id.clone()),
        });
        Ok(event)
    }

    pub fn close_event(&mut self) {
        if self.selected_event.take().is_some() {
            self.notify(Change::SelectionChanged { event_id: None });
        }
    }

    // NAVIGATION COMMANDS:

    pub fn step_week(&mut self, direction: Direction) {
        self.navigation.step_week(direction);
        self.notify_navigation();
    }

    pub fn step_day(&mut self, direction: Direction) {
        self.navigation.step_day(direction);
        self.notify_navigation();
    }

    pub fn select_day(&mut self, day: NaiveDate) {
        self.navigation.select_day(day);
        self.notify_navigation();
    }

    pub fn go_to_today(&mut self, today: NaiveDate) {
        self.go_to(today);
    }

    /// Show the week containing `day` with `day` selected.
    pub fn go_to(&mut self, day: NaiveDate) {
        self.navigation.go_to(day);
        self.notify_navigation();
    }

    fn notify_navigation(&mut self) {
        self.notify(Change::NavigationChanged {
            week_anchor: self.navigation.week_anchor(),
            selected_day: self.navigation.selected_day(),
        });
    }

    // GESTURES:

    /// A drag or pan began. `event_id` is the card under the pointer, if
    /// any; it only becomes the dragged event on the desktop board.
    pub fn on_gesture_start(&mut self, event_id: Option<&str>) {
        let origin = match self.navigation.mode() {
            NavigationMode::Desktop => event_id
                .and_then(|id| self.store.find_by_id(id))
                .map(|e| e.id.clone()),
            NavigationMode::Mobile => None,
        };

        let previous = self.gestures.origin().map(String::from);
        let dragging = origin.clone();
        self.gestures.start(origin);

        if dragging != previous {
            self.notify(Change::DragStateChanged { dragged: dragging });
        }
    }

    /// A gesture ended. The resolved outcome is applied and returned; the
    /// gesture goes back to idle whatever happens.
    pub fn on_gesture_end(&mut self, gesture: Gesture) -> GestureOutcome {
        let was_dragging = self.gestures.origin().is_some();
        let outcome = self
            .gestures
            .finish(&self.resolver, self.navigation.mode(), &gesture);

        let applied = self.apply(outcome);
        debug!(outcome = %applied, "gesture resolved");

        if was_dragging {
            self.notify(Change::DragStateChanged { dragged: None });
        }
        applied
    }

    pub fn cancel_gesture(&mut self) {
        let was_dragging = self.gestures.origin().is_some();
        self.gestures.cancel();

        if was_dragging {
            self.notify(Change::DragStateChanged { dragged: None });
        }
    }

    fn apply(&mut self, outcome: GestureOutcome) -> GestureOutcome {
        match &outcome {
            GestureOutcome::Reassign { event_id, date } => {
                if let Err(e) = self.reassign_event(event_id, *date) {
                    warn!(%e, "dropped event no longer exists");
                    return GestureOutcome::NoOp;
                }
            }
            GestureOutcome::NavigateDay { direction } => self.step_day(*direction),
            GestureOutcome::NavigateWeek { direction } => self.step_week(*direction),
            GestureOutcome::NoOp => {}
        }
        outcome
    }

    // SEEDING:

    /// Fill the visible week with sample events. Returns how many were added.
    pub fn seed_demo_week<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let mut added = 0;

        for event in sample_week(self.week_window().first(), rng) {
            let (event_id, date) = (event.id.clone(), event.date);
            match self.store.insert(event) {
                Ok(()) => {
                    added += 1;
                    self.notify(Change::EventAdded { event_id, date });
                }
                Err(e) => warn!(%e, "skipping sample event"),
            }
        }

        debug!(added, "seeded sample week");
        added
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::PanSurface;
    use crate::media::FixedImage;
    use chrono::Weekday;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn time(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    fn desktop(today: &str) -> Scheduler {
        Scheduler::new(SchedulerConfig::default(), date(today)).unwrap()
    }

    fn mobile(today: &str) -> Scheduler {
        let config = SchedulerConfig {
            mode: NavigationMode::Mobile,
            ..SchedulerConfig::default()
        };
        Scheduler::new(config, date(today)).unwrap()
    }

    fn record(scheduler: &mut Scheduler) -> Rc<RefCell<Vec<Change>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        scheduler.subscribe(move |change| sink.borrow_mut().push(change.clone()));
        log
    }

    #[test]
    fn starts_on_today_with_empty_store() {
        let scheduler = desktop("2024-03-13");
        let snapshot = scheduler.snapshot();

        assert_eq!(snapshot.selected_day, date("2024-03-13"));
        assert_eq!(snapshot.week_anchor, date("2024-03-13"));
        assert_eq!(snapshot.week_days.len(), 7);
        assert_eq!(snapshot.week_days[0], date("2024-03-10"));
        assert_eq!(snapshot.month_label, "March 2024");
        assert!(snapshot.events.is_empty());
        assert!(snapshot.dragged_event.is_none());
    }

    #[test]
    fn rejects_invalid_config() {
        let config = SchedulerConfig {
            swipe_threshold: -5.0,
            ..SchedulerConfig::default()
        };
        assert!(matches!(
            Scheduler::new(config, date("2024-03-13")),
            Err(WeekcalError::Config(_))
        ));
    }

    #[test]
    fn add_event_shows_up_on_its_day() {
        let mut scheduler = desktop("2024-03-13");
        let log = record(&mut scheduler);

        let event = scheduler
            .add_event(NewEvent::new("Coffee", date("2024-03-13"), time("09:00")))
            .unwrap();

        assert_eq!(scheduler.store().len(), 1);
        assert_eq!(scheduler.snapshot().events, vec![event.clone()]);
        assert_eq!(
            log.borrow().as_slice(),
            &[Change::EventAdded {
                event_id: event.id,
                date: date("2024-03-13")
            }]
        );
    }

    #[test]
    fn failed_add_is_reported_and_silent() {
        let mut scheduler = desktop("2024-03-13");
        let log = record(&mut scheduler);

        let err = scheduler
            .add_event(NewEvent::new("", date("2024-03-13"), time("09:00")))
            .unwrap_err();

        assert!(matches!(err, WeekcalError::Validation(_)));
        assert!(scheduler.store().is_empty());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn media_provider_fills_missing_image_only() {
        let mut scheduler = Scheduler::with_media(
            SchedulerConfig::default(),
            date("2024-03-13"),
            Box::new(FixedImage("https://img.example/default.jpg".into())),
        )
        .unwrap();

        let plain = scheduler
            .add_event(NewEvent::new("Plain", date("2024-03-13"), time("09:00")))
            .unwrap();
        let own = scheduler
            .add_event(
                NewEvent::new("Own", date("2024-03-13"), time("10:00"))
                    .image_url("https://img.example/own.jpg"),
            )
            .unwrap();

        assert_eq!(plain.image_url.as_deref(), Some("https://img.example/default.jpg"));
        assert_eq!(own.image_url.as_deref(), Some("https://img.example/own.jpg"));
    }

    #[test]
    fn drag_and_drop_reassigns_event() {
        let mut scheduler = desktop("2024-03-13");
        let event = scheduler
            .add_event(NewEvent::new("Review", date("2024-03-11"), time("09:00")))
            .unwrap();
        let log = record(&mut scheduler);

        scheduler.on_gesture_start(Some(&event.id));
        assert_eq!(scheduler.snapshot().dragged_event.map(|e| e.id), Some(event.id.clone()));

        let outcome =
            scheduler.on_gesture_end(Gesture::drag_end(event.id.clone(), Some("2024-03-15")));

        assert_eq!(
            outcome,
            GestureOutcome::Reassign {
                event_id: event.id.clone(),
                date: date("2024-03-15")
            }
        );
        assert_eq!(scheduler.find_event(&event.id).unwrap().date, date("2024-03-15"));
        assert_eq!(scheduler.gesture_state(), &GestureState::Idle);
        assert!(scheduler.snapshot().dragged_event.is_none());
        assert_eq!(
            log.borrow().as_slice(),
            &[
                Change::DragStateChanged {
                    dragged: Some(event.id.clone())
                },
                Change::EventReassigned {
                    event_id: event.id.clone(),
                    date: date("2024-03-15")
                },
                Change::DragStateChanged { dragged: None },
            ]
        );
    }

    #[test]
    fn drop_outside_targets_changes_nothing() {
        let mut scheduler = desktop("2024-03-13");
        let event = scheduler
            .add_event(NewEvent::new("Review", date("2024-03-11"), time("09:00")))
            .unwrap();
        let version = scheduler.store().version();

        scheduler.on_gesture_start(Some(&event.id));
        let outcome = scheduler.on_gesture_end(Gesture::drag_end(event.id.clone(), None));

        assert_eq!(outcome, GestureOutcome::NoOp);
        assert_eq!(scheduler.store().version(), version);
        assert_eq!(scheduler.find_event(&event.id).unwrap().date, date("2024-03-11"));
        assert_eq!(scheduler.gesture_state(), &GestureState::Idle);
    }

    #[test]
    fn drop_of_deleted_event_is_noop() {
        let mut scheduler = desktop("2024-03-13");

        let outcome = scheduler.on_gesture_end(Gesture::drag_end("event-gone", Some("2024-03-15")));

        assert_eq!(outcome, GestureOutcome::NoOp);
        assert!(scheduler.store().is_empty());
    }

    #[test]
    fn drag_start_on_unknown_event_drags_nothing() {
        let mut scheduler = desktop("2024-03-13");
        scheduler.on_gesture_start(Some("event-unknown"));

        assert!(matches!(
            scheduler.gesture_state(),
            GestureState::Active { origin: None }
        ));
        assert!(scheduler.dragged_event().is_none());
    }

    #[test]
    fn mobile_ignores_drag_and_drop() {
        let mut scheduler = mobile("2024-03-13");
        let event = scheduler
            .add_event(NewEvent::new("Review", date("2024-03-13"), time("09:00")))
            .unwrap();

        scheduler.on_gesture_start(Some(&event.id));
        assert!(scheduler.dragged_event().is_none());

        let outcome =
            scheduler.on_gesture_end(Gesture::drag_end(event.id.clone(), Some("2024-03-15")));

        assert_eq!(outcome, GestureOutcome::NoOp);
        assert_eq!(scheduler.find_event(&event.id).unwrap().date, date("2024-03-13"));
    }

    #[test]
    fn swipes_step_days() {
        let mut scheduler = mobile("2024-03-13");

        scheduler.on_gesture_start(None);
        assert_eq!(scheduler.on_gesture_end(Gesture::swipe(40.0)), GestureOutcome::NoOp);
        assert_eq!(scheduler.snapshot().selected_day, date("2024-03-13"));

        scheduler.on_gesture_start(None);
        scheduler.on_gesture_end(Gesture::swipe(150.0));
        assert_eq!(scheduler.snapshot().selected_day, date("2024-03-12"));

        scheduler.on_gesture_start(None);
        scheduler.on_gesture_end(Gesture::swipe(-150.0));
        scheduler.on_gesture_start(None);
        scheduler.on_gesture_end(Gesture::swipe(-150.0));
        assert_eq!(scheduler.snapshot().selected_day, date("2024-03-14"));
    }

    #[test]
    fn swipe_across_week_boundary_moves_week() {
        let mut scheduler = mobile("2024-03-16");

        scheduler.on_gesture_end(Gesture::swipe(-150.0));
        let snapshot = scheduler.snapshot();

        assert_eq!(snapshot.selected_day, date("2024-03-17"));
        assert_eq!(snapshot.week_days[0], date("2024-03-17"));
    }

    #[test]
    fn header_swipe_steps_week_and_keeps_selection_in_window() {
        let mut scheduler = desktop("2024-03-13");

        let outcome = scheduler.on_gesture_end(Gesture::Pan {
            offset_x: -300.0,
            surface: PanSurface::WeekHeader,
        });

        assert_eq!(
            outcome,
            GestureOutcome::NavigateWeek {
                direction: Direction::Next
            }
        );
        let snapshot = scheduler.snapshot();
        assert_eq!(snapshot.week_days[0], date("2024-03-17"));
        assert!(snapshot.week_days.contains(&snapshot.selected_day));
    }

    #[test]
    fn step_week_keeps_selected_day_in_window() {
        let mut scheduler = desktop("2024-03-13");
        scheduler.select_day(date("2024-03-15"));

        scheduler.step_week(Direction::Prev);

        let snapshot = scheduler.snapshot();
        assert!(snapshot.week_days.contains(&snapshot.selected_day));
        assert_eq!(snapshot.selected_day, date("2024-03-03"));
    }

    #[test]
    fn navigation_notifies_observers() {
        let mut scheduler = desktop("2024-03-13");
        let log = record(&mut scheduler);

        scheduler.step_day(Direction::Next);

        assert_eq!(
            log.borrow().as_slice(),
            &[Change::NavigationChanged {
                week_anchor: date("2024-03-13"),
                selected_day: date("2024-03-14")
            }]
        );
    }

    #[test]
    fn go_to_today_resets_cursors() {
        let mut scheduler = desktop("2024-03-13");
        scheduler.step_week(Direction::Next);
        scheduler.step_week(Direction::Next);

        scheduler.go_to_today(date("2024-03-13"));

        let snapshot = scheduler.snapshot();
        assert_eq!(snapshot.selected_day, date("2024-03-13"));
        assert_eq!(snapshot.week_days[0], date("2024-03-10"));
    }

    #[test]
    fn delete_unknown_event_fails_and_changes_nothing() {
        let mut scheduler = desktop("2024-03-13");
        scheduler
            .add_event(NewEvent::new("Keep", date("2024-03-13"), time("09:00")))
            .unwrap();
        let before: Vec<Event> = scheduler.store().iter().cloned().collect();

        let err = scheduler.delete_event("event-missing").unwrap_err();

        assert!(matches!(err, WeekcalError::EventNotFound(_)));
        let after: Vec<Event> = scheduler.store().iter().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn deleting_open_event_closes_it() {
        let mut scheduler = desktop("2024-03-13");
        let event = scheduler
            .add_event(NewEvent::new("Open me", date("2024-03-13"), time("09:00")))
            .unwrap();

        scheduler.open_event(&event.id).unwrap();
        assert_eq!(scheduler.snapshot().selected_event, Some(event.clone()));

        scheduler.delete_event(&event.id).unwrap();

        assert!(scheduler.selected_event().is_none());
        assert!(scheduler.snapshot().selected_event.is_none());
    }

    #[test]
    fn deleting_dragged_event_ends_drag() {
        let mut scheduler = desktop("2024-03-13");
        let event = scheduler
            .add_event(NewEvent::new("Drag me", date("2024-03-13"), time("09:00")))
            .unwrap();

        scheduler.on_gesture_start(Some(&event.id));
        scheduler.delete_event(&event.id).unwrap();

        assert_eq!(scheduler.gesture_state(), &GestureState::Idle);
    }

    #[test]
    fn open_unknown_event_fails() {
        let mut scheduler = desktop("2024-03-13");
        assert!(matches!(
            scheduler.open_event("nope"),
            Err(WeekcalError::EventNotFound(_))
        ));
    }

    #[test]
    fn retime_reorders_day() {
        let mut scheduler = desktop("2024-03-13");
        let late = scheduler
            .add_event(NewEvent::new("Late", date("2024-03-13"), time("14:00")))
            .unwrap();
        scheduler
            .add_event(NewEvent::new("Early", date("2024-03-13"), time("09:00")))
            .unwrap();

        scheduler.retime_event(&late.id, time("08:00")).unwrap();

        let titles: Vec<_> = scheduler
            .snapshot()
            .events
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, vec!["Late", "Early"]);
    }

    #[test]
    fn cancel_gesture_clears_drag() {
        let mut scheduler = desktop("2024-03-13");
        let event = scheduler
            .add_event(NewEvent::new("Drag", date("2024-03-13"), time("09:00")))
            .unwrap();
        let log = record(&mut scheduler);

        scheduler.on_gesture_start(Some(&event.id));
        scheduler.cancel_gesture();

        assert_eq!(scheduler.gesture_state(), &GestureState::Idle);
        assert_eq!(log.borrow().last(), Some(&Change::DragStateChanged { dragged: None }));
    }

    #[test]
    fn restarting_gesture_ends_previous_drag() {
        let mut scheduler = desktop("2024-03-13");
        let event = scheduler
            .add_event(NewEvent::new("Drag", date("2024-03-13"), time("09:00")))
            .unwrap();
        let log = record(&mut scheduler);

        scheduler.on_gesture_start(Some(&event.id));
        scheduler.on_gesture_start(None);
        assert_eq!(log.borrow().last(), Some(&Change::DragStateChanged { dragged: None }));
        assert!(scheduler.dragged_event().is_none());

        let outcome = scheduler.on_gesture_end(Gesture::swipe(40.0));
        assert_eq!(outcome, GestureOutcome::NoOp);
        assert_eq!(log.borrow().last(), Some(&Change::DragStateChanged { dragged: None }));
    }

    #[test]
    fn switching_dragged_event_reports_new_drag() {
        let mut scheduler = desktop("2024-03-13");
        let first = scheduler
            .add_event(NewEvent::new("First", date("2024-03-13"), time("09:00")))
            .unwrap();
        let second = scheduler
            .add_event(NewEvent::new("Second", date("2024-03-13"), time("10:00")))
            .unwrap();
        let log = record(&mut scheduler);

        scheduler.on_gesture_start(Some(&first.id));
        scheduler.on_gesture_start(Some(&second.id));

        assert_eq!(
            log.borrow().last(),
            Some(&Change::DragStateChanged {
                dragged: Some(second.id.clone())
            })
        );
        assert_eq!(scheduler.dragged_event().map(|e| e.id.as_str()), Some(second.id.as_str()));
    }

    #[test]
    fn seed_demo_week_fills_visible_week_once() {
        let mut scheduler = desktop("2024-03-13");

        let added = scheduler.seed_demo_week(&mut StdRng::seed_from_u64(5));
        assert_eq!(added, scheduler.store().len());

        let window = scheduler.week_window();
        assert!(scheduler.store().iter().all(|e| window.contains(e.date)));

        let again = scheduler.seed_demo_week(&mut StdRng::seed_from_u64(5));
        assert_eq!(again, 0);
        assert_eq!(scheduler.store().len(), added);
    }

    #[test]
    fn week_starts_on_configured_day() {
        let config = SchedulerConfig {
            week_starts_on: Weekday::Mon,
            ..SchedulerConfig::default()
        };
        let scheduler = Scheduler::new(config, date("2024-03-13")).unwrap();

        assert_eq!(scheduler.snapshot().week_days[0], date("2024-03-11"));
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let mut scheduler = desktop("2024-03-13");
        scheduler
            .add_event(NewEvent::new("Coffee", date("2024-03-13"), time("09:00")))
            .unwrap();

        let json = scheduler.snapshot().to_json_pretty().unwrap();

        assert!(json.contains("\"selected_day\": \"2024-03-13\""));
        assert!(json.contains("\"mode\": \"desktop\""));
        assert!(json.contains("Coffee"));
    }
}
