//! Terminal rendering for weekcal types.
//!
//! Extension traits and helpers that turn scheduler state into colored text
//! using owo_colors.

use chrono::NaiveDate;
use owo_colors::OwoColorize;
use weekcal_core::{Change, Event, EventColor, GestureOutcome, SchedulerSnapshot};

/// Generated ids are shortened to this many characters for display; any
/// unique prefix is accepted back as input.
const SHORT_ID_LEN: usize = 14;

/// Ids up to this length (e.g. sample ids) are shown whole.
const FULL_ID_MAX: usize = 20;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let title = paint(self.color.unwrap_or(EventColor::Blue), &self.title);
        let mut line = format!("{} {}", self.time_label().dimmed(), title);

        if let Some(duration) = self.duration {
            let minutes = duration.as_secs() / 60;
            line.push_str(&format!(" {}", format!("({}m)", minutes).dimmed()));
        }

        format!("{} {}", line, format!("[{}]", short_id(&self.id)).dimmed())
    }
}

impl Render for GestureOutcome {
    fn render(&self) -> String {
        match self {
            GestureOutcome::NoOp => "no change".dimmed().to_string(),
            other => other.to_string().green().to_string(),
        }
    }
}

impl Render for Change {
    fn render(&self) -> String {
        let text = match self {
            Change::EventAdded { event_id, date } => {
                format!("added {} on {}", short_id(event_id), date)
            }
            Change::EventReassigned { event_id, date } => {
                format!("moved {} to {}", short_id(event_id), date)
            }
            Change::EventRetimed { event_id, time } => {
                format!("retimed {} to {}", short_id(event_id), time.format("%H:%M"))
            }
            Change::EventDeleted { event_id } => format!("deleted {}", short_id(event_id)),
            Change::NavigationChanged { selected_day, .. } => {
                format!("selected {}", selected_day.format("%a %-d %b"))
            }
            Change::DragStateChanged { dragged: Some(id) } => {
                format!("dragging {}", short_id(id))
            }
            Change::DragStateChanged { dragged: None } => "drag ended".to_string(),
            Change::SelectionChanged { event_id: Some(id) } => format!("opened {}", short_id(id)),
            Change::SelectionChanged { event_id: None } => "closed event".to_string(),
        };
        format!("· {}", text).dimmed().to_string()
    }
}

fn paint(color: EventColor, text: &str) -> String {
    let (r, g, b) = match color {
        EventColor::Blue => (59, 130, 246),
        EventColor::Purple => (168, 85, 247),
        EventColor::Green => (34, 197, 94),
        EventColor::Orange => (249, 115, 22),
        EventColor::Red => (239, 68, 68),
        EventColor::Pink => (236, 72, 153),
        EventColor::Indigo => (99, 102, 241),
        EventColor::Teal => (20, 184, 166),
        EventColor::Yellow => (234, 179, 8),
        EventColor::Cyan => (6, 182, 212),
    };
    text.truecolor(r, g, b).to_string()
}

pub fn short_id(id: &str) -> &str {
    if id.len() <= FULL_ID_MAX {
        return id;
    }
    id.get(..SHORT_ID_LEN).unwrap_or(id)
}

/// Label for a day column, e.g. "Wed 13".
fn day_label(day: NaiveDate) -> String {
    day.format("%a %-d").to_string()
}

fn day_heading(day: NaiveDate, selected: NaiveDate, today: NaiveDate) -> String {
    let label = day_label(day);
    let marker = if day == selected { ">" } else { " " };

    let label = if day == selected {
        label.bold().blue().to_string()
    } else if day == today {
        label.blue().to_string()
    } else {
        label
    };

    let suffix = if day == today {
        format!(" {}", "today".dimmed())
    } else {
        String::new()
    };

    format!("{} {}{}", marker, label, suffix)
}

/// The week board: every day of the window with its events.
pub fn render_week(
    snapshot: &SchedulerSnapshot,
    groups: &[(NaiveDate, Vec<Event>)],
    today: NaiveDate,
) -> String {
    let mut lines = vec![snapshot.month_label.bold().to_string()];

    for (day, events) in groups {
        lines.push(day_heading(*day, snapshot.selected_day, today));
        if events.is_empty() {
            lines.push(format!("    {}", "-".dimmed()));
        }
        for event in events {
            lines.push(format!("    {}", event.render()));
        }
    }

    if let Some(dragged) = &snapshot.dragged_event {
        lines.push(String::new());
        lines.push(format!("{} {}", "Dragging:".yellow(), dragged.title));
    }

    lines.join("\n")
}

/// The single-day view with the week strip above it.
pub fn render_day(snapshot: &SchedulerSnapshot, today: NaiveDate) -> String {
    let strip: Vec<String> = snapshot
        .week_days
        .iter()
        .map(|day| {
            let label = day_label(*day);
            if *day == snapshot.selected_day {
                format!("[{}]", label).bold().blue().to_string()
            } else if *day == today {
                label.blue().to_string()
            } else {
                label.dimmed().to_string()
            }
        })
        .collect();

    let mut lines = vec![
        snapshot.month_label.bold().to_string(),
        strip.join(" "),
        String::new(),
        snapshot
            .selected_day
            .format("%A, %B %-d")
            .to_string()
            .bold()
            .to_string(),
    ];

    if snapshot.events.is_empty() {
        lines.push(format!("  {}", "No events".dimmed()));
    }
    for event in &snapshot.events {
        lines.push(format!("  {}", event.render()));
    }

    lines.join("\n")
}

/// Full details of one event, as shown when it is opened.
pub fn render_event_detail(event: &Event) -> String {
    let mut lines = vec![
        paint(event.color.unwrap_or(EventColor::Blue), &event.title)
            .bold()
            .to_string(),
        format!(
            "  {} {}",
            event.date.format("%A, %B %-d %Y"),
            event.time_label()
        ),
    ];

    if !event.description.is_empty() {
        lines.push(format!("  {}", event.description));
    }
    if let Some(duration) = event.duration {
        lines.push(format!("  {} {}m", "Duration:".dimmed(), duration.as_secs() / 60));
    }
    if let Some(url) = &event.image_url {
        lines.push(format!("  {} {}", "Image:".dimmed(), url));
    }
    lines.push(format!("  {} {}", "Id:".dimmed(), event.id));

    lines.join("\n")
}
