//! Interactive session: one scheduler, driven by line commands.

use std::io::{self, BufRead, IsTerminal};

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use dialoguer::Input;
use owo_colors::OwoColorize;
use weekcal_core::config::SchedulerConfig;
use weekcal_core::event::{parse_duration, parse_time};
use weekcal_core::navigation::NavigationMode;
use weekcal_core::{Direction, EventColor, Gesture, NewEvent, Scheduler};

use crate::render::{Render, render_day, render_event_detail, render_week};
use crate::utils::dates::parse_day;

const HELP: &str = "\
Commands:
  add <date> <time> <title...> [#color] [+duration] [-- description]
  rm <id>                 delete an event
  move <id> <date>        reassign an event to another day
  retime <id> <time>      change an event's start time
  drag <id>               pick up an event (desktop)
  drop <date|none>        drop the dragged event
  cancel                  abandon the current drag
  swipe <px>              pan the day view (positive = previous day)
  swipe-week <px>         pan the week strip
  next | prev             step one week
  next-day | prev-day     step one day
  select <date>           select a day
  open <id> | close       show or dismiss event details
  today                   jump back to today
  show                    redraw the calendar
  help | quit";

#[derive(Debug, Clone, PartialEq)]
enum SessionCommand {
    Add {
        date: String,
        time: String,
        title: String,
        color: Option<EventColor>,
        duration: Option<String>,
        description: Option<String>,
    },
    Remove(String),
    Move { id: String, date: String },
    Retime { id: String, time: String },
    Drag(String),
    Drop(Option<String>),
    Cancel,
    Swipe(f64),
    SwipeWeek(f64),
    Next,
    Prev,
    NextDay,
    PrevDay,
    Select(String),
    Open(String),
    Close,
    Today,
    Show,
    Help,
    Quit,
}

pub fn run(
    mut config: SchedulerConfig,
    today: NaiveDate,
    mobile: bool,
    date: Option<String>,
    demo: bool,
) -> Result<()> {
    if mobile {
        config.mode = NavigationMode::Mobile;
    }

    let mut scheduler = super::open_scheduler(config, today, date.as_deref(), demo)?;
    scheduler.subscribe(|change| println!("{}", change.render()));

    println!("{}", view(&scheduler, today));
    println!("{}", "Type \"help\" for commands.".dimmed());

    // Piped input is read line by line; a terminal gets a prompt.
    let mut piped = if io::stdin().is_terminal() {
        None
    } else {
        Some(io::stdin().lock().lines())
    };

    loop {
        let line = match piped.as_mut() {
            None => Input::<String>::new()
                .with_prompt("weekcal")
                .allow_empty(true)
                .interact_text()?,
            Some(lines) => match lines.next() {
                Some(line) => line.context("Failed to read command")?,
                None => break,
            },
        };

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("{}", e.to_string().red());
                continue;
            }
        };

        if command == SessionCommand::Quit {
            break;
        }

        if let Err(e) = execute(&mut scheduler, command, today) {
            eprintln!("{}", format!("{:#}", e).red());
        }
    }

    Ok(())
}

fn view(scheduler: &Scheduler, today: NaiveDate) -> String {
    let snapshot = scheduler.snapshot();
    match snapshot.mode {
        NavigationMode::Desktop => render_week(&snapshot, &scheduler.week_events(), today),
        NavigationMode::Mobile => render_day(&snapshot, today),
    }
}

fn execute(scheduler: &mut Scheduler, command: SessionCommand, today: NaiveDate) -> Result<()> {
    match command {
        SessionCommand::Add {
            date,
            time,
            title,
            color,
            duration,
            description,
        } => {
            let mut new_event = NewEvent::new(title, parse_day(&date, today)?, parse_time(&time)?);
            if let Some(color) = color {
                new_event = new_event.color(color);
            }
            if let Some(duration) = duration {
                new_event = new_event.duration(parse_duration(&duration)?);
            }
            if let Some(description) = description {
                new_event = new_event.description(description);
            }
            scheduler.add_event(new_event)?;
        }
        SessionCommand::Remove(id) => {
            let id = resolve_id(scheduler, &id)?;
            scheduler.delete_event(&id)?;
        }
        SessionCommand::Move { id, date } => {
            let id = resolve_id(scheduler, &id)?;
            scheduler.reassign_event(&id, parse_day(&date, today)?)?;
        }
        SessionCommand::Retime { id, time } => {
            let id = resolve_id(scheduler, &id)?;
            scheduler.retime_event(&id, parse_time(&time)?)?;
        }
        SessionCommand::Drag(id) => {
            let id = resolve_id(scheduler, &id)?;
            scheduler.on_gesture_start(Some(&id));
            if scheduler.dragged_event().is_none() {
                println!("{}", "Dragging is only available on the desktop board".yellow());
            }
            return Ok(());
        }
        SessionCommand::Drop(target) => {
            let Some(id) = scheduler.dragged_event().map(|e| e.id.clone()) else {
                bail!("Nothing is being dragged");
            };
            // The gesture carries the raw drop target; friendly dates are
            // normalized first and anything else is left for the resolver.
            let target = target.map(|t| match parse_day(&t, today) {
                Ok(day) => day.format("%Y-%m-%d").to_string(),
                Err(_) => t,
            });
            let outcome = scheduler.on_gesture_end(Gesture::drag_end(id, target.as_deref()));
            println!("{}", outcome.render());
        }
        SessionCommand::Cancel => {
            scheduler.cancel_gesture();
            return Ok(());
        }
        SessionCommand::Swipe(offset) => {
            scheduler.on_gesture_start(None);
            let outcome = scheduler.on_gesture_end(Gesture::swipe(offset));
            println!("{}", outcome.render());
        }
        SessionCommand::SwipeWeek(offset) => {
            scheduler.on_gesture_start(None);
            let outcome = scheduler.on_gesture_end(Gesture::swipe_week(offset));
            println!("{}", outcome.render());
        }
        SessionCommand::Next => scheduler.step_week(Direction::Next),
        SessionCommand::Prev => scheduler.step_week(Direction::Prev),
        SessionCommand::NextDay => scheduler.step_day(Direction::Next),
        SessionCommand::PrevDay => scheduler.step_day(Direction::Prev),
        SessionCommand::Select(date) => {
            let day = parse_day(&date, today)?;
            // The week board only has its own seven days to click on.
            if scheduler.navigation().mode() == NavigationMode::Desktop
                && !scheduler.week_window().contains(day)
            {
                scheduler.go_to(day);
            } else {
                scheduler.select_day(day);
            }
        }
        SessionCommand::Open(id) => {
            let id = resolve_id(scheduler, &id)?;
            let event = scheduler.open_event(&id)?;
            println!("{}", render_event_detail(&event));
            return Ok(());
        }
        SessionCommand::Close => {
            scheduler.close_event();
            return Ok(());
        }
        SessionCommand::Today => scheduler.go_to_today(today),
        SessionCommand::Show => {}
        SessionCommand::Help => {
            println!("{}", HELP);
            return Ok(());
        }
        SessionCommand::Quit => return Ok(()),
    }

    println!("{}", view(scheduler, today));
    Ok(())
}

/// Accept a full event id or any unambiguous prefix of one.
fn resolve_id(scheduler: &Scheduler, input: &str) -> Result<String> {
    if scheduler.find_event(input).is_some() {
        return Ok(input.to_string());
    }

    let matches: Vec<&str> = scheduler
        .store()
        .iter()
        .filter(|e| e.id.starts_with(input))
        .map(|e| e.id.as_str())
        .collect();

    match matches.as_slice() {
        [id] => Ok(id.to_string()),
        [] => bail!("No event matches \"{}\"", input),
        _ => bail!("\"{}\" matches {} events", input, matches.len()),
    }
}

fn parse_command(line: &str) -> Result<Option<SessionCommand>> {
    let (head, description) = match line.split_once(" -- ") {
        Some((head, rest)) => (head, Some(rest.trim().to_string())),
        None => (line, None),
    };

    let mut words = head.split_whitespace();
    let Some(name) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let command = match (name.to_lowercase().as_str(), args.as_slice()) {
        ("add", [date, rest @ ..]) => parse_add(date, rest, description)?,
        ("rm" | "delete", [id]) => SessionCommand::Remove(id.to_string()),
        ("move", [id, date @ ..]) if !date.is_empty() => SessionCommand::Move {
            id: id.to_string(),
            date: date.join(" "),
        },
        ("retime", [id, time @ ..]) if !time.is_empty() => SessionCommand::Retime {
            id: id.to_string(),
            time: time.join(" "),
        },
        ("drag", [id]) => SessionCommand::Drag(id.to_string()),
        ("drop", ["none"]) | ("drop", []) => SessionCommand::Drop(None),
        ("drop", target) => SessionCommand::Drop(Some(target.join(" "))),
        ("cancel", []) => SessionCommand::Cancel,
        ("swipe", [px]) => SessionCommand::Swipe(parse_offset(px)?),
        ("swipe-week", [px]) => SessionCommand::SwipeWeek(parse_offset(px)?),
        ("next", []) => SessionCommand::Next,
        ("prev", []) => SessionCommand::Prev,
        ("next-day", []) => SessionCommand::NextDay,
        ("prev-day", []) => SessionCommand::PrevDay,
        ("select", date) if !date.is_empty() => SessionCommand::Select(date.join(" ")),
        ("open", [id]) => SessionCommand::Open(id.to_string()),
        ("close", []) => SessionCommand::Close,
        ("today", []) => SessionCommand::Today,
        ("show", []) => SessionCommand::Show,
        ("help" | "?", []) => SessionCommand::Help,
        ("quit" | "exit" | "q", []) => SessionCommand::Quit,
        (other, _) => bail!("Unknown or malformed command: {} (try \"help\")", other),
    };

    Ok(Some(command))
}

/// `add <date> <time> [AM|PM] <title...> [#color] [+duration]`
fn parse_add(date: &str, rest: &[&str], description: Option<String>) -> Result<SessionCommand> {
    let Some((time, mut rest)) = rest.split_first() else {
        bail!("Usage: add <date> <time> <title...>");
    };

    let mut time = time.to_string();
    if let Some((meridiem, tail)) = rest.split_first() {
        if meridiem.eq_ignore_ascii_case("am") || meridiem.eq_ignore_ascii_case("pm") {
            time = format!("{} {}", time, meridiem.to_uppercase());
            rest = tail;
        }
    }

    let mut color = None;
    let mut duration = None;
    let mut title_words = Vec::new();

    for word in rest {
        if let Some(name) = word.strip_prefix('#') {
            color = Some(name.parse::<EventColor>()?);
        } else if let Some(span) = word.strip_prefix('+') {
            duration = Some(span.to_string());
        } else {
            title_words.push(*word);
        }
    }

    Ok(SessionCommand::Add {
        date: date.to_string(),
        time,
        title: title_words.join(" "),
        color,
        duration,
        description,
    })
}

fn parse_offset(input: &str) -> Result<f64> {
    input
        .trim_end_matches("px")
        .parse::<f64>()
        .with_context(|| format!("Invalid offset: {}", input))
}
