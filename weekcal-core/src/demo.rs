//! Sample events for a fresh session.
//!
//! Each day of a week gets zero to two events picked from a small set of
//! templates, at one of a handful of times.

use chrono::{Duration, NaiveDate, NaiveTime};
use rand::Rng;

use crate::constants::DAYS_PER_WEEK;
use crate::event::{Event, parse_time};

struct Template {
    title: &'static str,
    description: &'static str,
    image_url: &'static str,
}

const TEMPLATES: [Template; 5] = [
    Template {
        title: "Coffee Meeting",
        description: "Casual meetup to discuss ideas and catch up.",
        image_url: "https://fastly.picsum.photos/id/312/1920/1080.jpg?hmac=OD_fP9MUQN7uJ8NBR7tlii78qwHPUROGgohG4w16Kjw",
    },
    Template {
        title: "Team Standup",
        description: "Weekly team sync to align on priorities and progress.",
        image_url: "http://fastly.picsum.photos/id/737/1920/1080.jpg?hmac=aFzER8Y4wcWTrXVx2wVKSj10IqnygaF33gESj0WGDwI",
    },
    Template {
        title: "Product Review",
        description: "Comprehensive review of current product features and roadmap.",
        image_url: "https://fastly.picsum.photos/id/249/1920/1080.jpg?hmac=cPMNdgGXRh6T_KhRMuaQjRtAx5cWRraELjtL2MHTfYs",
    },
    Template {
        title: "Client Presentation",
        description: "Presenting quarterly progress and future plans.",
        image_url: "https://fastly.picsum.photos/id/908/1920/1080.jpg?hmac=MeG_oA1s75hHAL_4JzCioh6--zyFTWSCTxOhe8ugvXo",
    },
    Template {
        title: "Yoga Session",
        description: "Relaxing yoga class to reduce stress and improve mindfulness.",
        image_url: "https://fastly.picsum.photos/id/392/1920/1080.jpg?hmac=Fvbf7C1Rcozg8EccwYPqsGkk_o6Bld2GQRDPZKWpd7g",
    },
];

const TIMES: [&str; 6] = ["09:00 AM", "10:30 AM", "12:00 PM", "02:00 PM", "03:30 PM", "05:00 PM"];

const MAX_EVENTS_PER_DAY: usize = 2;

/// Sample events for the 7 days starting at `start`.
///
/// Ids follow `event-<date>-<n>`, so seeding the same week twice produces
/// colliding ids that the store will refuse.
pub fn sample_week<R: Rng + ?Sized>(start: NaiveDate, rng: &mut R) -> Vec<Event> {
    let mut events = Vec::new();

    for offset in 0..DAYS_PER_WEEK {
        let date = start + Duration::days(offset as i64);
        let count = rng.random_range(0..=MAX_EVENTS_PER_DAY);

        for n in 1..=count {
            let template = &TEMPLATES[rng.random_range(0..TEMPLATES.len())];
            let time = sample_time(TIMES[rng.random_range(0..TIMES.len())]);

            events.push(Event {
                id: format!("event-{}-{}", date.format("%Y-%m-%d"), n),
                title: template.title.to_string(),
                description: template.description.to_string(),
                date,
                time,
                duration: None,
                image_url: Some(template.image_url.to_string()),
                color: None,
            });
        }
    }

    events
}

fn sample_time(label: &str) -> NaiveTime {
    // TIMES are all well formed; midnight is only a fallback
    parse_time(label).unwrap_or_default()
}
