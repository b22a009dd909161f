use crate::modules::events::core::event::{Category, Event, Location};
use crate::shared::core::primitives::EventId;
use chrono::{NaiveDate, NaiveTime};

/// Canonical upcoming event with free seats, dated after the fixed test clock.
pub fn make_event(id: u64) -> Event {
    Event {
        id: EventId::new(id),
        title: format!("Fixture Event {id}"),
        date: NaiveDate::from_ymd_opt(2024, 6, 20).unwrap(),
        start_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
        location: Location::in_person("Test Venue", None),
        category: Category::Technology,
        organizer: "Fixture Organizer".to_string(),
        capacity: 10,
        attendee_count: 0,
        image_ref: "/placeholder.svg".to_string(),
        description: String::new(),
        agenda: Vec::new(),
    }
}

/// Same as [`make_event`] but dated before the fixed test clock.
pub fn make_past_event(id: u64) -> Event {
    Event {
        date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
        ..make_event(id)
    }
}
