// Event listing as shown on the browse, detail and dashboard screens.
//
// Invariants
// - attendee_count never exceeds capacity.
// - end_time is strictly after start_time.
// Both are enforced where events are created (draft validation) and where seats
// change (the repository seat operations). Nothing else mutates an event.

use crate::shared::core::primitives::EventId;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Technology,
    Business,
    Design,
    Marketing,
    Health,
    Education,
    Entertainment,
    Other,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Technology => "Technology",
            Category::Business => "Business",
            Category::Design => "Design",
            Category::Marketing => "Marketing",
            Category::Health => "Health & Wellness",
            Category::Education => "Education",
            Category::Entertainment => "Entertainment",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocationKind {
    #[default]
    InPerson,
    Online,
    Hybrid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub kind: LocationKind,
    pub venue: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Location {
    pub fn in_person(venue: impl Into<String>, address: Option<String>) -> Self {
        Self {
            kind: LocationKind::InPerson,
            venue: venue.into(),
            address,
        }
    }

    pub fn online() -> Self {
        Self {
            kind: LocationKind::Online,
            venue: "Online".to_string(),
            address: None,
        }
    }

    /// `needle` must already be lowercase.
    pub fn mentions(&self, needle: &str) -> bool {
        self.venue.to_lowercase().contains(needle)
            || self
                .address
                .as_deref()
                .is_some_and(|address| address.to_lowercase().contains(needle))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaItem {
    pub time: NaiveTime,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub location: Location,
    pub category: Category,
    pub organizer: String,
    pub capacity: u32,
    pub attendee_count: u32,
    pub image_ref: String,
    pub description: String,
    #[serde(default)]
    pub agenda: Vec<AgendaItem>,
}

impl Event {
    pub fn spots_left(&self) -> u32 {
        self.capacity.saturating_sub(self.attendee_count)
    }

    pub fn is_full(&self) -> bool {
        self.attendee_count >= self.capacity
    }

    pub fn has_ended(&self, today: NaiveDate) -> bool {
        self.date < today
    }
}

#[cfg(test)]
mod event_tests {
    use super::*;
    use crate::tests::fixtures::events::make_event;
    use rstest::rstest;

    #[rstest]
    fn it_should_count_the_spots_left() {
        let mut event = make_event(1);
        event.capacity = 50;
        event.attendee_count = 42;
        assert_eq!(event.spots_left(), 8);
        assert!(!event.is_full());

        event.attendee_count = 50;
        assert_eq!(event.spots_left(), 0);
        assert!(event.is_full());
    }

    #[rstest]
    fn it_should_treat_a_zero_capacity_event_as_full() {
        let mut event = make_event(1);
        event.capacity = 0;
        event.attendee_count = 0;
        assert!(event.is_full());
    }

    #[rstest]
    #[case(Category::Technology, "Technology")]
    #[case(Category::Health, "Health & Wellness")]
    #[case(Category::Other, "Other")]
    fn it_should_label_categories_for_display(#[case] category: Category, #[case] label: &str) {
        assert_eq!(category.to_string(), label);
    }

    #[rstest]
    fn it_should_match_venue_and_address_case_insensitively() {
        let location = Location::in_person(
            "Tech Conference Center",
            Some("123 Innovation St, San Francisco, CA 94103".to_string()),
        );
        assert!(location.mentions("conference"));
        assert!(location.mentions("san francisco"));
        assert!(!location.mentions("austin"));
        assert!(Location::online().mentions("online"));
    }

    #[rstest]
    fn it_should_end_only_after_its_date() {
        let event = make_event(1);
        assert!(!event.has_ended(event.date));
        assert!(event.has_ended(event.date.succ_opt().unwrap()));
    }

    #[rstest]
    fn it_should_use_lowercase_wire_names() {
        assert_eq!(
            serde_json::to_value(Category::Entertainment).unwrap(),
            serde_json::json!("entertainment")
        );
        assert_eq!(
            serde_json::to_value(LocationKind::InPerson).unwrap(),
            serde_json::json!("in-person")
        );
    }
}
