// Builder for EventDraft, seeded from json/event_draft.json.

use crate::modules::events::core::draft::EventDraft;
use crate::modules::events::core::event::{Category, Location};
use chrono::{NaiveDate, NaiveTime};
use std::fs;

#[derive(Debug, Clone)]
pub struct EventDraftBuilder {
    inner: EventDraft,
}

impl Default for EventDraftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EventDraftBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string("./src/tests/fixtures/json/event_draft.json").unwrap();
        let inner: EventDraft = serde_json::from_str(&json_str).unwrap();
        Self { inner }
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn category(mut self, v: Option<Category>) -> Self {
        self.inner.category = v;
        self
    }

    pub fn date(mut self, v: Option<NaiveDate>) -> Self {
        self.inner.date = v;
        self
    }

    pub fn start_time(mut self, v: Option<NaiveTime>) -> Self {
        self.inner.start_time = v;
        self
    }

    pub fn end_time(mut self, v: Option<NaiveTime>) -> Self {
        self.inner.end_time = v;
        self
    }

    pub fn location(mut self, v: Option<Location>) -> Self {
        self.inner.location = v;
        self
    }

    pub fn capacity(mut self, v: u32) -> Self {
        self.inner.capacity = v;
        self
    }

    pub fn build(self) -> EventDraft {
        self.inner
    }
}

#[cfg(test)]
mod event_draft_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = EventDraftBuilder::default().build();
        assert_eq!(built.title, "Rust Community Meetup");
        assert_eq!(built.category, Some(Category::Technology));
        assert_eq!(built.date, NaiveDate::from_ymd_opt(2024, 6, 20));
        assert_eq!(built.start_time, NaiveTime::from_hms_opt(18, 0, 0));
        assert_eq!(built.end_time, NaiveTime::from_hms_opt(21, 0, 0));
        assert_eq!(built.capacity, 30);
        assert_eq!(built.agenda.len(), 2);
    }

    #[rstest]
    fn setters_override_fields_and_build_returns_inner() {
        let custom = EventDraftBuilder::new()
            .title("Yoga Morning")
            .category(Some(Category::Health))
            .date(None)
            .location(Some(Location::online()))
            .capacity(5)
            .build();

        assert_eq!(custom.title, "Yoga Morning");
        assert_eq!(custom.category, Some(Category::Health));
        assert_eq!(custom.date, None);
        assert_eq!(custom.location, Some(Location::online()));
        assert_eq!(custom.capacity, 5);
    }
}
