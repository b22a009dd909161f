// Client supplied fields of a new event, as filled in on the creation form.
//
// Validation order: title, category, date, start time, end time, location,
// then the interval. The first failure is reported.

use crate::modules::events::core::event::{AgendaItem, Category, Event, Location};
use crate::shared::core::errors::ValidationError;
use crate::shared::core::primitives::EventId;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventDraft {
    pub title: String,
    pub category: Option<Category>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub location: Option<Location>,
    pub organizer: String,
    pub capacity: u32,
    pub image_ref: String,
    pub description: String,
    pub agenda: Vec<AgendaItem>,
}

impl EventDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.clone().into_event(EventId::new(0)).map(|_| ())
    }

    /// Turn the draft into a stored event under `id`, starting with no attendees.
    pub fn into_event(self, id: EventId) -> Result<Event, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        let category = self.category.ok_or(ValidationError::MissingCategory)?;
        let date = self.date.ok_or(ValidationError::MissingDate)?;
        let start_time = self.start_time.ok_or(ValidationError::MissingStartTime)?;
        let end_time = self.end_time.ok_or(ValidationError::MissingEndTime)?;
        let location = self
            .location
            .filter(|location| !location.venue.trim().is_empty())
            .ok_or(ValidationError::MissingLocation)?;
        if end_time <= start_time {
            return Err(ValidationError::InvalidInterval);
        }

        Ok(Event {
            id,
            title: title.to_string(),
            date,
            start_time,
            end_time,
            location,
            category,
            organizer: self.organizer,
            capacity: self.capacity,
            attendee_count: 0,
            image_ref: self.image_ref,
            description: self.description,
            agenda: self.agenda,
        })
    }
}
