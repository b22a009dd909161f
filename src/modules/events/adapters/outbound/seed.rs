// Demo catalog loaded at startup when seeding is enabled.
//
// Entries carry `days_from_today` instead of a date so that a freshly started
// server always has upcoming events, plus one that already took place.

use crate::modules::events::core::event::Event;
use chrono::{NaiveDate, TimeDelta};
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

const DEMO_CATALOG: &str = include_str!("demo_catalog.json");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("demo catalog is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("{0} days from today is out of the calendar's range")]
    DateOutOfRange(i64),
}

#[derive(Deserialize)]
struct SeedEntry {
    days_from_today: i64,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

pub fn demo_catalog(today: NaiveDate) -> Result<Vec<Event>, SeedError> {
    let entries: Vec<SeedEntry> = serde_json::from_str(DEMO_CATALOG)?;
    entries
        .into_iter()
        .map(|SeedEntry { days_from_today, mut fields }| -> Result<Event, SeedError> {
            let date = TimeDelta::try_days(days_from_today)
                .and_then(|offset| today.checked_add_signed(offset))
                .ok_or(SeedError::DateOutOfRange(days_from_today))?;
            fields.insert("date".to_string(), serde_json::to_value(date)?);
            Ok(serde_json::from_value(Value::Object(fields))?)
        })
        .collect()
}
