use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Calendar window relative to today. Weeks start on Monday (ISO weeks).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeWindow {
    #[default]
    All,
    Today,
    ThisWeek,
    ThisMonth,
}

impl TimeWindow {
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            TimeWindow::All => true,
            TimeWindow::Today => date == today,
            TimeWindow::ThisWeek => date.iso_week() == today.iso_week(),
            TimeWindow::ThisMonth => date.year() == today.year() && date.month() == today.month(),
        }
    }
}

/// Request scoped query parameters of the browse screen. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryFacet {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub time_window: TimeWindow,
}

impl QueryFacet {
    pub fn new(text: impl Into<String>, time_window: TimeWindow) -> Self {
        Self {
            text: text.into(),
            time_window,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(text, TimeWindow::All)
    }
}
