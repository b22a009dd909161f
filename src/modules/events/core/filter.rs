// Pure filter behind the browse screen.
//
// - Text: case-insensitive substring of title, location or category label; any of
//   them may match. Blank text matches everything.
// - Time window: see TimeWindow::contains.
// - Both conditions must hold. Input order is preserved, nothing is ranked.

use crate::modules::events::core::event::Event;
use crate::modules::events::core::facet::QueryFacet;
use chrono::NaiveDate;

pub fn filter(events: &[Event], facet: &QueryFacet, today: NaiveDate) -> Vec<Event> {
    let needle = facet.text.trim().to_lowercase();
    events
        .iter()
        .filter(|event| matches_text(event, &needle))
        .filter(|event| facet.time_window.contains(event.date, today))
        .cloned()
        .collect()
}

fn matches_text(event: &Event, needle: &str) -> bool {
    needle.is_empty()
        || event.title.to_lowercase().contains(needle)
        || event.location.mentions(needle)
        || event.category.label().to_lowercase().contains(needle)
}
