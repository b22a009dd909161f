use crate::modules::events::adapters::outbound::event_repository_in_memory::InMemoryEventRepository;
use crate::modules::events::core::event::Event;
use crate::shared::core::clock::FixedClock;
use crate::shared::infrastructure::navigation::in_memory::RecordingNavigator;
use crate::shell::state::AppState;
use chrono::NaiveDate;
use std::sync::Arc;
use std::time::Duration;

/// The date every test clock is pinned to, a Wednesday.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 12).unwrap()
}

pub fn make_test_state(events: Vec<Event>) -> (AppState, Arc<RecordingNavigator>) {
    let navigator = Arc::new(RecordingNavigator::new());
    let state = AppState::build(
        InMemoryEventRepository::with_events(events).unwrap(),
        Arc::new(FixedClock(today())),
        navigator.clone(),
        Duration::ZERO,
    );
    (state, navigator)
}

pub fn make_offline_state() -> AppState {
    let mut repository = InMemoryEventRepository::new();
    repository.toggle_offline();
    AppState::build(
        repository,
        Arc::new(FixedClock(today())),
        Arc::new(RecordingNavigator::new()),
        Duration::ZERO,
    )
}
