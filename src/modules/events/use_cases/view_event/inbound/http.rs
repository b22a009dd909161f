use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::events::adapters::outbound::event_repository::EventRepository;
use crate::modules::events::core::event::Event;
use crate::shared::core::primitives::EventId;
use crate::shell::responses::ApiError;
use crate::shell::state::AppState;

#[derive(Debug, Serialize)]
pub struct EventDetailView {
    #[serde(flatten)]
    pub event: Event,
    pub spots_left: u32,
    pub is_full: bool,
}

impl From<Event> for EventDetailView {
    fn from(event: Event) -> Self {
        Self {
            spots_left: event.spots_left(),
            is_full: event.is_full(),
            event,
        }
    }
}

pub async fn handle(State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    match state.events.get(EventId::new(id)).await {
        Ok(event) => Json(EventDetailView::from(event)).into_response(),
        Err(error) => ApiError(error).into_response(),
    }
}
