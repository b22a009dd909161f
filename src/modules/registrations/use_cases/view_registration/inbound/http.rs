use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::registrations::core::state::RegistrationState;
use crate::shared::core::errors::DomainError;
use crate::shared::core::primitives::EventId;
use crate::shell::identity::CurrentUser;
use crate::shell::responses::ApiError;
use crate::shell::state::AppState;

/// Registration button state for one event.
#[derive(Debug, Serialize)]
pub struct RegistrationView {
    pub event_id: EventId,
    pub state: RegistrationState,
}

impl RegistrationView {
    pub fn respond(event_id: EventId, state: Result<RegistrationState, DomainError>) -> Response {
        match state {
            Ok(state) => Json(RegistrationView { event_id, state }).into_response(),
            Err(error) => ApiError(error).into_response(),
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<u64>,
) -> Response {
    let event_id = EventId::new(id);
    RegistrationView::respond(event_id, state.tracker.state_of(&user_id, event_id).await)
}
