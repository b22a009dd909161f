use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::modules::registrations::use_cases::view_registration::inbound::http::RegistrationView;
use crate::shared::core::primitives::EventId;
use crate::shell::identity::CurrentUser;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<u64>,
) -> Response {
    let event_id = EventId::new(id);
    RegistrationView::respond(event_id, state.tracker.register(&user_id, event_id).await)
}
