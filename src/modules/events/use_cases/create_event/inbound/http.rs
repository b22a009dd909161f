use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::events::core::draft::EventDraft;
use crate::shell::identity::CurrentUser;
use crate::shell::responses::submitted;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    body: Result<Json<EventDraft>, JsonRejection>,
) -> Response {
    let Json(draft) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let outcome = state.create_handler.handle(&user_id, draft).await;
    submitted(outcome, StatusCode::CREATED)
}
