use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::shared::core::primitives::EventId;
use crate::shell::identity::CurrentUser;
use crate::shell::responses::ApiError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<u64>,
) -> Response {
    match state.tracker.delete_owned(&user_id, EventId::new(id)).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => ApiError(error).into_response(),
    }
}
