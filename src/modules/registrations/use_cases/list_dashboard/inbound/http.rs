use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::shell::identity::CurrentUser;
use crate::shell::responses::ApiError;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, CurrentUser(user_id): CurrentUser) -> Response {
    match state.dashboard_query.handle(&user_id).await {
        Ok(view) => Json(view).into_response(),
        Err(error) => ApiError(error).into_response(),
    }
}
