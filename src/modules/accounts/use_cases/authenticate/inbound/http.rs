use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::accounts::use_cases::authenticate::command::{LoginForm, SignUpForm};
use crate::shell::responses::submitted;
use crate::shell::state::AppState;

pub async fn log_in(
    State(state): State<AppState>,
    body: Result<Json<LoginForm>, JsonRejection>,
) -> Response {
    let Json(form) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    submitted(state.auth_handler.log_in(form).await, StatusCode::OK)
}

pub async fn sign_up(
    State(state): State<AppState>,
    body: Result<Json<SignUpForm>, JsonRejection>,
) -> Response {
    let Json(form) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    submitted(state.auth_handler.sign_up(form).await, StatusCode::CREATED)
}
