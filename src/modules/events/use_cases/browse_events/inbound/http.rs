use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::events::core::facet::{QueryFacet, TimeWindow};
use crate::shell::responses::ApiError;
use crate::shell::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct BrowseEventsParams {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub window: TimeWindow,
}

pub async fn handle(
    State(state): State<AppState>,
    params: Result<Query<BrowseEventsParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(p) => p,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let facet = QueryFacet::new(params.q, params.window);
    match state.browse_handler.handle(&facet).await {
        Ok(events) => Json(events).into_response(),
        Err(error) => ApiError(error).into_response(),
    }
}
