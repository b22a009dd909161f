use crate::shared::core::errors::DomainError;
use crate::shared::infrastructure::navigation::Route;
use crate::shared::infrastructure::submission::Outcome;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self(error)
    }
}

pub fn status_of(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        DomainError::NotFound(_) => StatusCode::NOT_FOUND,
        DomainError::CapacityExceeded(_) | DomainError::DuplicateEvent(_) => StatusCode::CONFLICT,
        DomainError::PermissionDenied { .. } => StatusCode::FORBIDDEN,
        DomainError::Backend(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_of(&self.0);
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

/// Body of a settled form submission.
#[derive(Debug, Serialize)]
pub struct Submitted<T> {
    pub data: T,
    pub redirect_to: Route,
}

pub fn submitted<T: Serialize>(outcome: Outcome<T>, status: StatusCode) -> Response {
    match outcome {
        Outcome::Success { value, route } => (
            status,
            Json(Submitted {
                data: value,
                redirect_to: route,
            }),
        )
            .into_response(),
        Outcome::Failure(error) => ApiError(error).into_response(),
        Outcome::Cancelled => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "error": "submission cancelled" })),
        )
            .into_response(),
    }
}
