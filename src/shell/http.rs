use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::accounts::use_cases::authenticate::inbound::http as authenticate_http;
use crate::modules::events::use_cases::browse_events::inbound::http as browse_http;
use crate::modules::events::use_cases::create_event::inbound::http as create_http;
use crate::modules::events::use_cases::view_event::inbound::http as view_http;
use crate::modules::registrations::use_cases::cancel_registration::inbound::http as cancel_http;
use crate::modules::registrations::use_cases::delete_owned_event::inbound::http as delete_http;
use crate::modules::registrations::use_cases::list_dashboard::inbound::http as dashboard_http;
use crate::modules::registrations::use_cases::register_for_event::inbound::http as register_http;
use crate::modules::registrations::use_cases::view_registration::inbound::http as registration_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/events", get(browse_http::handle).post(create_http::handle))
        .route(
            "/events/{id}",
            get(view_http::handle).delete(delete_http::handle),
        )
        .route(
            "/events/{id}/registration",
            get(registration_http::handle)
                .post(register_http::handle)
                .delete(cancel_http::handle),
        )
        .route("/dashboard", get(dashboard_http::handle))
        .route("/login", post(authenticate_http::log_in))
        .route("/sign-up", post(authenticate_http::sign_up))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
