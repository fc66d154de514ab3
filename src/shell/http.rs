use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::modules::events::use_cases::create_event::inbound::http as create_http;
use crate::modules::events::use_cases::delete_event::inbound::http as delete_http;
use crate::modules::events::use_cases::get_event::inbound::http as get_http;
use crate::modules::events::use_cases::list_events::inbound::http as list_http;
use crate::modules::events::use_cases::update_event::inbound::http as update_http;
use crate::shell::state::AppState;

pub const EVENTS_PATH: &str = "/api/v1/events";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(EVENTS_PATH, post(create_http::handle).get(list_http::handle))
        .route(
            &format!("{EVENTS_PATH}/{{id}}"),
            get(get_http::handle)
                .patch(update_http::handle)
                .delete(delete_http::handle),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
