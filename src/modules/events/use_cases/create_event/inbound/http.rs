use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::modules::events::core::creation_request::EventCreationRequest;
use crate::shared::infrastructure::http::api_error::ApiError;
use crate::shell::http::EVENTS_PATH;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<EventCreationRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = body?;
    let created = state.events.create_event(request).await?;
    let location = format!("{EVENTS_PATH}/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}
