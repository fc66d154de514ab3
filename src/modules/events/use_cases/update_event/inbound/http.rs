use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};

use crate::modules::events::core::update_request::EventUpdateRequest;
use crate::shared::infrastructure::http::api_error::ApiError;
use crate::shared::infrastructure::http::extract::IdPath;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    body: Result<Json<EventUpdateRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(patch) = body?;
    match state.events.update_event(id, patch).await? {
        Some(event) => Ok(Json(event)),
        None => Err(ApiError::NotFound),
    }
}
