use axum::{Json, extract::State, response::IntoResponse};

use crate::shared::infrastructure::http::api_error::ApiError;
use crate::shared::infrastructure::http::extract::IdPath;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, ApiError> {
    match state.events.get_event(id).await? {
        Some(event) => Ok(Json(event)),
        None => Err(ApiError::NotFound),
    }
}
