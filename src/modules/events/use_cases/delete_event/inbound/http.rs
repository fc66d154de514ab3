use axum::{extract::State, http::StatusCode};

use crate::shared::infrastructure::http::api_error::ApiError;
use crate::shared::infrastructure::http::extract::IdPath;
use crate::shell::state::AppState;

/// Deleting an id that is not stored still answers 200.
pub async fn handle(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<StatusCode, ApiError> {
    state.events.delete_event(id).await?;
    Ok(StatusCode::OK)
}
