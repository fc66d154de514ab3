use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    response::IntoResponse,
};

use crate::shared::core::pagination::PageParams;
use crate::shared::infrastructure::http::api_error::ApiError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = params?;
    let page = state
        .events
        .get_events(params.resolve(state.page_limits))
        .await?;
    Ok(Json(page))
}
