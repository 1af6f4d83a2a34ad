use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::posts::use_cases::query_posts::handler::QueryError;
use crate::shared::core::primitives::PostId;
use crate::shell::http::internal_error;
use crate::shell::state::AppState;

pub async fn get_post(
    State(state): State<AppState>,
    post_id: Result<Path<PostId>, PathRejection>,
) -> impl IntoResponse {
    let Path(post_id) = match post_id {
        Ok(p) => p,
        Err(_) => return StatusCode::BAD_REQUEST.into_response(),
    };

    match state.queries.get_post(post_id).await {
        Ok(row) => Json(row).into_response(),
        Err(QueryError::NotFound { .. }) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => internal_error("get_post", &e),
    }
}

pub async fn recent_posts(State(state): State<AppState>) -> impl IntoResponse {
    match state.queries.get_recent_posts().await {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => internal_error("recent_posts", &e),
    }
}
