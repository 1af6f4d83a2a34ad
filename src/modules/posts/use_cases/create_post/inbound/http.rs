use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::posts::use_cases::create_post::command::CreatePost;
use crate::modules::posts::use_cases::create_post::handler::ApplicationError;
use crate::shared::core::primitives::UserId;
use crate::shell::http::internal_error;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostBody {
    pub user_id: UserId,
    pub content: String,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

fn error_body(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreatePostBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return error_body(StatusCode::BAD_REQUEST, rejection.body_text()),
    };

    let command = CreatePost {
        user_id: body.user_id,
        content: body.content,
    };

    match state.create_post.handle(command).await {
        Ok(post) => (StatusCode::OK, Json(post)).into_response(),
        Err(ApplicationError::Validation(reason)) => {
            error_body(StatusCode::BAD_REQUEST, reason.to_string())
        }
        Err(e @ ApplicationError::MissingReference { .. }) => {
            error_body(StatusCode::NOT_FOUND, e.to_string())
        }
        Err(e) => internal_error("create_post", &e),
    }
}
