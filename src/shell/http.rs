use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension, Router,
    http::{HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use std::fmt::Display;
use uuid::Uuid;

use crate::modules::posts::use_cases::create_post::inbound::http as create_post_http;
use crate::modules::posts::use_cases::query_posts::inbound::http as query_posts_http;
use crate::shell::graphql::{AppSchema, build_schema};
use crate::shell::state::AppState;

pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    Router::new()
        .route("/posts", post(create_post_http::handle))
        .route("/posts/recent", get(query_posts_http::recent_posts))
        .route("/posts/{post_id}", get(query_posts_http::get_post))
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .with_state(state)
}

/// Log a failure under a fresh correlation id and return that id.
pub fn log_internal_error(operation: &str, error: &dyn Display) -> Uuid {
    let correlation_id = Uuid::now_v7();
    tracing::error!(%correlation_id, operation, error = %error, "request failed");
    correlation_id
}

/// 500 response carrying a fresh correlation id that is also logged with the error.
pub fn internal_error(operation: &str, error: &dyn Display) -> Response {
    let correlation_id = log_internal_error(operation, error);
    let mut response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
    if let Ok(value) = HeaderValue::from_str(&correlation_id.to_string()) {
        response.headers_mut().insert(CORRELATION_ID_HEADER, value);
    }
    response
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
