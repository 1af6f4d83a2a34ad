use async_graphql::{Context, Object, Result as GqlResult};
use chrono::SecondsFormat;

use crate::modules::posts::core::read_model::PostReadRow;
use crate::modules::posts::use_cases::query_posts::handler::QueryError;
use crate::shell::graphql::internal_gql_error;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlPostReadRow {
    pub post_id: i64,
    pub user_id: i64,
    pub username: String,
    pub full_name: String,
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
    pub comment_count: u64,
    pub like_count: u64,
}

impl From<PostReadRow> for GqlPostReadRow {
    fn from(r: PostReadRow) -> Self {
        Self {
            post_id: r.post_id,
            user_id: r.user_id,
            username: r.username,
            full_name: r.full_name,
            content: r.content,
            created_at: r.created_at.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            updated_at: r.updated_at.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            comment_count: r.comment_count,
            like_count: r.like_count,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Returns null when the post does not exist.
    async fn post(&self, context: &Context<'_>, post_id: i64) -> GqlResult<Option<GqlPostReadRow>> {
        let state = context.data_unchecked::<AppState>();
        match state.queries.get_post(post_id).await {
            Ok(row) => Ok(Some(row.into())),
            Err(QueryError::NotFound { .. }) => Ok(None),
            Err(e) => Err(internal_gql_error("get_post", &e)),
        }
    }

    async fn recent_posts(&self, context: &Context<'_>) -> GqlResult<Vec<GqlPostReadRow>> {
        let state = context.data_unchecked::<AppState>();
        let rows = state
            .queries
            .get_recent_posts()
            .await
            .map_err(|e| internal_gql_error("recent_posts", &e))?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
