use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult};
use chrono::SecondsFormat;

use crate::modules::posts::core::post::Post;
use crate::modules::posts::use_cases::create_post::command::CreatePost;
use crate::modules::posts::use_cases::create_post::handler::ApplicationError;
use crate::shell::graphql::internal_gql_error;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlPost {
    pub post_id: i64,
    pub user_id: i64,
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Post> for GqlPost {
    fn from(p: Post) -> Self {
        Self {
            post_id: p.post_id,
            user_id: p.user_id,
            content: p.content,
            created_at: p.created_at.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            updated_at: p.updated_at.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        }
    }
}

fn to_gql_error(error: ApplicationError) -> async_graphql::Error {
    let code = match &error {
        ApplicationError::Validation(_) => "VALIDATION",
        ApplicationError::MissingReference { .. } => "MISSING_REFERENCE",
        ApplicationError::Storage(_) | ApplicationError::Projection(_) => {
            return internal_gql_error("create_post", &error);
        }
    };
    async_graphql::Error::new(error.to_string()).extend_with(|_, ext| ext.set("code", code))
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_post(
        &self,
        context: &Context<'_>,
        user_id: i64,
        content: String,
    ) -> GqlResult<GqlPost> {
        let state = context.data_unchecked::<AppState>();
        let post = state
            .create_post
            .handle(CreatePost { user_id, content })
            .await
            .map_err(to_gql_error)?;
        Ok(post.into())
    }
}
