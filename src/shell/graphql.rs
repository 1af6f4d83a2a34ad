use async_graphql::{EmptySubscription, ErrorExtensions, Schema};
use std::fmt::Display;

pub use crate::modules::posts::use_cases::create_post::inbound::graphql::MutationRoot;
pub use crate::modules::posts::use_cases::query_posts::inbound::graphql::QueryRoot;
pub use crate::shell::state::AppState;
use crate::shell::http::log_internal_error;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

/// GraphQL counterpart of a 500: logged, tagged INTERNAL, and carrying the correlation id.
pub fn internal_gql_error(operation: &str, error: &dyn Display) -> async_graphql::Error {
    let correlation_id = log_internal_error(operation, error).to_string();
    async_graphql::Error::new(error.to_string()).extend_with(|_, ext| {
        ext.set("code", "INTERNAL");
        ext.set("correlationId", correlation_id);
    })
}
