// Read-only façade over the post read model.
//
// Responsibilities
// - Look up a single read row, turning absence into NotFound.
// - Return the most recent posts, newest first, capped at RECENT_POSTS_LIMIT.
// - Never mutate state and never touch the write store.

use crate::modules::posts::core::read_model::PostReadRow;
use crate::modules::posts::use_cases::query_posts::queries_port::PostReadModelQueries;
use crate::shared::core::primitives::PostId;
use crate::shared::infrastructure::unit_of_work::{StorageError, with_deadline};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

pub const RECENT_POSTS_LIMIT: usize = 10;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("post {post_id} not found")]
    NotFound { post_id: PostId },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub struct PostQueryService {
    queries: Arc<dyn PostReadModelQueries>,
    storage_timeout: Duration,
}

impl PostQueryService {
    pub fn new(queries: Arc<dyn PostReadModelQueries>, storage_timeout: Duration) -> Self {
        Self {
            queries,
            storage_timeout,
        }
    }

    pub async fn get_post(&self, post_id: PostId) -> Result<PostReadRow, QueryError> {
        with_deadline(self.storage_timeout, self.queries.find_by_post_id(post_id))
            .await?
            .ok_or(QueryError::NotFound { post_id })
    }

    pub async fn get_recent_posts(&self) -> Result<Vec<PostReadRow>, QueryError> {
        let rows = with_deadline(
            self.storage_timeout,
            self.queries.list_recent(RECENT_POSTS_LIMIT),
        )
        .await?;
        Ok(rows)
    }
}
