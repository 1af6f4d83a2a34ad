use crate::modules::posts::core::read_model::PostReadRow;
use crate::shared::core::primitives::PostId;
use crate::shared::infrastructure::unit_of_work::StorageError;
use async_trait::async_trait;

/// Committed-state lookups over `posts_read_model`. Never joins the write store.
#[async_trait]
pub trait PostReadModelQueries: Send + Sync {
    async fn find_by_post_id(&self, post_id: PostId) -> Result<Option<PostReadRow>, StorageError>;

    /// Rows ordered by created_at descending, ties by post_id descending, at most `limit` of them.
    async fn list_recent(&self, limit: usize) -> Result<Vec<PostReadRow>, StorageError>;
}
