// Read store port for the `posts_read_model` table, reached through an open transaction.
// Projectors use it inside the unit of work of the command that triggered them.

use crate::modules::posts::core::read_model::PostReadRow;
use crate::shared::core::primitives::PostId;
use crate::shared::infrastructure::unit_of_work::StorageError;
use async_trait::async_trait;

#[async_trait]
pub trait PostReadModelRepository: Send + Sync {
    async fn find_read_row(&self, post_id: PostId) -> Result<Option<PostReadRow>, StorageError>;

    async fn upsert_read_row(&mut self, row: PostReadRow) -> Result<(), StorageError>;
}
