// Write store port: the authoritative `posts` and `users` tables, reached through an open transaction.

use crate::modules::posts::core::post::Post;
use crate::modules::posts::core::user::User;
use crate::shared::core::primitives::{PostId, UserId};
use crate::shared::infrastructure::unit_of_work::StorageError;
use async_trait::async_trait;

#[async_trait]
pub trait PostWriteStore: Send + Sync {
    /// Reserve the next post identifier. The reservation only sticks if the transaction commits.
    async fn next_post_id(&mut self) -> Result<PostId, StorageError>;

    async fn insert_post(&mut self, post: Post) -> Result<(), StorageError>;

    async fn update_post(&mut self, post: Post) -> Result<(), StorageError>;

    async fn find_post(&self, post_id: PostId) -> Result<Option<Post>, StorageError>;

    async fn find_user(&self, user_id: UserId) -> Result<Option<User>, StorageError>;
}
