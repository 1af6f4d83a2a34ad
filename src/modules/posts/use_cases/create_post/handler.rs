use crate::modules::posts::adapters::outbound::write_store::PostWriteStore;
use crate::modules::posts::core::events::PostEvent;
use crate::modules::posts::core::post::Post;
use crate::modules::posts::use_cases::create_post::command::CreatePost;
use crate::modules::posts::use_cases::create_post::decide::decide_create_post;
use crate::modules::posts::use_cases::create_post::decision::{DecideError, Decision};
use crate::shared::core::primitives::{Clock, UserId};
use crate::shared::infrastructure::event_bus::{EventBus, PublishError};
use crate::shared::infrastructure::unit_of_work::{
    StorageError, Transaction, UnitOfWork, with_deadline,
};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_MAX_CONTENT_LENGTH: usize = 4096;
pub const DEFAULT_STORAGE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("validation failed: {0}")]
    Validation(DecideError),

    #[error("user {user_id} does not exist")]
    MissingReference { user_id: UserId },

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Projection(#[from] PublishError),
}

impl From<DecideError> for ApplicationError {
    fn from(reason: DecideError) -> Self {
        match reason {
            DecideError::UnknownAuthor { user_id } => ApplicationError::MissingReference { user_id },
            other => ApplicationError::Validation(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatePostSettings {
    pub max_content_length: usize,
    pub storage_timeout: Duration,
}

impl Default for CreatePostSettings {
    fn default() -> Self {
        Self {
            max_content_length: DEFAULT_MAX_CONTENT_LENGTH,
            storage_timeout: DEFAULT_STORAGE_TIMEOUT,
        }
    }
}

pub struct CreatePostHandler<TStore>
where
    TStore: UnitOfWork,
    TStore::Transaction: PostWriteStore,
{
    store: Arc<TStore>,
    bus: Arc<EventBus<PostEvent, TStore::Transaction>>,
    clock: Arc<dyn Clock>,
    settings: CreatePostSettings,
}

impl<TStore> CreatePostHandler<TStore>
where
    TStore: UnitOfWork,
    TStore::Transaction: PostWriteStore,
{
    pub fn new(
        store: Arc<TStore>,
        bus: Arc<EventBus<PostEvent, TStore::Transaction>>,
        clock: Arc<dyn Clock>,
        settings: CreatePostSettings,
    ) -> Self {
        Self {
            store,
            bus,
            clock,
            settings,
        }
    }

    /// Insert the post and run every subscribed handler in one transaction.
    ///
    /// Any failure before commit drops the transaction, so neither the post nor
    /// anything a handler wrote survives.
    pub async fn handle(&self, command: CreatePost) -> Result<Post, ApplicationError> {
        let deadline = self.settings.storage_timeout;
        let user_id = command.user_id;

        let mut tx = with_deadline(deadline, self.store.begin()).await?;
        let author = with_deadline(deadline, tx.find_user(user_id)).await?;
        let post_id = with_deadline(deadline, tx.next_post_id()).await?;

        let decision = decide_create_post(
            author.as_ref(),
            command,
            post_id,
            self.clock.now(),
            self.settings.max_content_length,
        );
        let (post, events) = match decision {
            Decision::Accepted { post, events } => (post, events),
            Decision::Rejected { reason } => {
                tracing::warn!(user_id, %reason, "create post rejected");
                return Err(reason.into());
            }
        };

        with_deadline(deadline, tx.insert_post(post.clone())).await?;
        for event in &events {
            self.bus.publish(event, &mut tx).await?;
        }

        // A commit that has started finishes even if the caller is cancelled.
        tokio::spawn(with_deadline(deadline, tx.commit()))
            .await
            .map_err(|e| StorageError::Backend(format!("commit task failed: {e}")))??;

        tracing::info!(post_id = post.post_id, user_id, "post created");
        Ok(post)
    }
}
