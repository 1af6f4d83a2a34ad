// Projector that keeps `posts_read_model` in lockstep with post events.
//
// Purpose
// - Snapshot the author and upsert the read row inside the command's transaction,
//   so a failed projection aborts the command that triggered it.

use crate::modules::posts::adapters::outbound::read_store::PostReadModelRepository;
use crate::modules::posts::adapters::outbound::write_store::PostWriteStore;
use crate::modules::posts::core::events::PostEvent;
use crate::modules::posts::core::projections::{Mutation, apply};
use crate::shared::core::primitives::UserId;
use crate::shared::infrastructure::event_bus::EventHandler;
use crate::shared::infrastructure::unit_of_work::{StorageError, with_deadline};
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectorError {
    #[error("cannot snapshot author: user {user_id} does not exist")]
    MissingReference { user_id: UserId },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub struct PostReadModelProjector {
    name: String,
    storage_timeout: Duration,
}

impl PostReadModelProjector {
    pub fn new(name: impl Into<String>, storage_timeout: Duration) -> Self {
        Self {
            name: name.into(),
            storage_timeout,
        }
    }

    async fn project<Tx>(&self, event: &PostEvent, tx: &mut Tx) -> Result<(), ProjectorError>
    where
        Tx: PostWriteStore + PostReadModelRepository,
    {
        let (post_id, user_id) = match event {
            PostEvent::PostCreatedV1(created) => (created.post_id, created.user_id),
        };
        let author = with_deadline(self.storage_timeout, tx.find_user(user_id))
            .await?
            .ok_or(ProjectorError::MissingReference { user_id })?;
        let existing = with_deadline(self.storage_timeout, tx.find_read_row(post_id)).await?;

        for mutation in apply(event, &author, existing.as_ref()) {
            match mutation {
                Mutation::Upsert(row) => {
                    with_deadline(self.storage_timeout, tx.upsert_read_row(row)).await?
                }
            }
        }
        tracing::debug!(projector = %self.name, post_id, "projected post read row");
        Ok(())
    }
}

#[async_trait]
impl<Tx> EventHandler<PostEvent, Tx> for PostReadModelProjector
where
    Tx: PostWriteStore + PostReadModelRepository + Send,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn handle(&self, event: &PostEvent, tx: &mut Tx) -> anyhow::Result<()> {
        self.project(event, tx).await?;
        Ok(())
    }
}
