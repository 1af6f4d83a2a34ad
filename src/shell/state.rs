// Composition root.
//
// Responsibilities
// - Build the event bus and subscribe every projector before the first request.
// - Wire the in-memory database into the command handler and the query service.

use crate::modules::posts::adapters::outbound::in_memory::{
    InMemoryPostsDatabase, InMemoryTransaction,
};
use crate::modules::posts::core::events::{PostEvent, PostEventKind};
use crate::modules::posts::use_cases::create_post::handler::{
    CreatePostHandler, CreatePostSettings,
};
use crate::modules::posts::use_cases::project_post_read_model::projector::PostReadModelProjector;
use crate::modules::posts::use_cases::query_posts::handler::PostQueryService;
use crate::shared::core::primitives::Clock;
use crate::shared::infrastructure::event_bus::{EventBus, EventHandler};
use std::sync::Arc;
use std::time::Duration;

pub const READ_MODEL_PROJECTOR: &str = "posts_read_model";

pub type PostEventBus = EventBus<PostEvent, InMemoryTransaction>;

#[derive(Clone)]
pub struct AppState {
    pub create_post: Arc<CreatePostHandler<InMemoryPostsDatabase>>,
    pub queries: Arc<PostQueryService>,
}

/// Bus with the read model projector subscribed to PostCreated.
pub fn projecting_event_bus(storage_timeout: Duration) -> PostEventBus {
    let mut bus = PostEventBus::new();
    let projector: Arc<dyn EventHandler<PostEvent, InMemoryTransaction>> = Arc::new(
        PostReadModelProjector::new(READ_MODEL_PROJECTOR, storage_timeout),
    );
    bus.subscribe(PostEventKind::PostCreated, projector);
    bus
}

impl AppState {
    pub fn compose(
        database: Arc<InMemoryPostsDatabase>,
        clock: Arc<dyn Clock>,
        settings: CreatePostSettings,
    ) -> Self {
        let bus = projecting_event_bus(settings.storage_timeout);
        Self::with_bus(database, bus, clock, settings)
    }

    pub fn with_bus(
        database: Arc<InMemoryPostsDatabase>,
        bus: PostEventBus,
        clock: Arc<dyn Clock>,
        settings: CreatePostSettings,
    ) -> Self {
        let create_post = Arc::new(CreatePostHandler::new(
            database.clone(),
            Arc::new(bus),
            clock,
            settings,
        ));
        let queries = Arc::new(PostQueryService::new(database, settings.storage_timeout));

        Self {
            create_post,
            queries,
        }
    }
}
