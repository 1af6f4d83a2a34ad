// Root event enumeration for posts and re-exports of versioned payloads.
//
// Versioning and evolution
// - Prefer additive changes. If a breaking change is needed, add a new version and a new variant.
// - Edits, deletes, likes and comments get their own variants and kinds when they are introduced.

use crate::shared::infrastructure::event_bus::DomainEvent;

pub mod v1 {
    pub mod post_created;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum PostEvent {
    PostCreatedV1(v1::post_created::PostCreatedV1),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostEventKind {
    PostCreated,
}

impl DomainEvent for PostEvent {
    type Kind = PostEventKind;

    fn kind(&self) -> PostEventKind {
        match self {
            PostEvent::PostCreatedV1(_) => PostEventKind::PostCreated,
        }
    }
}
