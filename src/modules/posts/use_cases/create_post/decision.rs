use crate::modules::posts::core::events::PostEvent;
use crate::modules::posts::core::post::Post;
use crate::shared::core::primitives::UserId;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("content must not be empty")]
    EmptyContent,

    #[error("content is {actual} characters long, the limit is {max}")]
    ContentTooLong { max: usize, actual: usize },

    #[error("user {user_id} does not exist")]
    UnknownAuthor { user_id: UserId },
}

#[derive(Debug)]
pub enum Decision {
    Accepted { post: Post, events: Vec<PostEvent> },
    Rejected { reason: DecideError },
}
