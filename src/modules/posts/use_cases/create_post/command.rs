// Command data type for creating a post.
//
// Purpose
// - Express the intent of a user to publish some content.
//
// Responsibilities
// - Carry input data for the decider to validate.
// - Be independent of transport layer details (not tied to HTTP or GraphQL).

use crate::shared::core::primitives::UserId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePost {
    pub user_id: UserId,
    pub content: String,
}
