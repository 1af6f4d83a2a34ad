// Denormalized read row for a single post.
//
// Purpose
// - Serve post queries without joining the write store.
//
// Responsibilities
// - Carry the author's username and full name as a snapshot taken when the row was projected.
// - Carry engagement counters, which start at zero.

use crate::shared::core::primitives::{PostId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostReadRow {
    pub post_id: PostId,
    pub user_id: UserId,
    pub username: String,
    pub full_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub comment_count: u64,
    pub like_count: u64,
}
