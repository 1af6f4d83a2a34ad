// Event payload: PostCreatedV1.
//
// Purpose
// - Record the fact that an authoritative post was inserted.
//
// Inputs and outputs
// - Inputs: the post accepted by the create decider.
// - Outputs: fed to every handler subscribed to PostCreated, the read model projector first.
//
// Emitted only inside the transaction that inserts the post, so it never outlives a rolled back write.

use crate::shared::core::primitives::{PostId, UserId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PostCreatedV1 {
    pub post_id: PostId,
    pub user_id: UserId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
