// Author profile. Reference data for the command path: users are seeded, never written by commands.

use crate::shared::core::primitives::UserId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: UserId,
    pub username: String,
    pub full_name: String,
}
