// Canonical PostCreatedV1 instance, matching tests/fixtures/events/post_created_v1.json.

use crate::modules::posts::core::events::v1::post_created::PostCreatedV1;
use crate::tests::fixtures::clock::START_SECONDS;
use crate::tests::fixtures::users::alice;
use chrono::{TimeZone, Utc};

pub fn make_post_created_v1_event() -> PostCreatedV1 {
    PostCreatedV1 {
        post_id: 1,
        user_id: alice().user_id,
        content: "hi".into(),
        created_at: Utc.timestamp_opt(START_SECONDS, 0).unwrap(),
    }
}
