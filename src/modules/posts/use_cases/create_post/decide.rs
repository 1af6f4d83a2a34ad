// Pure decision function for creating a post.
//
// Responsibilities
// - Enforce rules: content is not blank, content fits the length limit, the author exists.
// - On success, build the authoritative post and the PostCreatedV1 event from the same values.
// - Never perform input or output.

use crate::modules::posts::core::events::PostEvent;
use crate::modules::posts::core::events::v1::post_created::PostCreatedV1;
use crate::modules::posts::core::post::Post;
use crate::modules::posts::core::user::User;
use crate::modules::posts::use_cases::create_post::command::CreatePost;
use crate::modules::posts::use_cases::create_post::decision::{DecideError, Decision};
use crate::shared::core::primitives::PostId;
use chrono::{DateTime, Utc};

pub fn decide_create_post(
    author: Option<&User>,
    command: CreatePost,
    post_id: PostId,
    now: DateTime<Utc>,
    max_content_length: usize,
) -> Decision {
    if command.content.trim().is_empty() {
        return Decision::Rejected {
            reason: DecideError::EmptyContent,
        };
    }
    let length = command.content.chars().count();
    if length > max_content_length {
        return Decision::Rejected {
            reason: DecideError::ContentTooLong {
                max: max_content_length,
                actual: length,
            },
        };
    }
    if author.is_none() {
        return Decision::Rejected {
            reason: DecideError::UnknownAuthor {
                user_id: command.user_id,
            },
        };
    }

    let post = Post {
        post_id,
        user_id: command.user_id,
        content: command.content,
        created_at: now,
        updated_at: now,
    };
    let event = PostCreatedV1 {
        post_id: post.post_id,
        user_id: post.user_id,
        content: post.content.clone(),
        created_at: post.created_at,
    };
    Decision::Accepted {
        post,
        events: vec![PostEvent::PostCreatedV1(event)],
    }
}
