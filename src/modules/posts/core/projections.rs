// Translate a post event into read model mutations.
//
// Responsibilities
// - Build the read row for a created post from the event and the author snapshot.
// - Keep re-delivery idempotent: an existing row keeps its author snapshot, its counters
//   and any later updated_at, while the event-derived fields are rewritten with the same values.
// - Never perform input or output.

use crate::modules::posts::core::events::PostEvent;
use crate::modules::posts::core::read_model::PostReadRow;
use crate::modules::posts::core::user::User;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Upsert(PostReadRow),
}

pub fn apply(event: &PostEvent, author: &User, existing: Option<&PostReadRow>) -> Vec<Mutation> {
    match event {
        PostEvent::PostCreatedV1(created) => {
            let row = match existing {
                Some(current) => PostReadRow {
                    post_id: created.post_id,
                    user_id: created.user_id,
                    username: current.username.clone(),
                    full_name: current.full_name.clone(),
                    content: created.content.clone(),
                    created_at: created.created_at,
                    updated_at: current.updated_at.max(created.created_at),
                    comment_count: current.comment_count,
                    like_count: current.like_count,
                },
                None => PostReadRow {
                    post_id: created.post_id,
                    user_id: created.user_id,
                    username: author.username.clone(),
                    full_name: author.full_name.clone(),
                    content: created.content.clone(),
                    created_at: created.created_at,
                    updated_at: created.created_at,
                    comment_count: 0,
                    like_count: 0,
                },
            };
            vec![Mutation::Upsert(row)]
        }
    }
}
