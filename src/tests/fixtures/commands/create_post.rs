use crate::modules::posts::use_cases::create_post::command::CreatePost;
use crate::shared::core::primitives::UserId;

pub struct CreatePostBuilder {
    user_id: UserId,
    content: String,
}

impl CreatePostBuilder {
    pub fn new() -> Self {
        Self {
            user_id: 1,
            content: "hello world".into(),
        }
    }

    pub fn user_id(mut self, user_id: UserId) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn build(self) -> CreatePost {
        CreatePost {
            user_id: self.user_id,
            content: self.content,
        }
    }
}

impl Default for CreatePostBuilder {
    fn default() -> Self {
        Self::new()
    }
}
