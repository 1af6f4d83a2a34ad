use crate::modules::posts::core::user::User;

pub fn alice() -> User {
    User {
        user_id: 1,
        username: "alice".into(),
        full_name: "Alice A.".into(),
    }
}

pub fn bob() -> User {
    User {
        user_id: 2,
        username: "bob".into(),
        full_name: "Bob B.".into(),
    }
}
