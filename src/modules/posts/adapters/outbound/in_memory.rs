// In memory backend shared by the write store and the read store.
//
// Purpose
// - Run commands and their projections in one unit of work without a database.
// - Support tests and local development.
//
// Responsibilities
// - Hold the `posts`, `users` and `posts_read_model` tables behind one lock.
// - Serialize transactions: a transaction owns the write lock until it commits or is dropped.
// - Stage writes inside the transaction and apply them all at commit. Dropping discards them.
// - Serve committed read rows to the query side under the read lock.

use crate::modules::posts::adapters::outbound::read_store::PostReadModelRepository;
use crate::modules::posts::adapters::outbound::write_store::PostWriteStore;
use crate::modules::posts::core::post::Post;
use crate::modules::posts::core::read_model::PostReadRow;
use crate::modules::posts::core::user::User;
use crate::modules::posts::use_cases::query_posts::queries_port::PostReadModelQueries;
use crate::shared::core::primitives::{PostId, UserId};
use crate::shared::infrastructure::unit_of_work::{StorageError, Transaction, UnitOfWork};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{OwnedRwLockWriteGuard, RwLock};

#[derive(Debug, Default)]
struct Tables {
    posts: BTreeMap<PostId, Post>,
    users: BTreeMap<UserId, User>,
    posts_read_model: BTreeMap<PostId, PostReadRow>,
    last_post_id: PostId,
}

#[derive(Default)]
pub struct InMemoryPostsDatabase {
    tables: Arc<RwLock<Tables>>,
    is_offline: bool,
    is_read_model_offline: bool,
    delay_ms: u64,
    commit_delay_ms: u64,
}

impl InMemoryPostsDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn toggle_read_model_offline(&mut self) {
        self.is_read_model_offline = !self.is_read_model_offline;
    }

    pub fn set_delay_ms(&mut self, ms: u64) {
        self.delay_ms = ms;
    }

    /// Latency applied by `commit` before the staged writes become visible.
    pub fn set_commit_delay_ms(&mut self, ms: u64) {
        self.commit_delay_ms = ms;
    }

    async fn simulate_latency(&self) {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
    }

    fn ensure_online(&self) -> Result<(), StorageError> {
        if self.is_offline {
            return Err(StorageError::Backend("Posts database offline".into()));
        }
        Ok(())
    }

    /// Load a user profile. Usernames are unique and non-empty.
    pub async fn insert_user(&self, user: User) -> Result<(), StorageError> {
        self.ensure_online()?;
        if user.username.trim().is_empty() {
            return Err(StorageError::Constraint(format!(
                "user {} has an empty username",
                user.user_id
            )));
        }
        let mut tables = self.tables.write().await;
        if tables.users.contains_key(&user.user_id) {
            return Err(StorageError::Constraint(format!(
                "user {} already exists",
                user.user_id
            )));
        }
        if tables.users.values().any(|u| u.username == user.username) {
            return Err(StorageError::Constraint(format!(
                "username {} is taken",
                user.username
            )));
        }
        tables.users.insert(user.user_id, user);
        Ok(())
    }
}

pub struct InMemoryTransaction {
    tables: OwnedRwLockWriteGuard<Tables>,
    last_post_id: PostId,
    posts: BTreeMap<PostId, Post>,
    read_rows: BTreeMap<PostId, PostReadRow>,
    is_read_model_offline: bool,
    commit_delay_ms: u64,
}

impl InMemoryTransaction {
    fn contains_post(&self, post_id: PostId) -> bool {
        self.posts.contains_key(&post_id) || self.tables.posts.contains_key(&post_id)
    }
}

#[async_trait]
impl UnitOfWork for InMemoryPostsDatabase {
    type Transaction = InMemoryTransaction;

    async fn begin(&self) -> Result<InMemoryTransaction, StorageError> {
        self.simulate_latency().await;
        self.ensure_online()?;
        let tables = self.tables.clone().write_owned().await;
        let last_post_id = tables.last_post_id;
        Ok(InMemoryTransaction {
            tables,
            last_post_id,
            posts: BTreeMap::new(),
            read_rows: BTreeMap::new(),
            is_read_model_offline: self.is_read_model_offline,
            commit_delay_ms: self.commit_delay_ms,
        })
    }
}

#[async_trait]
impl Transaction for InMemoryTransaction {
    async fn commit(self) -> Result<(), StorageError> {
        if self.commit_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.commit_delay_ms)).await;
        }
        let InMemoryTransaction {
            mut tables,
            last_post_id,
            posts,
            read_rows,
            ..
        } = self;
        tables.posts.extend(posts);
        tables.posts_read_model.extend(read_rows);
        tables.last_post_id = last_post_id;
        Ok(())
    }
}

#[async_trait]
impl PostWriteStore for InMemoryTransaction {
    async fn next_post_id(&mut self) -> Result<PostId, StorageError> {
        self.last_post_id += 1;
        Ok(self.last_post_id)
    }

    async fn insert_post(&mut self, post: Post) -> Result<(), StorageError> {
        if self.contains_post(post.post_id) {
            return Err(StorageError::Constraint(format!(
                "post {} already exists",
                post.post_id
            )));
        }
        if !self.tables.users.contains_key(&post.user_id) {
            return Err(StorageError::Constraint(format!(
                "user {} does not exist",
                post.user_id
            )));
        }
        if post.updated_at < post.created_at {
            return Err(StorageError::Constraint(format!(
                "post {} is updated before it was created",
                post.post_id
            )));
        }
        self.posts.insert(post.post_id, post);
        Ok(())
    }

    async fn update_post(&mut self, post: Post) -> Result<(), StorageError> {
        if !self.contains_post(post.post_id) {
            return Err(StorageError::Constraint(format!(
                "post {} does not exist",
                post.post_id
            )));
        }
        if post.updated_at < post.created_at {
            return Err(StorageError::Constraint(format!(
                "post {} is updated before it was created",
                post.post_id
            )));
        }
        self.posts.insert(post.post_id, post);
        Ok(())
    }

    async fn find_post(&self, post_id: PostId) -> Result<Option<Post>, StorageError> {
        Ok(self
            .posts
            .get(&post_id)
            .or_else(|| self.tables.posts.get(&post_id))
            .cloned())
    }

    async fn find_user(&self, user_id: UserId) -> Result<Option<User>, StorageError> {
        Ok(self.tables.users.get(&user_id).cloned())
    }
}

#[async_trait]
impl PostReadModelRepository for InMemoryTransaction {
    async fn find_read_row(&self, post_id: PostId) -> Result<Option<PostReadRow>, StorageError> {
        Ok(self
            .read_rows
            .get(&post_id)
            .or_else(|| self.tables.posts_read_model.get(&post_id))
            .cloned())
    }

    async fn upsert_read_row(&mut self, row: PostReadRow) -> Result<(), StorageError> {
        if self.is_read_model_offline {
            return Err(StorageError::Backend("Read model offline".into()));
        }
        self.read_rows.insert(row.post_id, row);
        Ok(())
    }
}

#[async_trait]
impl PostReadModelQueries for InMemoryPostsDatabase {
    async fn find_by_post_id(&self, post_id: PostId) -> Result<Option<PostReadRow>, StorageError> {
        self.simulate_latency().await;
        self.ensure_online()?;
        Ok(self.tables.read().await.posts_read_model.get(&post_id).cloned())
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<PostReadRow>, StorageError> {
        self.simulate_latency().await;
        self.ensure_online()?;
        let tables = self.tables.read().await;
        let mut rows: Vec<PostReadRow> = tables.posts_read_model.values().cloned().collect();
        rows.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.post_id.cmp(&a.post_id))
        });
        rows.truncate(limit);
        Ok(rows)
    }
}
