use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use super::domain::{User, UserId, UserInput};
use super::store::UserStore;
use crate::storage::id_gen::IdGenerator;

/// Users in insertion order plus the id counter. Only touched with the lock held.
#[derive(Debug, Default)]
struct UserTable {
    users: Vec<User>,
    ids: IdGenerator,
}

impl UserTable {
    fn position(&self, id: UserId) -> Option<usize> {
        self.users.iter().position(|u| u.id == id)
    }
}

/// Process-local user store. Every operation, reads included, runs under one mutex.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    inner: Mutex<UserTable>,
}

impl InMemoryUserStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn list(&self) -> Vec<User> {
        let table = self.inner.lock().await;
        table.users.clone()
    }

    async fn create(&self, input: UserInput) -> User {
        let mut table = self.inner.lock().await;
        // ids are never reused; running past i64::MAX is unreachable in practice
        let id = table.ids.next_id().expect("user id space exhausted");
        let user = User { id, name: input.name };
        table.users.push(user.clone());
        debug!(user_id = user.id, next_id = ?table.ids.peek(), "user appended");
        user
    }

    async fn update(&self, id: UserId, input: UserInput) -> Option<User> {
        let mut table = self.inner.lock().await;
        let idx = table.position(id)?;
        let existing = &mut table.users[idx];
        existing.name = input.name;
        Some(existing.clone())
    }

    async fn delete(&self, id: UserId) -> bool {
        let mut table = self.inner.lock().await;
        match table.position(id) {
            Some(idx) => {
                // `remove` keeps the remaining users in order
                table.users.remove(idx);
                true
            }
            None => false,
        }
    }
}
