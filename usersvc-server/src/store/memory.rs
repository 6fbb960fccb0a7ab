//! In-memory user store
//!
//! Ordered `Vec` behind a `tokio::sync::RwLock`. Lookups are linear scans.
//! Ids come from a monotonic counter so a deleted id is never handed out
//! again, even when the list is emptied.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::{StoreError, UserStore};
use crate::models::{seed_users, NewUser, UpdateUser, User, UserId};

struct Inner {
    users: Vec<User>,
    next_id: UserId,
}

impl Inner {
    fn position(&self, id: UserId) -> Result<usize, StoreError> {
        self.users
            .iter()
            .position(|u| u.id == id)
            .ok_or(StoreError::NotFound {
                resource: "user",
                id,
            })
    }
}

/// Process-lifetime user collection
pub struct MemoryUserStore {
    inner: RwLock<Inner>,
}

impl MemoryUserStore {
    /// Build a store holding `users` in the given order.
    ///
    /// The first assigned id is one past the largest seeded id.
    pub fn new(users: Vec<User>) -> Self {
        let next_id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        Self {
            inner: RwLock::new(Inner { users, next_id }),
        }
    }

    /// Store pre-populated with the five demo users.
    pub fn seeded() -> Self {
        Self::new(seed_users())
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.inner.read().await.users.len()
    }

    #[cfg(test)]
    async fn is_empty(&self) -> bool {
        self.inner.read().await.users.is_empty()
    }
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list(&self) -> Vec<User> {
        self.inner.read().await.users.clone()
    }

    async fn get(&self, id: UserId) -> Result<User, StoreError> {
        let inner = self.inner.read().await;
        let idx = inner.position(id)?;
        Ok(inner.users[idx].clone())
    }

    async fn create(&self, new: NewUser) -> User {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let user = new.with_id(id);
        inner.users.push(user.clone());
        debug!(id, total = inner.users.len(), "user created");
        user
    }

    async fn update(&self, id: UserId, changes: UpdateUser) -> Result<User, StoreError> {
        let mut inner = self.inner.write().await;
        let idx = inner.position(id)?;
        if changes.is_empty() {
            debug!(id, "update carried no fields");
        }
        let user = &mut inner.users[idx];
        changes.apply_to(user);
        debug!(id, "user updated");
        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> Result<User, StoreError> {
        let mut inner = self.inner.write().await;
        let idx = inner.position(id)?;
        let removed = inner.users.remove(idx);
        debug!(id, total = inner.users.len(), "user deleted");
        Ok(removed)
    }
}
